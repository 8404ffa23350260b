//! Console front door for the ride dispatch simulation.
//!
//! Seeds a scenario, runs the event loop to completion while streaming ride
//! lifecycle lines, then prints the summary statistics. Optionally exports the
//! completed rides to JSON or CSV.

mod export;

use std::path::PathBuf;
use std::process::exit;

use bevy_ecs::prelude::World;
use clap::Parser;

use dispatch_core::notify::{Notification, NotificationLog};
use dispatch_core::runner::{run_until_empty_with_hook, simulation_schedule};
use dispatch_core::scenario::{build_scenario, ScenarioParams};
use dispatch_core::telemetry::{summarize, SimTelemetry};

#[derive(Parser)]
#[command(
    name = "dispatch_cli",
    about = "Ride dispatch marketplace simulator",
    long_about = "Simulates a ride-dispatch marketplace: customers request rides,\n\
                  drivers are matched by a weighted round-robin scheduler, and the\n\
                  run ends with aggregate wait and throughput statistics."
)]
struct Cli {
    /// Number of drivers (must be positive)
    #[arg(long, default_value_t = 10)]
    drivers: usize,
    /// Number of customers (must be positive)
    #[arg(long, default_value_t = 50)]
    customers: usize,
    /// Random seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// Suppress the per-ride lifecycle lines
    #[arg(long)]
    quiet: bool,
    /// Write the summary and completed rides to a JSON file
    #[arg(long, value_name = "PATH")]
    export_json: Option<PathBuf>,
    /// Write the completed rides to a CSV file
    #[arg(long, value_name = "PATH")]
    export_csv: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if cli.drivers == 0 || cli.customers == 0 {
        eprintln!("error: driver and customer counts must be positive");
        exit(2);
    }
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut world = World::new();
    let mut params = ScenarioParams {
        num_customers: cli.customers,
        num_drivers: cli.drivers,
        ..Default::default()
    };
    if let Some(seed) = cli.seed {
        params = params.with_seed(seed);
    }
    build_scenario(&mut world, params);

    let mut schedule = simulation_schedule();
    let max_steps = 2 * cli.customers;
    let mut printed = 0;
    run_until_empty_with_hook(&mut world, &mut schedule, max_steps, |world, _event| {
        if cli.quiet {
            return;
        }
        let log = world.resource::<NotificationLog>();
        for notification in &log.entries()[printed..] {
            println!("{}", format_notification(notification));
        }
        printed = log.len();
    });

    let summary = summarize(&world);
    println!("-----------------------------------------------------------------");
    println!("Simulation completed.");
    println!("Total number of rides served: {}", summary.rides_served);
    match summary.average_wait_secs {
        Some(wait) => println!("Average wait time for a ride: {}", format_hms(wait as u64)),
        None => println!("Average wait time for a ride: n/a"),
    }
    println!(
        "Average number of rides handled per driver: {:.2}",
        summary.rides_per_driver
    );

    if cli.export_json.is_some() || cli.export_csv.is_some() {
        let telemetry = world.resource::<SimTelemetry>();
        if let Some(path) = &cli.export_json {
            export::export_to_json(path, &summary, &telemetry.completed_rides)?;
            println!("Wrote JSON report to {}", path.display());
        }
        if let Some(path) = &cli.export_csv {
            export::export_to_csv(path, &telemetry.completed_rides)?;
            println!("Wrote CSV report to {}", path.display());
        }
    }

    Ok(())
}

/// Simulation seconds as `HHhMMmSSs`.
fn format_hms(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs / 60) % 60;
    let seconds = total_secs % 60;
    format!("{hours:02}h{minutes:02}m{seconds:02}s")
}

fn format_notification(notification: &Notification) -> String {
    match notification {
        Notification::RideRequested(request) => format!(
            "[RIDE REQUESTED] [Request Time:   {}] [Customer: {}] [Ride Type: {}] [From: {}] [To: {}]",
            format_hms(request.requested_at),
            request.customer_name,
            request.category,
            request.origin,
            request.destination,
        ),
        Notification::RideStarted(completion) => format!(
            "[RIDE STARTED]   [Departure Time: {}] [Customer: {}] [Ride Type: {}] [Driver: {}]",
            format_hms(completion.departed_at),
            completion.request.customer_name,
            completion.request.category,
            completion.driver.name,
        ),
        Notification::RideEnded(completion) => format!(
            "[RIDE ENDED]     [Arrival Time:   {}] [Customer: {}] [Ride Type: {}] [Driver: {}]",
            format_hms(completion.arrived_at),
            completion.request.customer_name,
            completion.request.category,
            completion.driver.name,
        ),
    }
}

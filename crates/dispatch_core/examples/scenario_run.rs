//! Run a 50 customers / 10 drivers scenario and print the summary.
//!
//! Run with: cargo run -p dispatch_core --example scenario_run

use bevy_ecs::prelude::World;
use dispatch_core::runner::{run_until_empty, simulation_schedule};
use dispatch_core::scenario::{build_scenario, ScenarioParams};
use dispatch_core::telemetry::{summarize, SimTelemetry};

fn main() {
    const NUM_CUSTOMERS: usize = 50;
    const NUM_DRIVERS: usize = 10;

    let mut world = World::new();
    build_scenario(
        &mut world,
        ScenarioParams {
            num_customers: NUM_CUSTOMERS,
            num_drivers: NUM_DRIVERS,
            ..Default::default()
        }
        .with_seed(123),
    );

    let mut schedule = simulation_schedule();
    let steps = run_until_empty(&mut world, &mut schedule, 2 * NUM_CUSTOMERS);

    println!(
        "--- Scenario run ({NUM_CUSTOMERS} customers, {NUM_DRIVERS} drivers, seed 123) ---"
    );
    println!("Steps executed: {steps}");

    let summary = summarize(&world);
    println!("Rides served: {}", summary.rides_served);
    match summary.average_wait_secs {
        Some(wait) => println!("Average wait: {wait:.0} s"),
        None => println!("Average wait: n/a"),
    }
    println!("Rides per driver: {:.2}", summary.rides_per_driver);

    println!("\nSample completed rides (first 10):");
    let telemetry = world.resource::<SimTelemetry>();
    for (i, ride) in telemetry.completed_rides.iter().take(10).enumerate() {
        println!(
            "  {}  {} [{}] {:.1} mi  requested={} s  departed={} s  arrived={} s  driver={}",
            i + 1,
            ride.customer.name,
            ride.category,
            ride.distance_miles,
            ride.requested_at,
            ride.departed_at,
            ride.arrived_at,
            ride.driver.name,
        );
    }
}

//! Export completed rides and the run summary to JSON or CSV.

use std::error::Error;
use std::fs::File;
use std::path::Path;

use dispatch_core::model::Ride;
use dispatch_core::telemetry::SimulationSummary;

#[derive(serde::Serialize)]
struct RunReport<'a> {
    summary: &'a SimulationSummary,
    rides: &'a [Ride],
}

pub fn export_to_json(
    path: &Path,
    summary: &SimulationSummary,
    rides: &[Ride],
) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &RunReport { summary, rides })?;
    Ok(())
}

pub fn export_to_csv(path: &Path, rides: &[Ride]) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    write_csv(rides, file)
}

fn write_csv<W: std::io::Write>(rides: &[Ride], writer: W) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([
        "customer",
        "pickup",
        "dropoff",
        "category",
        "driver",
        "driver_rides_completed",
        "requested_at_secs",
        "departed_at_secs",
        "arrived_at_secs",
        "wait_secs",
        "distance_miles",
        "duration_secs",
    ])?;

    for ride in rides {
        wtr.write_record([
            ride.customer.name.clone(),
            ride.customer.pickup.clone(),
            ride.customer.dropoff.clone(),
            ride.category.to_string(),
            ride.driver.name.clone(),
            ride.driver.rides_completed.to_string(),
            ride.requested_at.to_string(),
            ride.departed_at.to_string(),
            ride.arrived_at.to_string(),
            ride.wait_secs().to_string(),
            format!("{:.2}", ride.distance_miles),
            ride.duration_secs.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

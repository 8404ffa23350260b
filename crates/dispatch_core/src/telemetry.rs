//! Telemetry / KPIs: records completed rides and computes the end-of-run summary.

use bevy_ecs::prelude::{Resource, World};
use serde::Serialize;

use crate::model::Ride;
use crate::pool::DriverPool;

/// Collects completed rides. Appended to once per completion event.
#[derive(Debug, Default, Resource)]
pub struct SimTelemetry {
    pub completed_rides: Vec<Ride>,
}

/// Aggregate statistics for one finished run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    pub rides_served: usize,
    /// Mean of `departed_at - requested_at` over all rides; `None` when no
    /// ride was served.
    pub average_wait_secs: Option<f64>,
    /// Mean of final `rides_completed` across the driver pool.
    pub rides_per_driver: f64,
}

/// Computes the summary after the event loop has drained. Every driver is idle
/// again at that point, so the pool holds the full roster.
pub fn summarize(world: &World) -> SimulationSummary {
    let telemetry = world.resource::<SimTelemetry>();
    let pool = world.resource::<DriverPool>();

    let rides_served = telemetry.completed_rides.len();
    let average_wait_secs = if rides_served == 0 {
        None
    } else {
        let total_wait: u64 = telemetry.completed_rides.iter().map(|r| r.wait_secs()).sum();
        Some(total_wait as f64 / rides_served as f64)
    };
    let rides_per_driver = if pool.is_empty() {
        0.0
    } else {
        let total: u64 = pool.iter().map(|d| u64::from(d.rides_completed)).sum();
        total as f64 / pool.len() as f64
    };

    SimulationSummary {
        rides_served,
        average_wait_secs,
        rides_per_driver,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::category::Category;
    use crate::model::{Customer, Driver};
    use crate::test_helpers::dispatch_world;

    fn ride(requested_at: u64, departed_at: u64) -> Ride {
        Ride {
            customer: Customer {
                name: "Noor Haddad".to_string(),
                pickup: "1 First St".to_string(),
                dropoff: "2 Second St".to_string(),
            },
            driver: Driver::new("Lee Tran", 60.0),
            requested_at,
            departed_at,
            arrived_at: departed_at + 600,
            distance_miles: 10.0,
            category: Category::Standard,
            duration_secs: 600,
        }
    }

    #[test]
    fn empty_run_has_no_average_wait() {
        let mut world = dispatch_world();
        world
            .resource_mut::<DriverPool>()
            .release(Driver::new("Lee Tran", 60.0));

        let summary = summarize(&world);
        assert_eq!(summary.rides_served, 0);
        assert_eq!(summary.average_wait_secs, None);
        assert_eq!(summary.rides_per_driver, 0.0);
    }

    #[test]
    fn summary_averages_wait_and_rides_per_driver() {
        let mut world = dispatch_world();
        {
            let mut telemetry = world.resource_mut::<SimTelemetry>();
            telemetry.completed_rides.push(ride(0, 100));
            telemetry.completed_rides.push(ride(50, 250));
        }
        {
            let mut pool = world.resource_mut::<DriverPool>();
            let driver = Driver::new("Lee Tran", 60.0);
            pool.release(driver.after_completion().after_completion());
            pool.release(Driver::new("Ada Okoye", 60.0));
        }

        let summary = summarize(&world);
        assert_eq!(summary.rides_served, 2);
        assert_eq!(summary.average_wait_secs, Some(150.0));
        assert_eq!(summary.rides_per_driver, 1.0);
    }
}

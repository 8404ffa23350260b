//! Scenario setup: seed the event queue with randomized ride requests and the
//! driver pool with drivers.
//!
//! Request times are uniform over a configurable window, distances uniform in
//! `[1, 1 + max)` miles, categories uniform over the four types. Names and
//! addresses come from embedded mock tables. All randomness lives here; the
//! engine itself is deterministic for a given seeded world.

use bevy_ecs::prelude::World;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::builders::RideBuilders;
use crate::category::Category;
use crate::clock::{Event, RideRequest, SimulationClock};
use crate::model::Driver;
use crate::notify::NotificationLog;
use crate::pool::DriverPool;
use crate::runner::EventMetrics;
use crate::scheduler::RequestScheduler;
use crate::telemetry::SimTelemetry;

const FIRST_NAMES: &[&str] = &[
    "Ava", "Elliot", "Priya", "Marcus", "Ines", "Tomas", "Greta", "Jamal", "Sofia", "Declan",
    "Mei", "Viktor",
];

const LAST_NAMES: &[&str] = &[
    "Alvarez", "Bennett", "Chowdhury", "Dimitrov", "Eriksen", "Fontaine", "Gallagher", "Hsu",
    "Iwata", "Jansen", "Kowalski", "Lindgren",
];

const STREETS: &[&str] = &[
    "Maple Ave", "Birchwood Dr", "Cannery Row", "Dockside Ln", "Elm St", "Foster Blvd",
    "Granite Way", "Harborview Ter", "Ivy Ct", "Juniper Rd", "Kingfisher Pl", "Larkspur St",
    "Meridian Ave", "Northgate Dr", "Orchard St", "Pemberton Rd",
];

/// Default time window for ride requests: 1 hour (simulation seconds).
const DEFAULT_REQUEST_WINDOW_SECS: u64 = 60 * 60;
const DEFAULT_MAX_DISTANCE_MILES: f64 = 120.0;
const DEFAULT_DRIVER_SPEED_MPH: f64 = 60.0;
const MIN_DISTANCE_MILES: f64 = 1.0;

/// Parameters for building a scenario.
#[derive(Debug, Clone)]
pub struct ScenarioParams {
    pub num_customers: usize,
    pub num_drivers: usize,
    /// Random seed for reproducibility (optional; if None, uses entropy).
    pub seed: Option<u64>,
    /// Request times are uniform in `[0, request_window_secs]`.
    pub request_window_secs: u64,
    /// Distances are uniform in `[1, 1 + max_distance_miles)`.
    pub max_distance_miles: f64,
    pub driver_speed_mph: f64,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            num_customers: 50,
            num_drivers: 10,
            seed: None,
            request_window_secs: DEFAULT_REQUEST_WINDOW_SECS,
            max_distance_miles: DEFAULT_MAX_DISTANCE_MILES,
            driver_speed_mph: DEFAULT_DRIVER_SPEED_MPH,
        }
    }
}

impl ScenarioParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_request_window_secs(mut self, secs: u64) -> Self {
        self.request_window_secs = secs;
        self
    }

    pub fn with_max_distance_miles(mut self, miles: f64) -> Self {
        self.max_distance_miles = miles;
        self
    }

    pub fn with_driver_speed_mph(mut self, mph: f64) -> Self {
        self.driver_speed_mph = mph;
        self
    }
}

fn full_names() -> Vec<String> {
    // Cross product of the two tables keeps the sample pool large.
    let mut names = Vec::with_capacity(FIRST_NAMES.len() * LAST_NAMES.len());
    for first in FIRST_NAMES {
        for last in LAST_NAMES {
            names.push(format!("{first} {last}"));
        }
    }
    names
}

fn sample_address(rng: &mut StdRng) -> String {
    let number = rng.gen_range(1..1000);
    let street = STREETS[rng.gen_range(0..STREETS.len())];
    format!("{number} {street}")
}

/// Populates `world` with every dispatch resource, schedules the initial
/// request events, and fills the driver pool. Caller must have already created
/// `world`; this inserts resources only.
pub fn build_scenario(world: &mut World, params: ScenarioParams) {
    world.insert_resource(SimulationClock::default());
    world.insert_resource(RequestScheduler::default());
    world.insert_resource(DriverPool::default());
    world.insert_resource(SimTelemetry::default());
    world.insert_resource(NotificationLog::default());
    world.insert_resource(RideBuilders::default());
    world.insert_resource(EventMetrics::default());

    let mut rng: StdRng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let names = full_names();

    let mut clock = world.resource_mut::<SimulationClock>();
    for _ in 0..params.num_customers {
        let request = RideRequest {
            requested_at: rng.gen_range(0..=params.request_window_secs),
            customer_name: names[rng.gen_range(0..names.len())].clone(),
            origin: sample_address(&mut rng),
            destination: sample_address(&mut rng),
            distance_miles: rng.gen_range(0.0..params.max_distance_miles) + MIN_DISTANCE_MILES,
            category: Category::ALL[rng.gen_range(0..Category::ALL.len())],
        };
        clock.schedule(Event::Requested(request));
    }
    drop(clock);

    let mut pool = world.resource_mut::<DriverPool>();
    for _ in 0..params.num_drivers {
        let name = names[rng.gen_range(0..names.len())].clone();
        pool.release(Driver::new(name, params.driver_speed_mph));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_scenario_seeds_requests_and_drivers() {
        let mut world = World::new();
        build_scenario(
            &mut world,
            ScenarioParams {
                num_customers: 25,
                num_drivers: 4,
                ..Default::default()
            }
            .with_seed(42),
        );

        let clock = world.resource::<SimulationClock>();
        assert_eq!(clock.pending_event_count(), 25, "one request per customer");

        let pool = world.resource::<DriverPool>();
        assert_eq!(pool.len(), 4);
        for driver in pool.iter() {
            assert_eq!(driver.rides_completed, 0);
            assert_eq!(driver.speed_mph, DEFAULT_DRIVER_SPEED_MPH);
        }
    }

    #[test]
    fn seeded_requests_satisfy_data_model_invariants() {
        let mut world = World::new();
        build_scenario(
            &mut world,
            ScenarioParams::default().with_seed(7).with_request_window_secs(600),
        );

        let mut clock = world.resource_mut::<SimulationClock>();
        while let Ok(event) = clock.pop_next() {
            let Event::Requested(request) = event else {
                panic!("scenario schedules request events only")
            };
            assert!(request.requested_at <= 600);
            assert!(request.distance_miles >= MIN_DISTANCE_MILES);
            assert!(request.distance_miles < MIN_DISTANCE_MILES + DEFAULT_MAX_DISTANCE_MILES);
        }
    }
}

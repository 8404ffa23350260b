//! Test helpers for common setup across unit and integration tests.

use bevy_ecs::prelude::World;

use crate::builders::RideBuilders;
use crate::category::Category;
use crate::clock::{RideRequest, SimulationClock};
use crate::model::Driver;
use crate::notify::NotificationLog;
use crate::pool::DriverPool;
use crate::runner::EventMetrics;
use crate::scheduler::RequestScheduler;
use crate::telemetry::SimTelemetry;

/// A request with placeholder customer and addresses.
pub fn request(category: Category, distance_miles: f64, requested_at: u64) -> RideRequest {
    request_named("Jordan Pace", category, distance_miles, requested_at)
}

/// A request with an identifiable customer name, for asserting service order.
pub fn request_named(
    customer_name: &str,
    category: Category,
    distance_miles: f64,
    requested_at: u64,
) -> RideRequest {
    RideRequest {
        requested_at,
        customer_name: customer_name.to_string(),
        origin: "12 Bayview Ave".to_string(),
        destination: "480 Harbor St".to_string(),
        distance_miles,
        category,
    }
}

pub fn driver(name: &str) -> Driver {
    Driver::new(name, 60.0)
}

/// A world with every dispatch resource installed but nothing seeded.
/// For full randomized scenarios use [crate::scenario::build_scenario].
pub fn dispatch_world() -> World {
    let mut world = World::new();
    world.insert_resource(SimulationClock::default());
    world.insert_resource(RequestScheduler::default());
    world.insert_resource(DriverPool::default());
    world.insert_resource(SimTelemetry::default());
    world.insert_resource(NotificationLog::default());
    world.insert_resource(RideBuilders::default());
    world.insert_resource(EventMetrics::default());
    world
}

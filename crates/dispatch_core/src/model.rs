use serde::Serialize;

use crate::category::Category;

/// An immutable driver snapshot. Completing a ride never mutates a driver in
/// place; the pool receives a fresh value from [Driver::after_completion].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Driver {
    pub name: String,
    pub rides_completed: u32,
    pub speed_mph: f64,
}

impl Driver {
    pub fn new(name: impl Into<String>, speed_mph: f64) -> Self {
        Self {
            name: name.into(),
            rides_completed: 0,
            speed_mph,
        }
    }

    /// The same driver with one more completed ride.
    pub fn after_completion(&self) -> Driver {
        Driver {
            name: self.name.clone(),
            rides_completed: self.rides_completed + 1,
            speed_mph: self.speed_mph,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub name: String,
    pub pickup: String,
    pub dropoff: String,
}

/// Historical record of one completed trip. Created exactly once, when a
/// completion event is processed, and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ride {
    pub customer: Customer,
    pub driver: Driver,
    pub requested_at: u64,
    pub departed_at: u64,
    pub arrived_at: u64,
    pub distance_miles: f64,
    pub category: Category,
    pub duration_secs: u64,
}

impl Ride {
    /// Seconds the customer waited between requesting and departing.
    pub fn wait_secs(&self) -> u64 {
        self.departed_at.saturating_sub(self.requested_at)
    }
}

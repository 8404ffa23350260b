//! Category-keyed ride construction.
//!
//! Each category has one builder function that materializes a completed
//! [Ride] from a [RideCompletion]. A table maps category to builder; a missing
//! entry is a fatal configuration error, not a runtime condition.

use std::collections::HashMap;

use bevy_ecs::prelude::Resource;

use crate::category::Category;
use crate::clock::RideCompletion;
use crate::model::{Customer, Ride};

pub type RideBuilder = fn(&RideCompletion) -> Ride;

#[derive(Debug, Resource)]
pub struct RideBuilders {
    builders: HashMap<Category, RideBuilder>,
}

impl Default for RideBuilders {
    fn default() -> Self {
        let mut table = RideBuilders::empty();
        table.register(Category::Express, express_ride);
        table.register(Category::Standard, standard_ride);
        table.register(Category::WaitAndSave, wait_and_save_ride);
        table.register(Category::EnvironmentallyConscious, environmentally_conscious_ride);
        table
    }
}

impl RideBuilders {
    /// A table with no registered builders; callers must register one per
    /// category they dispatch.
    pub fn empty() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    pub fn register(&mut self, category: Category, builder: RideBuilder) {
        self.builders.insert(category, builder);
    }

    /// Builds the ride for the completion's category.
    ///
    /// # Panics
    ///
    /// Panics if no builder is registered for the category; the table is fixed
    /// at configuration time, so a missing entry is a fatal setup error.
    pub fn build(&self, completion: &RideCompletion) -> Ride {
        let category = completion.request.category;
        let builder = self
            .builders
            .get(&category)
            .unwrap_or_else(|| panic!("no ride builder registered for category {category}"));
        builder(completion)
    }
}

fn ride_with_category(category: Category, completion: &RideCompletion) -> Ride {
    let request = &completion.request;
    Ride {
        customer: Customer {
            name: request.customer_name.clone(),
            pickup: request.origin.clone(),
            dropoff: request.destination.clone(),
        },
        driver: completion.driver.clone(),
        requested_at: request.requested_at,
        departed_at: completion.departed_at,
        arrived_at: completion.arrived_at,
        distance_miles: request.distance_miles,
        category,
        duration_secs: completion.duration_secs,
    }
}

fn express_ride(completion: &RideCompletion) -> Ride {
    ride_with_category(Category::Express, completion)
}

fn standard_ride(completion: &RideCompletion) -> Ride {
    ride_with_category(Category::Standard, completion)
}

fn wait_and_save_ride(completion: &RideCompletion) -> Ride {
    ride_with_category(Category::WaitAndSave, completion)
}

fn environmentally_conscious_ride(completion: &RideCompletion) -> Ride {
    ride_with_category(Category::EnvironmentallyConscious, completion)
}

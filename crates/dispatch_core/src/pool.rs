//! Idle driver pool. Plain FIFO: drivers are handed out in the order they
//! became idle, with no priority between them.

use std::collections::VecDeque;

use bevy_ecs::prelude::Resource;

use crate::error::EmptyQueueError;
use crate::model::Driver;

#[derive(Debug, Default, Resource)]
pub struct DriverPool {
    idle: VecDeque<Driver>,
}

impl DriverPool {
    /// Hands out the driver that has been idle the longest.
    pub fn take(&mut self) -> Result<Driver, EmptyQueueError> {
        self.idle.pop_front().ok_or(EmptyQueueError)
    }

    /// Returns a driver to the back of the pool.
    pub fn release(&mut self, driver: Driver) {
        self.idle.push_back(driver);
    }

    pub fn is_empty(&self) -> bool {
        self.idle.is_empty()
    }

    pub fn len(&self) -> usize {
        self.idle.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Driver> {
        self.idle.iter()
    }
}

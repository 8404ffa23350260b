//! Observer notifications. The engine appends one entry per lifecycle step;
//! observers (the CLI, tests) read the log after each step. Purely
//! informational: nothing in the simulation depends on a notification being
//! consumed.

use bevy_ecs::prelude::Resource;

use crate::clock::{RideCompletion, RideRequest};

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// A request event was popped from the event queue.
    RideRequested(RideRequest),
    /// A request was matched to a driver and departed.
    RideStarted(RideCompletion),
    /// A completion event was popped and the ride recorded.
    RideEnded(RideCompletion),
}

#[derive(Debug, Default, Resource)]
pub struct NotificationLog {
    entries: Vec<Notification>,
}

impl NotificationLog {
    pub fn record(&mut self, notification: Notification) {
        self.entries.push(notification);
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

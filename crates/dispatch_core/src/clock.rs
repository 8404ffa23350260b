//! Time-ordered event queue driving the simulation clock.
//!
//! Events are popped strictly by timestamp; popping advances [SimulationClock::now]
//! to the popped event's timestamp. Equal timestamps resolve in insertion order
//! via a monotonically increasing sequence number (a deterministic, non-contractual
//! tie-break).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use bevy_ecs::prelude::Resource;

use crate::category::Category;
use crate::error::EmptyQueueError;
use crate::model::Driver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    RideRequested,
    RideFinished,
}

/// A newly arrived ride request, before any driver is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct RideRequest {
    /// Simulation time (seconds) at which the request arrives.
    pub requested_at: u64,
    pub customer_name: String,
    pub origin: String,
    pub destination: String,
    pub distance_miles: f64,
    pub category: Category,
}

/// A matched ride that will finish at `arrived_at`.
///
/// `departed_at` is the moment the driver was actually assigned: the request's
/// own timestamp when a driver was idle at request time, or the freeing
/// completion's timestamp when the request waited in the scheduler.
#[derive(Debug, Clone, PartialEq)]
pub struct RideCompletion {
    pub request: RideRequest,
    pub departed_at: u64,
    pub arrived_at: u64,
    pub duration_secs: u64,
    pub driver: Driver,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Requested(RideRequest),
    Finished(RideCompletion),
}

impl Event {
    /// Timestamp used to order the event in the queue.
    pub fn timestamp(&self) -> u64 {
        match self {
            Event::Requested(request) => request.requested_at,
            Event::Finished(completion) => completion.arrived_at,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Event::Requested(_) => EventKind::RideRequested,
            Event::Finished(_) => EventKind::RideFinished,
        }
    }
}

/// Most recently popped event; the runner inserts this before running the schedule.
#[derive(Debug, Clone, Resource)]
pub struct CurrentEvent(pub Event);

#[derive(Debug, Clone)]
struct ScheduledEvent {
    seq: u64,
    event: Event,
}

impl ScheduledEvent {
    fn key(&self) -> (u64, u64) {
        (self.event.timestamp(), self.seq)
    }
}

impl PartialEq for ScheduledEvent {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ScheduledEvent {}

impl Ord for ScheduledEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap a min-heap by (timestamp, seq).
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default, Resource)]
pub struct SimulationClock {
    now: u64,
    next_seq: u64,
    events: BinaryHeap<ScheduledEvent>,
}

impl SimulationClock {
    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn schedule(&mut self, event: Event) {
        debug_assert!(
            event.timestamp() >= self.now,
            "event timestamp must be >= current time"
        );
        let seq = self.next_seq;
        self.next_seq += 1;
        self.events.push(ScheduledEvent { seq, event });
    }

    /// Pops the earliest event and advances the clock to its timestamp.
    pub fn pop_next(&mut self) -> Result<Event, EmptyQueueError> {
        let scheduled = self.events.pop().ok_or(EmptyQueueError)?;
        self.now = scheduled.event.timestamp();
        Ok(scheduled.event)
    }

    pub fn next_event_time(&self) -> Option<u64> {
        self.events.peek().map(|s| s.event.timestamp())
    }

    pub fn pending_event_count(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

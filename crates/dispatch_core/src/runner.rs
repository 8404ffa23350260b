//! Simulation runner: advances the clock and routes events into the ECS.
//!
//! Clock progression and event routing happen here, outside systems. Each step
//! pops the next event from [SimulationClock], inserts it as [CurrentEvent],
//! then runs the schedule. The loop reaches its fixed point with the event
//! queue and the request scheduler both empty: completions are only produced
//! by servicing requests, and each request is serviced at most once, so a run
//! of `n` requests takes at most `2 * n` steps.

use bevy_ecs::prelude::{Res, Resource, Schedule, World};
use bevy_ecs::schedule::IntoSystemConfigs;

use crate::clock::{CurrentEvent, Event, EventKind, SimulationClock};
use crate::systems::{ride_finished::ride_finished_system, ride_requested::ride_requested_system};

fn is_ride_requested(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind() == EventKind::RideRequested)
        .unwrap_or(false)
}

fn is_ride_finished(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind() == EventKind::RideFinished)
        .unwrap_or(false)
}

/// Per-kind event counters, updated by the runner on every step.
#[derive(Debug, Default, Resource)]
pub struct EventMetrics {
    pub requested_events: usize,
    pub finished_events: usize,
}

impl EventMetrics {
    pub fn record_event(&mut self, kind: EventKind) {
        match kind {
            EventKind::RideRequested => self.requested_events += 1,
            EventKind::RideFinished => self.finished_events += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.requested_events + self.finished_events
    }
}

/// Runs one simulation step: pops the next event, inserts it as [CurrentEvent],
/// then runs the schedule. Returns `false` once the clock is empty.
pub fn run_next_event(world: &mut World, schedule: &mut Schedule) -> bool {
    let event = match world.resource_mut::<SimulationClock>().pop_next() {
        Ok(event) => event,
        Err(_) => return false,
    };

    if let Some(mut metrics) = world.get_resource_mut::<EventMetrics>() {
        metrics.record_event(event.kind());
    }

    world.insert_resource(CurrentEvent(event));
    schedule.run(world);
    true
}

/// Runs one simulation step and invokes `hook` after the schedule completes.
pub fn run_next_event_with_hook<F>(world: &mut World, schedule: &mut Schedule, mut hook: F) -> bool
where
    F: FnMut(&World, &Event),
{
    let event = match world.resource_mut::<SimulationClock>().pop_next() {
        Ok(event) => event,
        Err(_) => return false,
    };

    if let Some(mut metrics) = world.get_resource_mut::<EventMetrics>() {
        metrics.record_event(event.kind());
    }

    world.insert_resource(CurrentEvent(event.clone()));
    schedule.run(world);
    hook(world, &event);
    true
}

/// Runs simulation steps until the event queue is empty or `max_steps` is
/// reached. Returns the number of steps executed.
pub fn run_until_empty(world: &mut World, schedule: &mut Schedule, max_steps: usize) -> usize {
    let mut steps = 0;
    while steps < max_steps && run_next_event(world, schedule) {
        steps += 1;
    }
    steps
}

/// Runs simulation steps until empty and invokes `hook` after each step.
pub fn run_until_empty_with_hook<F>(
    world: &mut World,
    schedule: &mut Schedule,
    max_steps: usize,
    mut hook: F,
) -> usize
where
    F: FnMut(&World, &Event),
{
    let mut steps = 0;
    while steps < max_steps && run_next_event_with_hook(world, schedule, &mut hook) {
        steps += 1;
    }
    steps
}

/// Builds the dispatch schedule: the two event handlers, each gated on the
/// current event's kind.
pub fn simulation_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((
        ride_requested_system.run_if(is_ride_requested),
        ride_finished_system.run_if(is_ride_finished),
    ));
    schedule
}

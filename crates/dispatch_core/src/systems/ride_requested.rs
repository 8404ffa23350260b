use bevy_ecs::prelude::{Res, ResMut};

use crate::clock::{CurrentEvent, Event, SimulationClock};
use crate::notify::{Notification, NotificationLog};
use crate::pool::DriverPool;
use crate::scheduler::RequestScheduler;
use crate::systems::try_dispatch;

/// Handles a popped request event: the request enters the scheduler, then a
/// match is attempted immediately. On this path the departure time is the
/// request's own timestamp, so a customer matched at request time waits zero
/// seconds.
pub fn ride_requested_system(
    event: Res<CurrentEvent>,
    mut clock: ResMut<SimulationClock>,
    mut scheduler: ResMut<RequestScheduler>,
    mut pool: ResMut<DriverPool>,
    mut log: ResMut<NotificationLog>,
) {
    let Event::Requested(request) = &event.0 else {
        return;
    };

    log.record(Notification::RideRequested(request.clone()));
    scheduler.enqueue(request.clone());

    let departed_at = clock.now();
    try_dispatch(
        departed_at,
        &mut clock,
        &mut scheduler,
        &mut pool,
        &mut log,
    );
}

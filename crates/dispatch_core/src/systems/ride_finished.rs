use bevy_ecs::prelude::{Res, ResMut};

use crate::builders::RideBuilders;
use crate::clock::{CurrentEvent, Event, SimulationClock};
use crate::notify::{Notification, NotificationLog};
use crate::pool::DriverPool;
use crate::scheduler::RequestScheduler;
use crate::systems::try_dispatch;
use crate::telemetry::SimTelemetry;

/// Handles a popped completion event: the ride is materialized and recorded,
/// the driver returns to the pool with one more completed ride, and a waiting
/// request (if any) is matched. On this path the departure time is this
/// event's timestamp, the moment the driver actually freed up, while the
/// matched request keeps its original request time.
pub fn ride_finished_system(
    event: Res<CurrentEvent>,
    builders: Res<RideBuilders>,
    mut clock: ResMut<SimulationClock>,
    mut scheduler: ResMut<RequestScheduler>,
    mut pool: ResMut<DriverPool>,
    mut telemetry: ResMut<SimTelemetry>,
    mut log: ResMut<NotificationLog>,
) {
    let Event::Finished(completion) = &event.0 else {
        return;
    };

    let ride = builders.build(completion);
    telemetry.completed_rides.push(ride);
    log.record(Notification::RideEnded(completion.clone()));

    pool.release(completion.driver.after_completion());

    let departed_at = completion.arrived_at;
    try_dispatch(
        departed_at,
        &mut clock,
        &mut scheduler,
        &mut pool,
        &mut log,
    );
}

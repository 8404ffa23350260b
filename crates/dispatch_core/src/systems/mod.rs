//! Event-reacting systems: the dispatch state machine.
//!
//! State lives entirely in the queue resources; the machine is the pair of
//! handlers below plus the shared match step in [try_dispatch].

pub mod ride_finished;
pub mod ride_requested;

use crate::clock::{Event, RideCompletion, SimulationClock};
use crate::estimate::estimated_arrival;
use crate::notify::{Notification, NotificationLog};
use crate::pool::DriverPool;
use crate::scheduler::RequestScheduler;

/// Matches one pending request to one idle driver, if both exist.
///
/// `departed_at` is the moment the driver becomes available: the request's own
/// timestamp on the request path, the finishing ride's arrival timestamp on
/// the completion path. The emitted completion event lands back in the clock.
pub(crate) fn try_dispatch(
    departed_at: u64,
    clock: &mut SimulationClock,
    scheduler: &mut RequestScheduler,
    pool: &mut DriverPool,
    log: &mut NotificationLog,
) {
    if scheduler.is_empty() || pool.is_empty() {
        return;
    }
    // Both checked non-empty above; failure here is an invariant violation.
    let driver = pool.take().expect("driver pool checked non-empty");
    let request = scheduler.dequeue().expect("scheduler checked non-empty");
    let arrived_at = estimated_arrival(request.distance_miles, driver.speed_mph, departed_at)
        .expect("seeded requests carry positive distance and speed");
    let completion = RideCompletion {
        duration_secs: arrived_at - departed_at,
        departed_at,
        arrived_at,
        driver,
        request,
    };
    clock.schedule(Event::Finished(completion.clone()));
    log.record(Notification::RideStarted(completion));
}

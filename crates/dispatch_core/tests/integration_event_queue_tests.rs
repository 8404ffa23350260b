use dispatch_core::category::Category;
use dispatch_core::clock::{Event, SimulationClock};
use dispatch_core::error::EmptyQueueError;
use dispatch_core::test_helpers::request;

#[test]
fn interleaved_pushes_and_pops_stay_time_ordered() {
    let mut clock = SimulationClock::default();
    for &at in &[40u64, 10, 30] {
        clock.schedule(Event::Requested(request(Category::Standard, 2.0, at)));
    }

    let mut popped = Vec::new();
    popped.push(clock.pop_next().expect("event").timestamp());

    // Push more events after the first pop; timestamps must stay >= now.
    for &at in &[25u64, 90, 12] {
        clock.schedule(Event::Requested(request(Category::Express, 2.0, at)));
    }
    while let Ok(event) = clock.pop_next() {
        popped.push(event.timestamp());
    }

    assert_eq!(popped, vec![10, 12, 25, 30, 40, 90]);
    for pair in popped.windows(2) {
        assert!(pair[0] <= pair[1], "pops are non-decreasing in timestamp");
    }
}

#[test]
fn pop_after_observing_empty_still_fails() {
    let mut clock = SimulationClock::default();
    assert!(clock.is_empty());
    assert_eq!(clock.pop_next(), Err(EmptyQueueError));
    assert_eq!(clock.pop_next(), Err(EmptyQueueError));
}

#[test]
fn pending_count_and_next_event_time_track_the_heap() {
    let mut clock = SimulationClock::default();
    assert_eq!(clock.next_event_time(), None);

    clock.schedule(Event::Requested(request(Category::WaitAndSave, 4.0, 17)));
    clock.schedule(Event::Requested(request(Category::WaitAndSave, 4.0, 3)));

    assert_eq!(clock.pending_event_count(), 2);
    assert_eq!(clock.next_event_time(), Some(3));

    clock.pop_next().expect("event");
    assert_eq!(clock.pending_event_count(), 1);
    assert_eq!(clock.next_event_time(), Some(17));
}

//! Weighted round-robin request scheduler.
//!
//! Pending requests are partitioned into four per-category queues. Within one
//! category the order is shortest distance first, ties broken by earliest
//! request time (SJF then FCFS). Across categories a weighted round robin
//! rotates through the queues: each category may be served up to its quantum
//! (Express 10, Standard 7, WaitAndSave 5, EnvironmentallyConscious 3) before
//! the rotation moves on, so higher-priority categories get proportionally
//! more service without starving the rest.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use bevy_ecs::prelude::Resource;

use crate::category::Category;
use crate::clock::RideRequest;
use crate::error::EmptyQueueError;

#[derive(Debug, Clone)]
struct PendingRequest {
    seq: u64,
    request: RideRequest,
}

impl PendingRequest {
    fn key(&self) -> (u64, u64, u64) {
        // total_cmp-compatible bit key: distances are always positive here.
        (
            self.request.distance_miles.to_bits(),
            self.request.requested_at,
            self.seq,
        )
    }
}

impl PartialEq for PendingRequest {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for PendingRequest {}

impl Ord for PendingRequest {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap a min-heap: shortest distance
        // first, then earliest request time, then insertion order.
        other
            .request
            .distance_miles
            .total_cmp(&self.request.distance_miles)
            .then_with(|| other.request.requested_at.cmp(&self.request.requested_at))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for PendingRequest {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Resource)]
pub struct RequestScheduler {
    queues: [BinaryHeap<PendingRequest>; 4],
    rotation: VecDeque<usize>,
    served: [u32; 4],
    next_seq: u64,
}

impl Default for RequestScheduler {
    fn default() -> Self {
        Self {
            queues: Default::default(),
            rotation: (0..Category::ALL.len()).collect(),
            served: [0; 4],
            next_seq: 0,
        }
    }
}

impl RequestScheduler {
    pub fn enqueue(&mut self, request: RideRequest) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queues[request.category.priority()].push(PendingRequest { seq, request });
    }

    /// Selects the next request per the weighted round-robin policy.
    pub fn dequeue(&mut self) -> Result<RideRequest, EmptyQueueError> {
        if self.is_empty() {
            return Err(EmptyQueueError);
        }
        let index = self.next_index();
        let pending = self.queues[index].pop().expect("selected queue is non-empty");
        self.served[index] += 1;
        Ok(pending.request)
    }

    /// Front of the rotation whose queue is non-empty and whose quantum is not
    /// exhausted. A category that is empty or exhausted has its served counter
    /// reset and rotates to the back without charging the others.
    fn next_index(&mut self) -> usize {
        loop {
            let front = *self.rotation.front().expect("rotation holds all categories");
            let quantum = Category::ALL[front].quantum();
            if self.served[front] >= quantum || self.queues[front].is_empty() {
                self.served[front] = 0;
                self.rotation.rotate_left(1);
            } else {
                return front;
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.queues.iter().all(|queue| queue.is_empty())
    }

    pub fn len(&self) -> usize {
        self.queues.iter().map(|queue| queue.len()).sum()
    }

    /// Number of pending requests in one category's queue.
    pub fn pending(&self, category: Category) -> usize {
        self.queues[category.priority()].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{request, request_named};

    #[test]
    fn dequeue_from_empty_scheduler_fails() {
        let mut scheduler = RequestScheduler::default();
        assert!(scheduler.is_empty());
        assert_eq!(scheduler.dequeue(), Err(EmptyQueueError));
    }

    #[test]
    fn within_category_shortest_distance_first_then_earliest() {
        let mut scheduler = RequestScheduler::default();
        scheduler.enqueue(request_named("long", Category::Standard, 5.0, 0));
        scheduler.enqueue(request_named("short-early", Category::Standard, 3.0, 1));
        scheduler.enqueue(request_named("short-late", Category::Standard, 3.0, 2));

        let order: Vec<String> = (0..3)
            .map(|_| scheduler.dequeue().expect("request").customer_name)
            .collect();

        assert_eq!(order, vec!["short-early", "short-late", "long"]);
    }

    #[test]
    fn weighted_fairness_over_one_full_rotation() {
        let mut scheduler = RequestScheduler::default();
        // Keep every category non-empty for the whole rotation.
        for category in Category::ALL {
            for i in 0..30 {
                scheduler.enqueue(request(category, 1.0 + i as f64, i));
            }
        }

        let mut counts = [0usize; 4];
        for _ in 0..25 {
            let served = scheduler.dequeue().expect("request");
            counts[served.category.priority()] += 1;
        }

        assert_eq!(counts, [10, 7, 5, 3]);

        // The pattern repeats on the next rotation.
        let mut second = [0usize; 4];
        for _ in 0..25 {
            let served = scheduler.dequeue().expect("request");
            second[served.category.priority()] += 1;
        }
        assert_eq!(second, [10, 7, 5, 3]);
    }

    #[test]
    fn pending_category_served_within_one_rotation() {
        let mut scheduler = RequestScheduler::default();
        for i in 0..100 {
            scheduler.enqueue(request(Category::Express, 2.0, i));
        }
        scheduler.enqueue(request_named("patient", Category::EnvironmentallyConscious, 9.0, 0));

        let rotation: u32 = Category::ALL.iter().map(|c| c.quantum()).sum();
        let mut position = None;
        for i in 0..rotation {
            let served = scheduler.dequeue().expect("request");
            if served.customer_name == "patient" {
                position = Some(i + 1);
                break;
            }
        }

        let position = position.expect("pending category served within one rotation");
        assert!(position <= rotation);
    }

    #[test]
    fn empty_front_category_is_skipped_without_charging_others() {
        let mut scheduler = RequestScheduler::default();
        scheduler.enqueue(request_named("std-1", Category::Standard, 2.0, 0));
        scheduler.enqueue(request_named("std-2", Category::Standard, 3.0, 0));

        // Express sits at the rotation front but is empty: reset-and-skip.
        assert_eq!(scheduler.dequeue().expect("request").customer_name, "std-1");

        // Standard stays at the front while its quantum lasts, even though an
        // express request arrived in the meantime.
        scheduler.enqueue(request_named("exp-1", Category::Express, 1.0, 1));
        assert_eq!(scheduler.dequeue().expect("request").customer_name, "std-2");
        assert_eq!(scheduler.dequeue().expect("request").customer_name, "exp-1");
    }

    #[test]
    fn len_and_pending_track_queues() {
        let mut scheduler = RequestScheduler::default();
        scheduler.enqueue(request(Category::Express, 1.0, 0));
        scheduler.enqueue(request(Category::Express, 2.0, 0));
        scheduler.enqueue(request(Category::WaitAndSave, 3.0, 0));

        assert_eq!(scheduler.len(), 3);
        assert_eq!(scheduler.pending(Category::Express), 2);
        assert_eq!(scheduler.pending(Category::WaitAndSave), 1);
        assert_eq!(scheduler.pending(Category::Standard), 0);

        scheduler.dequeue().expect("request");
        assert_eq!(scheduler.len(), 2);
    }
}

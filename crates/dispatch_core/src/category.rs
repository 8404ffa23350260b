use std::fmt;

use serde::Serialize;

/// The four ride categories, ordered by scheduling priority (Express highest).
///
/// The category decides which scheduler sub-queue a request enters, how large
/// that sub-queue's round-robin quantum is, and which ride builder constructs
/// the completed [crate::model::Ride].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    Express,
    Standard,
    WaitAndSave,
    EnvironmentallyConscious,
}

impl Category {
    /// All categories in priority order; `ALL[c.priority()] == c`.
    pub const ALL: [Category; 4] = [
        Category::Express,
        Category::Standard,
        Category::WaitAndSave,
        Category::EnvironmentallyConscious,
    ];

    /// Priority level, 0 (highest) through 3. Also the scheduler sub-queue index.
    pub fn priority(self) -> usize {
        match self {
            Category::Express => 0,
            Category::Standard => 1,
            Category::WaitAndSave => 2,
            Category::EnvironmentallyConscious => 3,
        }
    }

    pub fn from_priority(priority: usize) -> Option<Category> {
        Category::ALL.get(priority).copied()
    }

    /// Round-robin service quantum: consecutive dequeues this category may
    /// receive before the rotation moves on. Higher priority, larger quantum.
    pub fn quantum(self) -> u32 {
        match self {
            Category::Express => 10,
            Category::Standard => 7,
            Category::WaitAndSave => 5,
            Category::EnvironmentallyConscious => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Express => "Express",
            Category::Standard => "Standard",
            Category::WaitAndSave => "WaitAndSave",
            Category::EnvironmentallyConscious => "EnvironmentallyConscious",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_round_trips_through_all() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.priority(), i);
            assert_eq!(Category::from_priority(i), Some(*category));
        }
        assert_eq!(Category::from_priority(4), None);
    }

    #[test]
    fn quanta_sum_to_one_full_rotation() {
        let total: u32 = Category::ALL.iter().map(|c| c.quantum()).sum();
        assert_eq!(total, 25);
    }
}

use std::error::Error;
use std::fmt;

/// Returned by `pop`/`dequeue`/`take` on an empty queue.
///
/// The dispatch systems always check non-emptiness before dequeuing, so inside
/// the engine this error signals a broken invariant rather than a recoverable
/// runtime condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyQueueError;

impl fmt::Display for EmptyQueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dequeue from empty queue")
    }
}

impl Error for EmptyQueueError {}

/// Returned by the arrival estimator when a numeric argument is out of range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgumentError {
    message: String,
}

impl InvalidArgumentError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for InvalidArgumentError {}

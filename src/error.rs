//! Error types for queue operations

use thiserror::Error;

/// Recoverable failures reported by
/// [`LinkedQueue`](crate::linked_queue::LinkedQueue).
///
/// An empty-queue `pop` is absence, not an error, and is reported as `None`
/// instead of a variant here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("no node at position {position}")]
    NotFound { position: usize },
}

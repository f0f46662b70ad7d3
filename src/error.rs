//! Error type for indexed priority queue operations
//!
//! Every fallible operation validates its arguments before touching the
//! structure, so a returned error always means the queue is unchanged.

use thiserror::Error;

/// Error type for indexed priority queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PqError {
    /// The index lies outside `[0, capacity)`
    #[error("index {index} is out of range for capacity {capacity}")]
    InvalidArgument {
        /// The offending index
        index: usize,
        /// Capacity of the queue
        capacity: usize,
    },
    /// A queue was requested with a negative capacity
    #[error("cannot create a priority queue of negative capacity {0}")]
    NegativeCapacity(isize),
    /// The index is already associated with a key
    #[error("index {0} is already in the queue")]
    AlreadyExists(usize),
    /// The index is in range but not currently in the queue
    #[error("index {0} is not in the queue")]
    NotFound(usize),
    /// The queue holds no keys
    #[error("priority queue is empty")]
    EmptyQueue,
    /// The new key is greater than the current key
    #[error("new key for index {0} would not decrease the key")]
    InvalidDecrease(usize),
    /// The new key is not strictly greater than the current key
    #[error("new key for index {0} would not increase the key")]
    InvalidIncrease(usize),
    /// The key cannot be ordered (for example `NaN`)
    #[error("key for index {0} is not comparable to itself")]
    UnorderedKey(usize),
}

impl PqError {
    /// Returns true for the argument errors: an out-of-range index or a
    /// negative capacity.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            PqError::InvalidArgument { .. } | PqError::NegativeCapacity(_)
        )
    }
}

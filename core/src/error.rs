//! Error types for sequence construction and queries.

use thiserror::Error;

/// Failure of a sequence query or of frozen-sequence construction.
///
/// Query failures are local and final: the call either yields an element
/// (or a boolean) or fails with one of these. The `*_or_none` query forms
/// turn [`EmptySequence`](SequenceError::EmptySequence) and
/// [`NoMatch`](SequenceError::NoMatch) into `None`; nothing else is absorbed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// A required input could not be used as supplied.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },

    /// `first()` was called on a sequence with no elements.
    #[error("sequence contains no elements")]
    EmptySequence,

    /// A predicate-bearing `first` scanned every element without a match.
    #[error("sequence contains no matching element")]
    NoMatch,

    /// A builder received more elements than it was sized for.
    #[error("capacity of {capacity} elements exceeded")]
    CapacityExceeded { capacity: usize },

    /// Storage for the declared number of elements could not be reserved.
    #[error("cannot reserve storage for {capacity} elements")]
    AllocationFailed { capacity: usize },

    /// A builder was frozen before every slot was populated.
    #[error("expected {expected} elements, got {actual}")]
    Incomplete { expected: usize, actual: usize },
}

impl SequenceError {
    pub(crate) const fn invalid_argument(reason: &'static str) -> Self {
        SequenceError::InvalidArgument { reason }
    }

    /// Whether an `*_or_none` query form absorbs this error into `None`.
    pub const fn is_absence(&self) -> bool {
        matches!(self, SequenceError::EmptySequence | SequenceError::NoMatch)
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = SequenceError> = core::result::Result<T, E>;

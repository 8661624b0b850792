use alloc::vec::Vec;

use crate::error::{Result, SequenceError};

use super::FrozenSequence;

/// Append-only construction phase of a [`FrozenSequence`].
///
/// The builder is sized up front, but [`new`](Self::new) allocates nothing
/// until the first push; [`try_with_capacity`](Self::try_with_capacity)
/// reserves every slot at once and reports when it cannot. Elements are
/// appended in order until every slot is populated, and only then can it be
/// frozen. Nothing is observable as a `FrozenSequence` until
/// [`freeze`](Self::freeze) succeeds.
///
/// ```
/// use seqkit_core::{FrozenSequence, SequenceError};
///
/// let mut builder = FrozenSequence::builder(2);
/// builder.push("a")?;
/// builder.push("b")?;
/// assert_eq!(builder.push("c"), Err(SequenceError::CapacityExceeded { capacity: 2 }));
///
/// let sequence = builder.freeze()?;
/// assert_eq!(sequence.as_slice(), &["a", "b"]);
/// # Ok::<(), SequenceError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FrozenSequenceBuilder<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> FrozenSequenceBuilder<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Like [`new`](Self::new), with storage for all `capacity` elements
    /// reserved up front.
    ///
    /// Fails with [`SequenceError::AllocationFailed`] instead of aborting
    /// when the reservation overflows or the allocator refuses it.
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        let mut items = Vec::new();
        if let Err(error) = items.try_reserve_exact(capacity) {
            tracing::debug!(capacity, %error, "could not reserve builder storage");
            return Err(SequenceError::AllocationFailed { capacity });
        }
        Ok(Self { items, capacity })
    }

    /// Append `item` at the next free slot.
    ///
    /// Fails with [`SequenceError::CapacityExceeded`] once every slot is
    /// taken; the builder is left unchanged and `item` is dropped.
    pub fn push(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            tracing::debug!(capacity = self.capacity, "rejected push into a full builder");
            return Err(SequenceError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.items.len()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Finish construction.
    ///
    /// Fails with [`SequenceError::Incomplete`] unless every slot is populated.
    pub fn freeze(self) -> Result<FrozenSequence<T>> {
        if !self.is_full() {
            tracing::debug!(
                expected = self.capacity,
                actual = self.items.len(),
                "rejected freeze of an incomplete builder"
            );
            return Err(SequenceError::Incomplete {
                expected: self.capacity,
                actual: self.items.len(),
            });
        }
        Ok(FrozenSequence::from_boxed_slice(self.items.into_boxed_slice()))
    }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod tests;

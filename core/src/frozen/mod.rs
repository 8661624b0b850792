//! `FrozenSequence`: a fixed-length, immutable-after-construction sequence.
//!
//! The elements live in one owned boxed slice sized exactly to the number
//! supplied at construction. There is no mutable access of any kind, so a
//! `FrozenSequence<T>` can be shared between threads whenever `T: Sync`.
//!
//! Queries go through the optimized [`FirstOperator`](crate::FirstOperator)
//! and [`AnyOperator`](crate::AnyOperator) implementations, which scan the
//! slice by index instead of going through a generic enumerator.
//!
//! # Example
//!
//! ```
//! use seqkit_core::{FrozenSequence, SequenceError, query};
//!
//! let sequence = FrozenSequence::from([10, 20, 30]);
//!
//! assert_eq!(query::first(&sequence), Ok(&10));
//! assert_eq!(query::first_where(&sequence, |x| *x > 15), Ok(&20));
//! assert!(!query::any_where(&sequence, |x| *x > 100));
//! assert_eq!(query::first_where_or_none(&sequence, |x| *x > 100), None);
//!
//! let empty = FrozenSequence::<i32>::empty();
//! assert_eq!(query::first(&empty), Err(SequenceError::EmptySequence));
//! ```

mod builder;
mod operators;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::ops::Index;
use core::slice;

use crate::error::{Result, SequenceError};
use crate::sequence::ReadOnlySequence;

pub use builder::FrozenSequenceBuilder;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrozenSequence<T> {
    items: Box<[T]>,
}

static_assertions::assert_eq_size!(FrozenSequence<u64>, [usize; 2]);
static_assertions::assert_impl_all!(FrozenSequence<u64>: Send, Sync);
static_assertions::assert_not_impl_any!(FrozenSequence<core::cell::Cell<u64>>: Sync);

// --- Construction ---

impl<T> FrozenSequence<T> {
    pub fn empty() -> Self {
        Self {
            items: Box::new([]),
        }
    }

    /// Start an append-only builder sized for exactly `capacity` elements.
    pub fn builder(capacity: usize) -> FrozenSequenceBuilder<T> {
        FrozenSequenceBuilder::new(capacity)
    }

    /// Freeze every element of an exact-size source.
    ///
    /// The source's reported length becomes the capacity. If the source then
    /// yields a different number of elements, nothing is built and the call
    /// fails with [`SequenceError::InvalidArgument`]. A reported length that
    /// cannot be reserved fails with [`SequenceError::AllocationFailed`].
    pub fn from_exact<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T, IntoIter: ExactSizeIterator>,
    {
        let items = items.into_iter();
        let mut builder = FrozenSequenceBuilder::try_with_capacity(items.len())?;
        for item in items {
            if builder.push(item).is_err() {
                tracing::debug!(
                    declared = builder.capacity(),
                    "exact-size source yielded more elements than declared"
                );
                return Err(SequenceError::invalid_argument(
                    "source yielded more elements than its reported length",
                ));
            }
        }
        builder.freeze().map_err(|_| {
            SequenceError::invalid_argument(
                "source yielded fewer elements than its reported length",
            )
        })
    }

    pub(crate) fn from_boxed_slice(items: Box<[T]>) -> Self {
        Self { items }
    }
}

// --- Access ---

impl<T> FrozenSequence<T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Always equal to [`len`](Self::len): every slot is populated by the
    /// time a frozen sequence exists.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items.into_vec()
    }
}

impl<T> Default for FrozenSequence<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Index<usize> for FrozenSequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> AsRef<[T]> for FrozenSequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> Borrow<[T]> for FrozenSequence<T> {
    fn borrow(&self) -> &[T] {
        &self.items
    }
}

// --- Conversions ---

impl<T> From<Vec<T>> for FrozenSequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_boxed_slice(items.into_boxed_slice())
    }
}

impl<T> From<Box<[T]>> for FrozenSequence<T> {
    fn from(items: Box<[T]>) -> Self {
        Self::from_boxed_slice(items)
    }
}

impl<T, const N: usize> From<[T; N]> for FrozenSequence<T> {
    fn from(items: [T; N]) -> Self {
        let items: Box<[T]> = Box::new(items);
        Self::from_boxed_slice(items)
    }
}

impl<T: Clone> From<&[T]> for FrozenSequence<T> {
    fn from(items: &[T]) -> Self {
        Self::from_boxed_slice(Box::from(items))
    }
}

impl<T> FromIterator<T> for FrozenSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self::from_boxed_slice(items.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a FrozenSequence<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<T> IntoIterator for FrozenSequence<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_vec().into_iter()
    }
}

// --- Sequence ---

impl<T> ReadOnlySequence for FrozenSequence<T> {
    type Item = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;
    type FirstOperator = Self;
    type AnyOperator = Self;

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline(always)]
    fn as_first_operator(&self) -> Option<&Self> {
        Some(self)
    }

    #[inline(always)]
    fn as_any_operator(&self) -> Option<&Self> {
        Some(self)
    }
}

// --- Serde ---

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for FrozenSequence<T> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(self.as_slice(), serializer)
    }
}

/// Deserializes any sequence and freezes it at the length it arrived with.
#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for FrozenSequence<T> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
#[path = "frozen_test.rs"]
mod tests;

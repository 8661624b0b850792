//! Capability traits for optimized sequence queries.
//!
//! A concrete sequence type may implement any of these to provide its own
//! execution path for a query family. The generic front-end in
//! [`query`](crate::query) finds the implementation through
//! [`ReadOnlySequence`](crate::ReadOnlySequence)'s capability probes and
//! falls back to plain enumeration when a type opts out.
//!
//! All predicate-taking methods share one contract: the predicate is called
//! on elements in index order starting at 0, once per examined element, and
//! the scan stops at the first `true`.
//!
//! The `*_with` forms take an external argument by value and lend it to the
//! predicate, so the predicate can stay a non-capturing closure or a plain
//! `fn` item:
//!
//! ```
//! use seqkit_core::{FirstOperator, FrozenSequence};
//!
//! fn above(value: &i32, threshold: &i32) -> bool {
//!     value > threshold
//! }
//!
//! let sequence = FrozenSequence::from([10, 20, 30]);
//! assert_eq!(sequence.first_where_with(15, above), Ok(&20));
//! ```

use core::convert::Infallible;
use core::fmt;
use core::marker::PhantomData;

use crate::error::Result;

/// The "first element" query family.
pub trait FirstOperator {
    type Item;

    /// The element at index 0, or [`EmptySequence`](crate::SequenceError::EmptySequence).
    fn first(&self) -> Result<&Self::Item>;

    /// The first element matching `predicate`, or
    /// [`NoMatch`](crate::SequenceError::NoMatch).
    fn first_where<F>(&self, predicate: F) -> Result<&Self::Item>
    where
        F: FnMut(&Self::Item) -> bool;

    /// Like [`first_where`](Self::first_where), the predicate also receives the index.
    fn first_where_indexed<F>(&self, predicate: F) -> Result<&Self::Item>
    where
        F: FnMut(&Self::Item, usize) -> bool;

    /// Like [`first_where`](Self::first_where), the predicate also receives `argument`.
    fn first_where_with<A, F>(&self, argument: A, predicate: F) -> Result<&Self::Item>
    where
        F: FnMut(&Self::Item, &A) -> bool;

    /// Predicate receives both the index and `argument`.
    fn first_where_indexed_with<A, F>(&self, argument: A, predicate: F) -> Result<&Self::Item>
    where
        F: FnMut(&Self::Item, usize, &A) -> bool;

    /// The element at index 0, or `None` when empty.
    fn first_or_none(&self) -> Option<&Self::Item>;

    fn first_where_or_none<F>(&self, predicate: F) -> Option<&Self::Item>
    where
        F: FnMut(&Self::Item) -> bool;

    fn first_where_indexed_or_none<F>(&self, predicate: F) -> Option<&Self::Item>
    where
        F: FnMut(&Self::Item, usize) -> bool;

    fn first_where_with_or_none<A, F>(&self, argument: A, predicate: F) -> Option<&Self::Item>
    where
        F: FnMut(&Self::Item, &A) -> bool;

    fn first_where_indexed_with_or_none<A, F>(
        &self,
        argument: A,
        predicate: F,
    ) -> Option<&Self::Item>
    where
        F: FnMut(&Self::Item, usize, &A) -> bool;
}

/// The "any element" query family.
pub trait AnyOperator {
    type Item;

    /// Whether the sequence has at least one element.
    fn any(&self) -> bool;

    fn any_where<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&Self::Item) -> bool;

    fn any_where_indexed<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&Self::Item, usize) -> bool;

    fn any_where_with<A, F>(&self, argument: A, predicate: F) -> bool
    where
        F: FnMut(&Self::Item, &A) -> bool;

    fn any_where_indexed_with<A, F>(&self, argument: A, predicate: F) -> bool
    where
        F: FnMut(&Self::Item, usize, &A) -> bool;
}

// =============================================================================
// Unsupported - capability placeholder for sequences that opt out
// =============================================================================

/// Names "no optimized implementation" for a capability.
///
/// Uninhabited: a sequence whose capability type is `Unsupported<T>` can
/// only answer `None` from its probe, so every query on it takes the
/// fallback path.
pub enum Unsupported<T> {
    #[doc(hidden)]
    Never(Infallible, PhantomData<T>),
}

impl<T> Unsupported<T> {
    #[inline(always)]
    fn absurd(&self) -> ! {
        match self {
            Unsupported::Never(never, _) => match *never {},
        }
    }
}

impl<T> fmt::Debug for Unsupported<T> {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.absurd()
    }
}

impl<T> FirstOperator for Unsupported<T> {
    type Item = T;

    fn first(&self) -> Result<&T> {
        self.absurd()
    }

    fn first_where<F>(&self, _predicate: F) -> Result<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.absurd()
    }

    fn first_where_indexed<F>(&self, _predicate: F) -> Result<&T>
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.absurd()
    }

    fn first_where_with<A, F>(&self, _argument: A, _predicate: F) -> Result<&T>
    where
        F: FnMut(&T, &A) -> bool,
    {
        self.absurd()
    }

    fn first_where_indexed_with<A, F>(&self, _argument: A, _predicate: F) -> Result<&T>
    where
        F: FnMut(&T, usize, &A) -> bool,
    {
        self.absurd()
    }

    fn first_or_none(&self) -> Option<&T> {
        self.absurd()
    }

    fn first_where_or_none<F>(&self, _predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.absurd()
    }

    fn first_where_indexed_or_none<F>(&self, _predicate: F) -> Option<&T>
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.absurd()
    }

    fn first_where_with_or_none<A, F>(&self, _argument: A, _predicate: F) -> Option<&T>
    where
        F: FnMut(&T, &A) -> bool,
    {
        self.absurd()
    }

    fn first_where_indexed_with_or_none<A, F>(&self, _argument: A, _predicate: F) -> Option<&T>
    where
        F: FnMut(&T, usize, &A) -> bool,
    {
        self.absurd()
    }
}

impl<T> AnyOperator for Unsupported<T> {
    type Item = T;

    fn any(&self) -> bool {
        self.absurd()
    }

    fn any_where<F>(&self, _predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.absurd()
    }

    fn any_where_indexed<F>(&self, _predicate: F) -> bool
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.absurd()
    }

    fn any_where_with<A, F>(&self, _argument: A, _predicate: F) -> bool
    where
        F: FnMut(&T, &A) -> bool,
    {
        self.absurd()
    }

    fn any_where_indexed_with<A, F>(&self, _argument: A, _predicate: F) -> bool
    where
        F: FnMut(&T, usize, &A) -> bool,
    {
        self.absurd()
    }
}

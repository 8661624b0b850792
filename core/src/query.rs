//! Query front-end over any [`ReadOnlySequence`].
//!
//! Each function probes the sequence once for the matching capability. If the
//! concrete type provides one, the call is forwarded to it with its
//! arguments unchanged; otherwise the equivalent [`fallback`] algorithm runs
//! over [`ReadOnlySequence::iter`]. Both paths examine elements in the same
//! order and fail the same way, so the choice is never observable except in
//! speed.
//!
//! For [`FrozenSequence`](crate::FrozenSequence) the probe is a constant
//! `Some(self)`, so after monomorphization the dispatch costs nothing.
//!
//! ```
//! use std::collections::VecDeque;
//! use seqkit_core::{FrozenSequence, query};
//!
//! let frozen = FrozenSequence::from([3, 5, 8]);
//! let deque = VecDeque::from([3, 5, 8]);
//!
//! // Optimized path and enumeration path agree.
//! assert_eq!(query::first_where(&frozen, |n| *n % 2 == 0), Ok(&8));
//! assert_eq!(query::first_where(&deque, |n| *n % 2 == 0), Ok(&8));
//! ```

use crate::error::Result;
use crate::fallback;
use crate::operators::{AnyOperator, FirstOperator};
use crate::sequence::ReadOnlySequence;

/// Enumeration for the fallback path.
#[inline(always)]
fn enumerate<'a, S>(operation: &'static str, sequence: &'a S) -> S::Iter<'a>
where
    S: ReadOnlySequence + ?Sized,
{
    tracing::trace!(operation, len = sequence.len(), "no optimized operator, enumerating");
    sequence.iter()
}

// =============================================================================
// First
// =============================================================================

/// The first element, or [`EmptySequence`](crate::SequenceError::EmptySequence).
pub fn first<S>(sequence: &S) -> Result<&S::Item>
where
    S: ReadOnlySequence + ?Sized,
{
    match sequence.as_first_operator() {
        Some(operator) => operator.first(),
        None => fallback::first(enumerate("first", sequence)),
    }
}

/// The first element matching `predicate`, or
/// [`NoMatch`](crate::SequenceError::NoMatch).
pub fn first_where<S, F>(sequence: &S, predicate: F) -> Result<&S::Item>
where
    S: ReadOnlySequence + ?Sized,
    F: FnMut(&S::Item) -> bool,
{
    match sequence.as_first_operator() {
        Some(operator) => operator.first_where(predicate),
        None => fallback::first_where(enumerate("first_where", sequence), predicate),
    }
}

pub fn first_where_indexed<S, F>(sequence: &S, predicate: F) -> Result<&S::Item>
where
    S: ReadOnlySequence + ?Sized,
    F: FnMut(&S::Item, usize) -> bool,
{
    match sequence.as_first_operator() {
        Some(operator) => operator.first_where_indexed(predicate),
        None => {
            fallback::first_where_indexed(enumerate("first_where_indexed", sequence), predicate)
        }
    }
}

pub fn first_where_with<S, A, F>(sequence: &S, argument: A, predicate: F) -> Result<&S::Item>
where
    S: ReadOnlySequence + ?Sized,
    F: FnMut(&S::Item, &A) -> bool,
{
    match sequence.as_first_operator() {
        Some(operator) => operator.first_where_with(argument, predicate),
        None => fallback::first_where_with(
            enumerate("first_where_with", sequence),
            argument,
            predicate,
        ),
    }
}

pub fn first_where_indexed_with<S, A, F>(
    sequence: &S,
    argument: A,
    predicate: F,
) -> Result<&S::Item>
where
    S: ReadOnlySequence + ?Sized,
    F: FnMut(&S::Item, usize, &A) -> bool,
{
    match sequence.as_first_operator() {
        Some(operator) => operator.first_where_indexed_with(argument, predicate),
        None => fallback::first_where_indexed_with(
            enumerate("first_where_indexed_with", sequence),
            argument,
            predicate,
        ),
    }
}

/// The first element, or `None` when the sequence is empty.
pub fn first_or_none<S>(sequence: &S) -> Option<&S::Item>
where
    S: ReadOnlySequence + ?Sized,
{
    match sequence.as_first_operator() {
        Some(operator) => operator.first_or_none(),
        None => fallback::first_or_none(enumerate("first_or_none", sequence)),
    }
}

pub fn first_where_or_none<S, F>(sequence: &S, predicate: F) -> Option<&S::Item>
where
    S: ReadOnlySequence + ?Sized,
    F: FnMut(&S::Item) -> bool,
{
    match sequence.as_first_operator() {
        Some(operator) => operator.first_where_or_none(predicate),
        None => {
            fallback::first_where_or_none(enumerate("first_where_or_none", sequence), predicate)
        }
    }
}

pub fn first_where_indexed_or_none<S, F>(sequence: &S, predicate: F) -> Option<&S::Item>
where
    S: ReadOnlySequence + ?Sized,
    F: FnMut(&S::Item, usize) -> bool,
{
    match sequence.as_first_operator() {
        Some(operator) => operator.first_where_indexed_or_none(predicate),
        None => fallback::first_where_indexed_or_none(
            enumerate("first_where_indexed_or_none", sequence),
            predicate,
        ),
    }
}

pub fn first_where_with_or_none<S, A, F>(
    sequence: &S,
    argument: A,
    predicate: F,
) -> Option<&S::Item>
where
    S: ReadOnlySequence + ?Sized,
    F: FnMut(&S::Item, &A) -> bool,
{
    match sequence.as_first_operator() {
        Some(operator) => operator.first_where_with_or_none(argument, predicate),
        None => fallback::first_where_with_or_none(
            enumerate("first_where_with_or_none", sequence),
            argument,
            predicate,
        ),
    }
}

pub fn first_where_indexed_with_or_none<S, A, F>(
    sequence: &S,
    argument: A,
    predicate: F,
) -> Option<&S::Item>
where
    S: ReadOnlySequence + ?Sized,
    F: FnMut(&S::Item, usize, &A) -> bool,
{
    match sequence.as_first_operator() {
        Some(operator) => operator.first_where_indexed_with_or_none(argument, predicate),
        None => fallback::first_where_indexed_with_or_none(
            enumerate("first_where_indexed_with_or_none", sequence),
            argument,
            predicate,
        ),
    }
}

// =============================================================================
// Any
// =============================================================================

/// Whether the sequence has at least one element.
pub fn any<S>(sequence: &S) -> bool
where
    S: ReadOnlySequence + ?Sized,
{
    match sequence.as_any_operator() {
        Some(operator) => operator.any(),
        None => fallback::any(enumerate("any", sequence)),
    }
}

pub fn any_where<S, F>(sequence: &S, predicate: F) -> bool
where
    S: ReadOnlySequence + ?Sized,
    F: FnMut(&S::Item) -> bool,
{
    match sequence.as_any_operator() {
        Some(operator) => operator.any_where(predicate),
        None => fallback::any_where(enumerate("any_where", sequence), predicate),
    }
}

pub fn any_where_indexed<S, F>(sequence: &S, predicate: F) -> bool
where
    S: ReadOnlySequence + ?Sized,
    F: FnMut(&S::Item, usize) -> bool,
{
    match sequence.as_any_operator() {
        Some(operator) => operator.any_where_indexed(predicate),
        None => fallback::any_where_indexed(enumerate("any_where_indexed", sequence), predicate),
    }
}

pub fn any_where_with<S, A, F>(sequence: &S, argument: A, predicate: F) -> bool
where
    S: ReadOnlySequence + ?Sized,
    F: FnMut(&S::Item, &A) -> bool,
{
    match sequence.as_any_operator() {
        Some(operator) => operator.any_where_with(argument, predicate),
        None => {
            fallback::any_where_with(enumerate("any_where_with", sequence), argument, predicate)
        }
    }
}

pub fn any_where_indexed_with<S, A, F>(sequence: &S, argument: A, predicate: F) -> bool
where
    S: ReadOnlySequence + ?Sized,
    F: FnMut(&S::Item, usize, &A) -> bool,
{
    match sequence.as_any_operator() {
        Some(operator) => operator.any_where_indexed_with(argument, predicate),
        None => fallback::any_where_indexed_with(
            enumerate("any_where_indexed_with", sequence),
            argument,
            predicate,
        ),
    }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;

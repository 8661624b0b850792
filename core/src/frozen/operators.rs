//! Direct indexed implementations of the query capabilities.
//!
//! Every predicate form funnels into one private `scan`: a single forward
//! pass over the owned slice in index order.

use crate::error::{Result, SequenceError};
use crate::operators::{AnyOperator, FirstOperator};

use super::FrozenSequence;

impl<T> FrozenSequence<T> {
    /// First element, in index order, for which `matches` holds.
    #[inline(always)]
    fn scan<F>(&self, mut matches: F) -> Option<&T>
    where
        F: FnMut(&T, usize) -> bool,
    {
        let items = self.as_slice();
        for (index, item) in items.iter().enumerate() {
            if matches(item, index) {
                return Some(item);
            }
        }
        None
    }
}

impl<T> FirstOperator for FrozenSequence<T> {
    type Item = T;

    #[inline]
    fn first(&self) -> Result<&T> {
        self.as_slice().first().ok_or(SequenceError::EmptySequence)
    }

    fn first_where<F>(&self, predicate: F) -> Result<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.first_where_or_none(predicate).ok_or(SequenceError::NoMatch)
    }

    fn first_where_indexed<F>(&self, predicate: F) -> Result<&T>
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.first_where_indexed_or_none(predicate).ok_or(SequenceError::NoMatch)
    }

    fn first_where_with<A, F>(&self, argument: A, predicate: F) -> Result<&T>
    where
        F: FnMut(&T, &A) -> bool,
    {
        self.first_where_with_or_none(argument, predicate).ok_or(SequenceError::NoMatch)
    }

    fn first_where_indexed_with<A, F>(&self, argument: A, predicate: F) -> Result<&T>
    where
        F: FnMut(&T, usize, &A) -> bool,
    {
        self.first_where_indexed_with_or_none(argument, predicate).ok_or(SequenceError::NoMatch)
    }

    #[inline]
    fn first_or_none(&self) -> Option<&T> {
        self.as_slice().first()
    }

    fn first_where_or_none<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.scan(|item, _| predicate(item))
    }

    fn first_where_indexed_or_none<F>(&self, predicate: F) -> Option<&T>
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.scan(predicate)
    }

    fn first_where_with_or_none<A, F>(&self, argument: A, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T, &A) -> bool,
    {
        self.scan(|item, _| predicate(item, &argument))
    }

    fn first_where_indexed_with_or_none<A, F>(&self, argument: A, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T, usize, &A) -> bool,
    {
        self.scan(|item, index| predicate(item, index, &argument))
    }
}

impl<T> AnyOperator for FrozenSequence<T> {
    type Item = T;

    /// O(1): no element is examined.
    #[inline]
    fn any(&self) -> bool {
        !self.is_empty()
    }

    fn any_where<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.scan(|item, _| predicate(item)).is_some()
    }

    fn any_where_indexed<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.scan(predicate).is_some()
    }

    fn any_where_with<A, F>(&self, argument: A, mut predicate: F) -> bool
    where
        F: FnMut(&T, &A) -> bool,
    {
        self.scan(|item, _| predicate(item, &argument)).is_some()
    }

    fn any_where_indexed_with<A, F>(&self, argument: A, mut predicate: F) -> bool
    where
        F: FnMut(&T, usize, &A) -> bool,
    {
        self.scan(|item, index| predicate(item, index, &argument)).is_some()
    }
}

#[cfg(test)]
#[path = "operators_test.rs"]
mod tests;

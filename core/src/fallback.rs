//! Enumeration-based query algorithms.
//!
//! These work on any iterator of borrowed elements and are what the
//! [`query`](crate::query) front-end runs when a sequence has no optimized
//! operator. They are public so that the two paths can be compared directly.

use crate::error::{Result, SequenceError};

pub fn first<'a, T, I>(items: I) -> Result<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
{
    first_or_none(items).ok_or(SequenceError::EmptySequence)
}

pub fn first_where<'a, T, I, F>(items: I, predicate: F) -> Result<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T) -> bool,
{
    first_where_or_none(items, predicate).ok_or(SequenceError::NoMatch)
}

pub fn first_where_indexed<'a, T, I, F>(items: I, predicate: F) -> Result<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T, usize) -> bool,
{
    first_where_indexed_or_none(items, predicate).ok_or(SequenceError::NoMatch)
}

pub fn first_where_with<'a, T, I, A, F>(items: I, argument: A, predicate: F) -> Result<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T, &A) -> bool,
{
    first_where_with_or_none(items, argument, predicate).ok_or(SequenceError::NoMatch)
}

pub fn first_where_indexed_with<'a, T, I, A, F>(
    items: I,
    argument: A,
    predicate: F,
) -> Result<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T, usize, &A) -> bool,
{
    first_where_indexed_with_or_none(items, argument, predicate).ok_or(SequenceError::NoMatch)
}

pub fn first_or_none<'a, T, I>(items: I) -> Option<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().next()
}

pub fn first_where_or_none<'a, T, I, F>(items: I, mut predicate: F) -> Option<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T) -> bool,
{
    items.into_iter().find(|&item| predicate(item))
}

pub fn first_where_indexed_or_none<'a, T, I, F>(items: I, mut predicate: F) -> Option<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T, usize) -> bool,
{
    items
        .into_iter()
        .enumerate()
        .find(|&(index, item)| predicate(item, index))
        .map(|(_, item)| item)
}

pub fn first_where_with_or_none<'a, T, I, A, F>(
    items: I,
    argument: A,
    mut predicate: F,
) -> Option<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T, &A) -> bool,
{
    items.into_iter().find(|&item| predicate(item, &argument))
}

pub fn first_where_indexed_with_or_none<'a, T, I, A, F>(
    items: I,
    argument: A,
    mut predicate: F,
) -> Option<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T, usize, &A) -> bool,
{
    items
        .into_iter()
        .enumerate()
        .find(|&(index, item)| predicate(item, index, &argument))
        .map(|(_, item)| item)
}

/// Whether `items` yields anything. Pulls at most one element.
pub fn any<'a, T, I>(items: I) -> bool
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().next().is_some()
}

pub fn any_where<'a, T, I, F>(items: I, mut predicate: F) -> bool
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T) -> bool,
{
    items.into_iter().any(|item| predicate(item))
}

pub fn any_where_indexed<'a, T, I, F>(items: I, mut predicate: F) -> bool
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T, usize) -> bool,
{
    items
        .into_iter()
        .enumerate()
        .any(|(index, item)| predicate(item, index))
}

pub fn any_where_with<'a, T, I, A, F>(items: I, argument: A, mut predicate: F) -> bool
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T, &A) -> bool,
{
    items.into_iter().any(|item| predicate(item, &argument))
}

pub fn any_where_indexed_with<'a, T, I, A, F>(items: I, argument: A, mut predicate: F) -> bool
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T, usize, &A) -> bool,
{
    items
        .into_iter()
        .enumerate()
        .any(|(index, item)| predicate(item, index, &argument))
}

#[cfg(test)]
#[path = "fallback_test.rs"]
mod tests;

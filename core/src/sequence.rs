//! The abstract read-only sequence and its plain-collection implementations.

use alloc::boxed::Box;
use alloc::collections::{LinkedList, VecDeque, linked_list, vec_deque};
use alloc::rc::Rc;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::slice;

use crate::operators::{AnyOperator, FirstOperator, Unsupported};

/// A read view over an ordered collection of elements.
///
/// The minimal contract is forward enumeration: [`iter`](Self::iter) yields
/// every element exactly once, in a fixed order, for an unchanged sequence.
///
/// On top of that a sequence names its capability implementations. A type
/// with an optimized query path sets `FirstOperator`/`AnyOperator` to a type
/// implementing the capability (usually `Self`) and returns it from the
/// matching probe. A type without one sets them to [`Unsupported`] and keeps
/// the default probes, which always answer `None`:
///
/// ```
/// use core::slice;
/// use seqkit_core::{ReadOnlySequence, Unsupported, query};
///
/// struct Evens(Vec<u32>);
///
/// impl ReadOnlySequence for Evens {
///     type Item = u32;
///     type Iter<'a> = slice::Iter<'a, u32>;
///     type FirstOperator = Unsupported<u32>;
///     type AnyOperator = Unsupported<u32>;
///
///     fn iter(&self) -> Self::Iter<'_> {
///         self.0.iter()
///     }
///
///     fn len(&self) -> usize {
///         self.0.len()
///     }
/// }
///
/// let evens = Evens(vec![2, 4, 6]);
/// assert_eq!(query::first_where(&evens, |n| *n > 3), Ok(&4));
/// ```
///
/// Because the capability types are associated types, the probe is resolved
/// per concrete type at compile time.
pub trait ReadOnlySequence {
    type Item;

    /// Enumeration over borrowed elements.
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Optimized implementation of the `first` family, or [`Unsupported`].
    type FirstOperator: FirstOperator<Item = Self::Item> + ?Sized;

    /// Optimized implementation of the `any` family, or [`Unsupported`].
    type AnyOperator: AnyOperator<Item = Self::Item> + ?Sized;

    fn iter(&self) -> Self::Iter<'_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn as_first_operator(&self) -> Option<&Self::FirstOperator> {
        None
    }

    fn as_any_operator(&self) -> Option<&Self::AnyOperator> {
        None
    }
}

// =============================================================================
// Plain collections: enumeration only
// =============================================================================

impl<T> ReadOnlySequence for [T] {
    type Item = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;
    type FirstOperator = Unsupported<T>;
    type AnyOperator = Unsupported<T>;

    fn iter(&self) -> Self::Iter<'_> {
        <[T]>::iter(self)
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T, const N: usize> ReadOnlySequence for [T; N] {
    type Item = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;
    type FirstOperator = Unsupported<T>;
    type AnyOperator = Unsupported<T>;

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    fn len(&self) -> usize {
        N
    }
}

impl<T> ReadOnlySequence for Vec<T> {
    type Item = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;
    type FirstOperator = Unsupported<T>;
    type AnyOperator = Unsupported<T>;

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> ReadOnlySequence for VecDeque<T> {
    type Item = T;
    type Iter<'a>
        = vec_deque::Iter<'a, T>
    where
        Self: 'a;
    type FirstOperator = Unsupported<T>;
    type AnyOperator = Unsupported<T>;

    fn iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<T> ReadOnlySequence for LinkedList<T> {
    type Item = T;
    type Iter<'a>
        = linked_list::Iter<'a, T>
    where
        Self: 'a;
    type FirstOperator = Unsupported<T>;
    type AnyOperator = Unsupported<T>;

    fn iter(&self) -> Self::Iter<'_> {
        LinkedList::iter(self)
    }

    fn len(&self) -> usize {
        LinkedList::len(self)
    }
}

#[cfg(feature = "smallvec")]
impl<A: smallvec::Array> ReadOnlySequence for smallvec::SmallVec<A> {
    type Item = A::Item;
    type Iter<'a>
        = slice::Iter<'a, A::Item>
    where
        Self: 'a;
    type FirstOperator = Unsupported<A::Item>;
    type AnyOperator = Unsupported<A::Item>;

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    fn len(&self) -> usize {
        smallvec::SmallVec::len(self)
    }
}

// =============================================================================
// Pointers: forward everything, capabilities included
// =============================================================================

macro_rules! forward_read_only_sequence {
    ($($pointer:ty),+ $(,)?) => {
        $(
            impl<S: ReadOnlySequence + ?Sized> ReadOnlySequence for $pointer {
                type Item = S::Item;
                type Iter<'a>
                    = S::Iter<'a>
                where
                    Self: 'a;
                type FirstOperator = S::FirstOperator;
                type AnyOperator = S::AnyOperator;

                fn iter(&self) -> Self::Iter<'_> {
                    S::iter(self)
                }

                fn len(&self) -> usize {
                    S::len(self)
                }

                fn as_first_operator(&self) -> Option<&Self::FirstOperator> {
                    S::as_first_operator(self)
                }

                fn as_any_operator(&self) -> Option<&Self::AnyOperator> {
                    S::as_any_operator(self)
                }
            }
        )+
    };
}

forward_read_only_sequence!(&S, Box<S>, Rc<S>, Arc<S>);

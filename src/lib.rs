//! Seqkit - read-only sequences with capability-dispatched queries
//!
//! # Overview
//!
//! Seqkit answers common questions about ordered collections ("is there any
//! element?", "which element comes first?", "which is the first one matching
//! this predicate?") through one generic front-end that picks the fastest
//! implementation the concrete collection offers:
//!
//! - [`FrozenSequence`] carries optimized operators that scan its owned
//!   storage by direct index
//! - every other [`ReadOnlySequence`] (`Vec`, `VecDeque`, slices, arrays,
//!   `LinkedList`, ...) is enumerated element by element
//!
//! Both paths examine elements in the same order and fail the same way.
//!
//! # Quick Start
//!
//! ```
//! use seqkit::{FrozenSequence, SequenceError, frozen, query};
//!
//! let sequence = frozen![10, 20, 30];
//!
//! assert_eq!(query::first(&sequence), Ok(&10));
//! assert_eq!(query::first_where(&sequence, |x| *x > 15), Ok(&20));
//! assert!(!query::any_where(&sequence, |x| *x > 100));
//! assert_eq!(query::first_where_or_none(&sequence, |x| *x > 100), None);
//!
//! let empty = FrozenSequence::<i32>::empty();
//! assert_eq!(query::first(&empty), Err(SequenceError::EmptySequence));
//! ```
//!
//! # External Arguments
//!
//! Every predicate form has a `*_with` variant that lends a context value to
//! the predicate, so the predicate does not need to capture anything:
//!
//! ```
//! use seqkit::{FrozenSequence, query};
//!
//! fn longer_than(word: &&str, limit: &usize) -> bool {
//!     word.len() > *limit
//! }
//!
//! let words = FrozenSequence::from(["fir", "spruce", "larch"]);
//! assert_eq!(query::first_where_with(&words, 4, longer_than), Ok(&"spruce"));
//! ```
//!
//! # Construction
//!
//! A frozen sequence is built once and never changes afterwards:
//!
//! ```
//! use seqkit::{FrozenSequence, SequenceError};
//!
//! let mut builder = FrozenSequence::builder(3);
//! builder.push(1)?;
//! builder.push(2)?;
//! assert_eq!(builder.clone().freeze(), Err(SequenceError::Incomplete { expected: 3, actual: 2 }));
//!
//! builder.push(3)?;
//! let sequence = builder.freeze()?;
//! assert_eq!(sequence.as_slice(), &[1, 2, 3]);
//! # Ok::<(), SequenceError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Re-export public API from seqkit_core
pub use seqkit_core::{
    AnyOperator, FirstOperator, FrozenSequence, FrozenSequenceBuilder, ReadOnlySequence, Result,
    SequenceError, Unsupported, fallback, frozen, operators, query,
};

//! Construction macro for frozen sequences.
//!
//! # Example
//!
//! ```
//! use seqkit_core::frozen;
//!
//! let empty = frozen![];
//! # let _: &seqkit_core::FrozenSequence<u8> = &empty;
//! let listed = frozen![1, 2, 3];
//! let repeated = frozen!["x"; 4];
//!
//! assert!(empty.is_empty());
//! assert_eq!(listed.as_slice(), &[1, 2, 3]);
//! assert_eq!(repeated.len(), 4);
//! ```

/// Build a [`FrozenSequence`](crate::FrozenSequence) from its elements.
///
/// | Pattern | Meaning |
/// |---------|---------|
/// | `frozen![]` | Empty sequence |
/// | `frozen![a, b, c]` | Elements in order |
/// | `frozen![x; n]` | `n` clones of `x` |
#[macro_export]
macro_rules! frozen {
    () => {
        $crate::FrozenSequence::empty()
    };

    ($item:expr; $count:expr) => {
        $crate::FrozenSequence::from($crate::shim::vec![$item; $count])
    };

    ($($item:expr),+ $(,)?) => {
        $crate::FrozenSequence::from([$($item),+])
    };
}

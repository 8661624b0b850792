//! `SmallVec` as a read-only sequence with the `smallvec` feature.

#![cfg(feature = "smallvec")]

use seqkit_core::{ReadOnlySequence, SequenceError, query};
use smallvec::{SmallVec, smallvec};

#[test]
fn inline_and_spilled_storage_enumerate_the_same() {
    let inline: SmallVec<[u16; 4]> = smallvec![2, 4, 6];
    let spilled: SmallVec<[u16; 2]> = smallvec![2, 4, 6];

    assert!(!inline.spilled());
    assert!(spilled.spilled());
    assert!(ReadOnlySequence::as_first_operator(&inline).is_none());

    assert_eq!(query::first_where(&inline, |n| *n > 3), Ok(&4));
    assert_eq!(query::first_where(&spilled, |n| *n > 3), Ok(&4));
    assert_eq!(query::first_where(&spilled, |n| *n > 6), Err(SequenceError::NoMatch));
    assert!(query::any(&inline));
}

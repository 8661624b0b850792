//! Wire format of `FrozenSequence` with the `serde` feature.

#![cfg(feature = "serde")]

use pretty_assertions::assert_eq;
use seqkit_core::{FrozenSequence, query};

#[test]
fn encodes_like_a_plain_sequence() {
    let frozen = FrozenSequence::from([1u32, 300, 70_000]);
    let plain = vec![1u32, 300, 70_000];

    let frozen_bytes = postcard::to_allocvec(&frozen).unwrap();
    let plain_bytes = postcard::to_allocvec(&plain).unwrap();

    assert_eq!(frozen_bytes, plain_bytes);
}

#[test]
fn decoded_sequence_is_frozen_at_its_wire_length() {
    let bytes = postcard::to_allocvec(&vec!["north", "east", "south"]).unwrap();
    let decoded: FrozenSequence<String> = postcard::from_bytes(&bytes).unwrap();

    assert_eq!(decoded.len(), 3);
    assert_eq!(decoded.capacity(), 3);
    assert_eq!(
        query::first_where(&decoded, |direction| direction.starts_with('s')).map(String::as_str),
        Ok("south")
    );
}

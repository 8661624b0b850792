//! Display output of every error a caller can observe.

use expect_test::expect;
use seqkit_core::{FrozenSequence, SequenceError, query};

fn render(errors: &[SequenceError]) -> String {
    errors
        .iter()
        .map(|error| format!("{error}\n"))
        .collect()
}

#[test]
fn query_failures() {
    let empty = FrozenSequence::<u8>::empty();
    let digits = FrozenSequence::from([1u8, 2, 3]);

    let errors = [
        query::first(&empty).unwrap_err(),
        query::first_where(&digits, |d| *d > 9).unwrap_err(),
        query::first_where(&Vec::<u8>::new(), |_| true).unwrap_err(),
    ];

    expect![[r#"
        sequence contains no elements
        sequence contains no matching element
        sequence contains no matching element
    "#]]
    .assert_eq(&render(&errors));
}

#[test]
fn construction_failures() {
    let mut builder = FrozenSequence::builder(1);
    builder.push('a').unwrap();
    let overflow = builder.push('b').unwrap_err();

    let mut short = FrozenSequence::<char>::builder(3);
    short.push('a').unwrap();
    let incomplete = short.freeze().unwrap_err();

    let misreported = SequenceError::InvalidArgument {
        reason: "source yielded fewer elements than its reported length",
    };

    expect![[r#"
        capacity of 1 elements exceeded
        expected 3 elements, got 1
        invalid argument: source yielded fewer elements than its reported length
    "#]]
    .assert_eq(&render(&[overflow, incomplete, misreported]));
}

#[test]
fn allocation_failure() {
    let error = FrozenSequence::<u64>::from_exact(core::iter::repeat_n(0, usize::MAX)).unwrap_err();

    expect!["cannot reserve storage for 18446744073709551615 elements"]
        .assert_eq(&error.to_string());
    assert!(!error.is_absence());
}

#[test]
fn absence_classification() {
    assert!(SequenceError::EmptySequence.is_absence());
    assert!(SequenceError::NoMatch.is_absence());
    assert!(!SequenceError::CapacityExceeded { capacity: 0 }.is_absence());
    assert!(
        !SequenceError::InvalidArgument {
            reason: "missing predicate"
        }
        .is_absence()
    );
}

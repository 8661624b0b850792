use std::cell::Cell;

use super::*;

fn sample() -> FrozenSequence<i32> {
    FrozenSequence::from([10, 20, 30])
}

fn greater_than(value: &i32, threshold: &i32) -> bool {
    value > threshold
}

// =============================================================================
// First
// =============================================================================

#[test]
fn first_family_on_sample() {
    let sequence = sample();

    assert_eq!(sequence.first(), Ok(&10));
    assert_eq!(sequence.first_where(|x| *x > 15), Ok(&20));
    assert_eq!(sequence.first_where(|x| *x > 100), Err(SequenceError::NoMatch));
    assert_eq!(sequence.first_where_indexed(|_, index| index == 2), Ok(&30));
    assert_eq!(sequence.first_where_with(25, greater_than), Ok(&30));
    assert_eq!(
        sequence.first_where_indexed_with(1, |x, index, skip| index >= *skip && *x % 20 == 0),
        Ok(&20)
    );
}

#[test]
fn first_or_none_family_on_sample() {
    let sequence = sample();

    assert_eq!(sequence.first_or_none(), Some(&10));
    assert_eq!(sequence.first_where_or_none(|x| *x > 100), None);
    assert_eq!(sequence.first_where_indexed_or_none(|_, index| index > 2), None);
    assert_eq!(sequence.first_where_with_or_none(15, greater_than), Some(&20));
    assert_eq!(
        sequence.first_where_indexed_with_or_none(0, |x, index, offset| {
            *x == (index as i32 + *offset) * 10
        }),
        None
    );
}

#[test]
fn empty_sequence_failures() {
    let empty = FrozenSequence::<i32>::empty();

    assert_eq!(empty.first(), Err(SequenceError::EmptySequence));
    assert_eq!(empty.first_where(|_| true), Err(SequenceError::NoMatch));
    assert_eq!(empty.first_where_with((), |_, _| true), Err(SequenceError::NoMatch));
    assert_eq!(empty.first_or_none(), None);
    assert_eq!(empty.first_where_or_none(|_| true), None);
}

#[test]
fn first_match_is_smallest_index() {
    let sequence = FrozenSequence::from([5, 8, 8, 3, 8]);
    let found = sequence.first_where(|x| *x == 8).unwrap();

    assert!(core::ptr::eq(found, &sequence[1]));
}

#[test]
fn predicate_called_once_per_examined_element_in_order() {
    let sequence = FrozenSequence::from(['q', 'w', 'e', 'r', 't']);
    let mut visited = Vec::new();

    let found = sequence.first_where_indexed(|item, index| {
        visited.push((index, *item));
        *item == 'e'
    });

    assert_eq!(found, Ok(&'e'));
    assert_eq!(visited, [(0, 'q'), (1, 'w'), (2, 'e')]);
}

// =============================================================================
// Any
// =============================================================================

#[test]
fn any_is_len_check_without_scanning() {
    assert!(sample().any());
    assert!(!FrozenSequence::<i32>::empty().any());
}

#[test]
fn any_family_on_sample() {
    let sequence = sample();

    assert!(sequence.any_where(|x| *x == 20));
    assert!(!sequence.any_where(|x| *x > 100));
    assert!(sequence.any_where_indexed(|x, index| *x == 30 && index == 2));
    assert!(!sequence.any_where_with(30, greater_than));
    assert!(sequence.any_where_indexed_with(10, |x, index, step| *x == (index as i32 + 1) * *step));
}

#[test]
fn any_where_on_empty_never_calls_predicate() {
    let empty = FrozenSequence::<i32>::empty();
    let calls = Cell::new(0);

    assert!(!empty.any_where(|_| {
        calls.set(calls.get() + 1);
        true
    }));
    assert_eq!(calls.get(), 0);
}

#[test]
fn any_where_stops_at_first_match() {
    let sequence = FrozenSequence::from([1, 2, 3, 4, 5]);
    let calls = Cell::new(0);

    let found = sequence.any_where(|x| {
        calls.set(calls.get() + 1);
        *x >= 2
    });

    assert!(found);
    assert_eq!(calls.get(), 2);
}

#[test]
fn repeated_queries_are_identical() {
    let sequence = sample();

    for _ in 0..3 {
        assert_eq!(sequence.first(), Ok(&10));
        assert_eq!(sequence.first_where(|x| *x > 15), Ok(&20));
        assert!(sequence.any());
        assert!(!sequence.any_where(|x| *x > 100));
    }
    assert_eq!(sequence, sample());
}

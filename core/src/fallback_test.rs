use std::collections::LinkedList;

use super::*;
use crate::SequenceError;

#[test]
fn first_of_empty_iterator_is_empty_sequence() {
    let items: [u8; 0] = [];
    assert_eq!(first(&items), Err(SequenceError::EmptySequence));
    assert_eq!(first_or_none(&items), None);
}

#[test]
fn first_where_without_match_is_no_match() {
    let items: [i32; 3] = [1, 3, 5];
    assert_eq!(first_where(&items, |n| *n % 2 == 0), Err(SequenceError::NoMatch));
    assert_eq!(first_where_or_none(&items, |n| *n % 2 == 0), None);
}

#[test]
fn first_where_on_empty_is_no_match_not_empty_sequence() {
    let items: Vec<i32> = Vec::new();
    assert_eq!(first_where(&items, |_| true), Err(SequenceError::NoMatch));
}

#[test]
fn indexed_predicate_sees_positions_in_order() {
    let items = ['a', 'b', 'c', 'd'];
    let mut seen = Vec::new();
    let found = first_where_indexed(&items, |item, index| {
        seen.push(index);
        *item == 'c'
    });

    assert_eq!(found, Ok(&'c'));
    assert_eq!(seen, [0, 1, 2]);
}

#[test]
fn external_argument_is_lent_to_every_call() {
    let items: [i32; 4] = [4, 8, 15, 16];
    let found = first_where_with(&items, 10, |item, limit| item > limit);
    assert_eq!(found, Ok(&15));

    let found = first_where_indexed_with(&items, 3, |_, index, wanted| index == *wanted);
    assert_eq!(found, Ok(&16));
}

#[test]
fn any_pulls_at_most_one_element() {
    let mut pulled = 0;
    let items: [i32; 3] = [1, 2, 3];
    let counting = items.iter().inspect(|_| pulled += 1);

    assert!(any(counting));
    assert_eq!(pulled, 1);
}

#[test]
fn any_where_stops_at_first_match() {
    let items: [i32; 4] = [2, 4, 5, 6];
    let mut calls = 0;
    let found = any_where(&items, |n| {
        calls += 1;
        *n % 2 == 1
    });

    assert!(found);
    assert_eq!(calls, 3);
}

#[test]
fn any_variants_on_linked_list() {
    let items: LinkedList<&str> = ["red", "green", "blue"].into_iter().collect();

    assert!(any_where_indexed(&items, |color, index| index == 1 && *color == "green"));
    assert!(any_where_with(&items, "blue", |color, wanted| color == wanted));
    assert!(!any_where_indexed_with(&items, 'z', |color, _, letter| color.contains(*letter)));
}

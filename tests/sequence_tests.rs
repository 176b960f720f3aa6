#![cfg(feature = "control")]
//! Integration tests for the lazy `Sequence` engine.
//!
//! Laziness is observed through counters incremented by the source, so each
//! test can state exactly how many elements a pass pulled.

use moliath::control::{ListMonad, Sequence, StepKind};
use moliath::typeclass::{Computation, Run};
use rstest::rstest;
use static_assertions::{assert_impl_all, assert_not_impl_any};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

assert_impl_all!(Sequence<i32>: Clone, std::fmt::Debug);
assert_not_impl_any!(Sequence<i32>: Send, Sync);

/// An infinite sequence of naturals that counts how many elements were pulled.
fn counted_naturals() -> (Sequence<u64>, Rc<Cell<usize>>) {
    let pulled = Rc::new(Cell::new(0));
    let counter = Rc::clone(&pulled);
    let sequence = Sequence::from_fn(move || {
        let counter = Rc::clone(&counter);
        (0_u64..).inspect(move |_| counter.set(counter.get() + 1))
    });
    (sequence, pulled)
}

// =============================================================================
// Laziness
// =============================================================================

#[rstest]
fn building_steps_pulls_nothing() {
    let (naturals, pulled) = counted_naturals();
    let _pending = naturals
        .map(|value| value * 2)
        .filter(|value| value % 3 == 0)
        .bind(|value| Sequence::new(vec![value, value + 1]))
        .take(10);
    assert_eq!(pulled.get(), 0);
}

#[rstest]
fn take_stops_an_infinite_source() {
    let (naturals, pulled) = counted_naturals();
    let result = naturals.map(|value| value * 10).take(4).run();
    assert_eq!(result, vec![0, 10, 20, 30]);
    assert_eq!(pulled.get(), 4);
}

#[rstest]
fn filter_before_take_pulls_until_enough_matches() {
    let (naturals, pulled) = counted_naturals();
    let result = naturals.filter(|value| value % 5 == 0).take(3).run();
    assert_eq!(result, vec![0, 5, 10]);
    assert_eq!(pulled.get(), 11);
}

#[rstest]
fn take_before_filter_limits_pulled_elements() {
    let (naturals, pulled) = counted_naturals();
    let result = naturals.take(6).filter(|value| value % 2 == 1).run();
    assert_eq!(result, vec![1, 3, 5]);
    assert_eq!(pulled.get(), 6);
}

#[rstest]
fn take_zero_pulls_nothing() {
    let (naturals, pulled) = counted_naturals();
    assert!(naturals.take(0).run().is_empty());
    assert_eq!(pulled.get(), 0);
}

#[rstest]
fn first_pulls_a_single_match() {
    let (naturals, pulled) = counted_naturals();
    assert_eq!(naturals.filter(|value| *value > 2).first(), Some(3));
    assert_eq!(pulled.get(), 4);
}

#[rstest]
fn bind_then_take_stops_inside_sub_sequence() {
    let (naturals, pulled) = counted_naturals();
    let inner_pulls = Rc::new(Cell::new(0));
    let inner_counter = Rc::clone(&inner_pulls);
    let result = naturals
        .bind(move |value| {
            let counter = Rc::clone(&inner_counter);
            Sequence::from_fn(move || {
                let counter = Rc::clone(&counter);
                (0..3).map(move |offset| value * 100 + offset).inspect(move |_| {
                    counter.set(counter.get() + 1);
                })
            })
        })
        .take(4)
        .run();
    assert_eq!(result, vec![0, 1, 2, 100]);
    assert_eq!(pulled.get(), 2);
    assert_eq!(inner_pulls.get(), 4);
}

#[rstest]
fn maps_run_per_element_in_declaration_order() {
    let trace = Rc::new(RefCell::new(Vec::new()));
    let first = Rc::clone(&trace);
    let second = Rc::clone(&trace);
    let result = Sequence::new(vec![1, 2])
        .map(move |value: i32| {
            first.borrow_mut().push(format!("a{value}"));
            value
        })
        .map(move |value: i32| {
            second.borrow_mut().push(format!("b{value}"));
            value
        })
        .run();
    assert_eq!(result, vec![1, 2]);
    assert_eq!(*trace.borrow(), vec!["a1", "b1", "a2", "b2"]);
}

// =============================================================================
// Restartability
// =============================================================================

#[rstest]
fn every_run_starts_from_scratch() {
    let (naturals, pulled) = counted_naturals();
    let sequence = naturals.take(3);
    assert_eq!(sequence.run(), vec![0, 1, 2]);
    assert_eq!(sequence.run(), vec![0, 1, 2]);
    assert_eq!(pulled.get(), 6);
}

#[rstest]
fn extending_a_clone_leaves_the_original_alone() {
    let base = Sequence::new(1..=5);
    let doubled = base.clone().map(|value| value * 2);
    assert_eq!(base.run(), vec![1, 2, 3, 4, 5]);
    assert_eq!(doubled.run(), vec![2, 4, 6, 8, 10]);
    assert!(base.steps().is_empty());
}

#[rstest]
fn run_with_matches_run() {
    let sequence = Sequence::new(vec!["a", "b"]);
    assert_eq!(sequence.run_with(()), sequence.run());
}

// =============================================================================
// Steps and Terminals
// =============================================================================

#[rstest]
fn steps_reports_pending_pipeline() {
    let sequence = Sequence::new(0..100)
        .filter(|value: &i32| value % 2 == 0)
        .bind(Sequence::pure)
        .map(|value| value.to_string())
        .take(5);
    assert_eq!(
        sequence.steps(),
        vec![
            StepKind::Filter,
            StepKind::Bind,
            StepKind::Map,
            StepKind::Take(5)
        ]
    );
}

#[rstest]
#[case(Sequence::new(Vec::<i32>::new()), 0)]
#[case(Sequence::new(vec![7]), 1)]
#[case(Sequence::new(0..10).filter(|value: &i32| value % 3 == 0), 4)]
fn count_matches_run_length(#[case] sequence: Sequence<i32>, #[case] expected: usize) {
    assert_eq!(sequence.count(), expected);
    assert_eq!(sequence.run().len(), expected);
}

#[rstest]
fn empty_sequence_has_no_first() {
    assert_eq!(Sequence::<String>::empty().first(), None);
}

#[rstest]
fn to_list_collects_into_list_monad() {
    let list = Sequence::new(1..=3).map(|value| value * value).to_list();
    assert_eq!(list, ListMonad::from(vec![1, 4, 9]));
}

#[rstest]
fn apply_pairs_functions_with_values() {
    fn increment(value: i32) -> i32 {
        value + 1
    }
    fn negate(value: i32) -> i32 {
        -value
    }
    let functions = Sequence::new(vec![increment as fn(i32) -> i32, negate]);
    let values = Sequence::new(vec![10, 20]);
    assert_eq!(values.apply(functions.clone()).run(), vec![11, 21, -10, -20]);
    assert_eq!(functions.apply2(Sequence::new(vec![10, 20])).run(), vec![11, 21, -10, -20]);
}

#[rstest]
fn debug_lists_step_kinds() {
    let sequence = Sequence::new(0..3).take(1);
    assert_eq!(format!("{sequence:?}"), "Sequence { steps: [Take(1)], .. }");
}

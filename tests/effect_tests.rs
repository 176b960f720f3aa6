#![cfg(feature = "effect")]
//! Scenario tests for `IO`, `Reader`, `Writer` and `State`.

use moliath::effect::{IO, Reader, State, Writer};
use moliath::typeclass::{Computation, Run, Sum};
use rstest::rstest;
use std::cell::RefCell;
use std::rc::Rc;

// =============================================================================
// Writer
// =============================================================================

#[rstest]
fn writer_tell_accumulates_string_log() {
    let writer = Writer::new(1, "a".to_string())
        .tell("b".to_string())
        .tell("c".to_string());
    assert_eq!(writer.run(), (1, "abc".to_string()));
}

#[rstest]
fn writer_listen_exposes_log_as_value() {
    let listened = Writer::tell_only(vec!["start"])
        .then(Writer::new(3, vec!["three"]))
        .listen()
        .map(|(value, log)| (value, log.len()));
    assert_eq!(listened.run(), ((3, 2), vec!["start", "three"]));
}

#[rstest]
fn writer_censor_rewrites_whole_log() {
    let writer = Writer::new("done", vec![1, 2, 3]).censor(|log| log.into_iter().rev().collect());
    assert_eq!(writer.into_parts(), ("done", vec![3, 2, 1]));
}

#[rstest]
fn writer_counts_with_sum_log() {
    let step = |value: u32| Writer::new(value * 2, Sum(1_u32));
    let writer = Writer::pure(1).bind(step).bind(step).bind(step).bind(step);
    assert_eq!(writer.run(), (16, Sum(4)));
}

// =============================================================================
// Reader
// =============================================================================

#[rstest]
fn reader_local_scales_environment() {
    let reader = Reader::ask().local(|environment: i32| environment * 2);
    assert_eq!(reader.run(5), 10);
}

#[rstest]
fn reader_threads_configuration() {
    #[derive(Clone)]
    struct Config {
        retries: u32,
        verbose: bool,
    }

    let retries = Reader::asks(|config: Config| config.retries);
    let describe = retries.bind(|retries| {
        Reader::asks(move |config: Config| {
            if config.verbose {
                format!("retrying {retries} times")
            } else {
                retries.to_string()
            }
        })
    });

    assert_eq!(describe.run(Config { retries: 3, verbose: true }), "retrying 3 times");
    assert_eq!(describe.run(Config { retries: 1, verbose: false }), "1");
}

// =============================================================================
// State
// =============================================================================

#[rstest]
fn state_doubles_string_state() {
    let program = State::get().bind(|state: String| State::put(format!("{state}{state}")));
    assert_eq!(program.run("x".to_string()), ("xx".to_string(), ()));
}

#[rstest]
fn state_eval_and_exec() {
    let program = State::modify(|count: u32| count + 10).then(State::gets(|count: &u32| count * 2));
    assert_eq!(program.eval(1), 22);
    assert_eq!(program.exec(1), 11);
}

#[rstest]
fn state_labels_items_in_order() {
    fn label(name: &'static str) -> State<u32, String> {
        State::new(move |next_id: u32| (next_id + 1, format!("{next_id}:{name}")))
    }

    let program = label("a").bind(|first| {
        label("b").bind(move |second| {
            let first = first.clone();
            label("c").map(move |third| vec![first.clone(), second.clone(), third])
        })
    });

    assert_eq!(
        program.run(0),
        (3, vec!["0:a".to_string(), "1:b".to_string(), "2:c".to_string()])
    );
}

#[rstest]
#[case(0, (1, 0))]
#[case(41, (42, 41))]
fn state_run_with_matches_run(#[case] initial: i32, #[case] expected: (i32, i32)) {
    let program: State<i32, i32> = State::new(|count| (count + 1, count));
    assert_eq!(program.run_with(initial), expected);
}

// =============================================================================
// IO
// =============================================================================

#[rstest]
fn io_effects_happen_only_on_run() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let writer = Rc::clone(&log);
    let action = IO::new(move || writer.borrow_mut().push("effect")).map(|()| "done");
    assert!(log.borrow().is_empty());
    assert_eq!(action.run(), "done");
    assert_eq!(action.run_with(()), "done");
    assert_eq!(*log.borrow(), vec!["effect", "effect"]);
}

#[rstest]
fn io_attempt_turns_panic_into_failure() {
    let divisor = std::hint::black_box(0);
    let outcome = IO::new(move || 100 / divisor).attempt().run();
    assert!(outcome.is_failure());
    let fine = IO::new(move || 100 / (divisor + 4)).attempt().run();
    assert_eq!(fine.unwrap(), 25);
}

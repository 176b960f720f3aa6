//! IO - deferred side effects.
//!
//! An `IO<T>` describes an effectful computation producing a `T`. Nothing
//! happens when an `IO` is built or composed; the action only runs when
//! [`IO::run`] is called, and it runs again on every call.
//!
//! # Examples
//!
//! ```rust
//! use moliath::effect::IO;
//! use moliath::typeclass::Computation;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let calls = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&calls);
//! let action = IO::new(move || {
//!     counter.set(counter.get() + 1);
//!     counter.get()
//! })
//! .map(|count| count * 10);
//!
//! assert_eq!(calls.get(), 0);
//! assert_eq!(action.run(), 10);
//! assert_eq!(action.run(), 20);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::control::{Try, safe};
use crate::typeclass::{Computation, Run, TypeConstructor};

/// A deferred, re-runnable effectful computation.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `IO::pure(a).bind(f).run() == f(a).run()`
/// 2. **Right Identity**: `m.bind(IO::pure).run() == m.run()`
/// 3. **Associativity**: `m.bind(f).bind(g).run() == m.bind(|x| f(x).bind(g)).run()`
pub struct IO<T> {
    action: Rc<dyn Fn() -> T>,
}

impl<T: 'static> IO<T> {
    /// Creates an IO action from a closure. The closure is not called here.
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        Self {
            action: Rc::new(action),
        }
    }

    /// Creates an IO action that returns `value` without side effects.
    pub fn pure(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(move || value.clone())
    }

    /// Performs the action.
    pub fn run(&self) -> T {
        (self.action)()
    }

    /// Wraps the action behind the [`safe`] boundary.
    ///
    /// Running the result never panics: a panic raised by the action becomes
    /// a [`Try::Failure`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::effect::IO;
    ///
    /// let action: IO<i32> = IO::new(|| panic!("disk on fire"));
    /// let outcome = action.attempt().run();
    /// assert!(outcome.is_failure());
    /// ```
    pub fn attempt(self) -> IO<Try<T>> {
        let action = self.action;
        IO::new(move || safe(|| action()))
    }
}

impl<T> Clone for IO<T> {
    fn clone(&self) -> Self {
        Self {
            action: Rc::clone(&self.action),
        }
    }
}

impl<T> fmt::Debug for IO<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("IO(<deferred>)")
    }
}

impl<T: 'static> Run for IO<T> {
    type Input = ();
    type Output = T;

    fn run_with(&self, _: ()) -> T {
        self.run()
    }
}

// =============================================================================
// Computation Implementation
// =============================================================================

impl<T> TypeConstructor for IO<T> {
    type Inner = T;
    type WithType<B> = IO<B>;
}

impl<T: 'static> Computation for IO<T> {
    fn map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(T) -> B + 'static,
        B: 'static,
    {
        let action = self.action;
        IO::new(move || function(action()))
    }

    fn bind<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(T) -> IO<B> + 'static,
        B: 'static,
    {
        let action = self.action;
        IO::new(move || function(action()).run())
    }

    fn apply<B, G>(self, other: IO<G>) -> IO<B>
    where
        G: Fn(T) -> B + 'static,
        B: 'static,
    {
        // The function holder's effects happen first.
        IO::new(move || {
            let function = other.run();
            function(self.run())
        })
    }

    fn apply2<V, B>(self, other: IO<V>) -> IO<B>
    where
        T: Fn(V) -> B,
        V: Clone + 'static,
        B: 'static,
    {
        IO::new(move || {
            let function = self.run();
            function(other.run())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::{Cell, RefCell};

    fn recorder(log: &Rc<RefCell<Vec<&'static str>>>, label: &'static str) -> IO<()> {
        let log = Rc::clone(log);
        IO::new(move || log.borrow_mut().push(label))
    }

    #[rstest]
    fn construction_does_not_run() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let action = IO::new(move || counter.set(counter.get() + 1))
            .map(|()| 1)
            .bind(IO::pure);
        assert_eq!(calls.get(), 0);
        assert_eq!(action.run(), 1);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn each_run_repeats_effects() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let action = recorder(&log, "tick");
        action.run();
        action.clone().run();
        assert_eq!(*log.borrow(), vec!["tick", "tick"]);
    }

    #[rstest]
    fn then_sequences_effects() {
        let log = Rc::new(RefCell::new(Vec::new()));
        recorder(&log, "first").then(recorder(&log, "second")).run();
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[rstest]
    fn apply_runs_function_holder_before_receiver() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let value = recorder(&log, "value").map(|()| 20);
        let function = recorder(&log, "function").map(|()| |value: i32| value + 22);
        assert_eq!(value.apply(function).run(), 42);
        assert_eq!(*log.borrow(), vec!["function", "value"]);
    }

    #[rstest]
    fn apply2_runs_function_holder_first() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let value = recorder(&log, "value").map(|()| 20);
        let function = recorder(&log, "function").map(|()| |value: i32| value + 22);
        assert_eq!(function.apply2(value).run(), 42);
        assert_eq!(*log.borrow(), vec!["function", "value"]);
    }

    #[rstest]
    fn attempt_captures_panic() {
        let divisor = std::hint::black_box(0);
        let outcome = IO::new(move || 10 / divisor).attempt().run();
        assert!(outcome.is_failure());
    }

    #[rstest]
    fn attempt_keeps_success() {
        assert_eq!(IO::pure(5).attempt().run(), Try::Success(5));
    }

    #[rstest]
    fn debug_hides_action() {
        assert_eq!(format!("{:?}", IO::pure(1)), "IO(<deferred>)");
    }
}

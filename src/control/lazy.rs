//! Deferred pure computations.
//!
//! A [`Lazy<T>`] holds a computation that produces a `T` when run. Chaining
//! protocol operations builds a bigger computation without running anything;
//! [`Lazy::run`] evaluates it.
//!
//! Running does not cache: every `run` evaluates the computation again, which
//! for a pure computation yields an equal value. [`Lazy::memoize`] returns a
//! lazy value that evaluates once and hands out clones of the first result.
//!
//! # Examples
//!
//! ```rust
//! use moliath::control::Lazy;
//! use moliath::typeclass::Computation;
//!
//! let answer = Lazy::new(|| 40).map(|value| value + 2);
//! assert_eq!(answer.run(), 42);
//! ```

use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

use crate::typeclass::{Computation, Run, TypeConstructor};

/// A deferred pure computation.
///
/// # Examples
///
/// ```rust
/// use moliath::control::Lazy;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let calls = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&calls);
/// let lazy = Lazy::new(move || {
///     counter.set(counter.get() + 1);
///     42
/// });
///
/// assert_eq!(calls.get(), 0);
/// assert_eq!(lazy.run(), 42);
/// assert_eq!(lazy.run(), 42);
/// assert_eq!(calls.get(), 2);
/// ```
pub struct Lazy<T> {
    computation: Rc<dyn Fn() -> T>,
}

impl<T: 'static> Lazy<T> {
    /// Creates a lazy value from a computation.
    #[inline]
    pub fn new<F>(computation: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        Self {
            computation: Rc::new(computation),
        }
    }

    /// Creates a lazy value that evaluates to `value`.
    #[inline]
    pub fn pure(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(move || value.clone())
    }

    /// Evaluates the computation.
    #[inline]
    pub fn run(&self) -> T {
        (self.computation)()
    }

    /// Returns a lazy value that evaluates this computation at most once.
    ///
    /// The first successful `run` stores the result; later runs, including
    /// those of clones of the returned value, return clones of it. A
    /// computation that panics stores nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::control::Lazy;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let calls = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&calls);
    /// let memoized = Lazy::new(move || {
    ///     counter.set(counter.get() + 1);
    ///     "expensive".to_string()
    /// })
    /// .memoize();
    ///
    /// assert_eq!(memoized.run(), "expensive");
    /// assert_eq!(memoized.clone().run(), "expensive");
    /// assert_eq!(calls.get(), 1);
    /// ```
    #[must_use]
    pub fn memoize(&self) -> Self
    where
        T: Clone,
    {
        let computation = Rc::clone(&self.computation);
        let cell: Rc<OnceCell<T>> = Rc::new(OnceCell::new());
        Self::new(move || cell.get_or_init(|| computation()).clone())
    }
}

impl<T> Clone for Lazy<T> {
    fn clone(&self) -> Self {
        Self {
            computation: Rc::clone(&self.computation),
        }
    }
}

impl<T> fmt::Debug for Lazy<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Lazy(<deferred>)")
    }
}

impl<T: 'static> Run for Lazy<T> {
    type Input = ();
    type Output = T;

    fn run_with(&self, _: ()) -> T {
        self.run()
    }
}

// =============================================================================
// Computation Implementation
// =============================================================================

impl<T> TypeConstructor for Lazy<T> {
    type Inner = T;
    type WithType<B> = Lazy<B>;
}

impl<T: 'static> Computation for Lazy<T> {
    fn map<B, F>(self, function: F) -> Lazy<B>
    where
        F: Fn(T) -> B + 'static,
        B: 'static,
    {
        Lazy::new(move || function(self.run()))
    }

    fn bind<B, F>(self, function: F) -> Lazy<B>
    where
        F: Fn(T) -> Lazy<B> + 'static,
        B: 'static,
    {
        Lazy::new(move || function(self.run()).run())
    }

    fn apply<B, G>(self, other: Lazy<G>) -> Lazy<B>
    where
        G: Fn(T) -> B + 'static,
        B: 'static,
    {
        Lazy::new(move || {
            let function = other.run();
            function(self.run())
        })
    }

    fn apply2<A, B>(self, other: Lazy<A>) -> Lazy<B>
    where
        T: Fn(A) -> B,
        A: Clone + 'static,
        B: 'static,
    {
        Lazy::new(move || {
            let function = self.run();
            function(other.run())
        })
    }
}

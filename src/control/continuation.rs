//! Continuation type for continuation-passing style (CPS).
//!
//! A `Continuation<R, A>` is a computation `(A -> R) -> R`: it produces
//! values of type `A` by handing them to a callback, and the callback's
//! result becomes the result of the whole computation. The computation
//! decides when and how often the callback runs, which is how callback-based
//! APIs (observers, event sources) are modelled.
//!
//! Continuations are re-runnable: `run` takes `&self` and callbacks are shared
//! `Fn` closures, so a computation may call its callback any number of times.
//!
//! # Examples
//!
//! ```rust
//! use moliath::control::Continuation;
//! use moliath::typeclass::Computation;
//!
//! let greeting: Continuation<String, &str> = Continuation::new(|callback| callback("world"));
//! let formatted = greeting.map(|name| format!("hello {name}"));
//! assert_eq!(formatted.run(|text| text.to_uppercase()), "HELLO WORLD");
//! ```

use std::fmt;
use std::rc::Rc;

use crate::typeclass::{Computation, TypeConstructor};

/// A shared callback receiving the produced values.
pub type Callback<A, R> = Rc<dyn Fn(A) -> R>;

/// A computation in continuation-passing style.
///
/// # Type Parameters
///
/// * `R` - The final result of the whole computation
/// * `A` - The intermediate value handed to the callback
///
/// # Laws
///
/// - **Left Identity**: `Continuation::pure(a).bind(f).run(k) == f(a).run(k)`
/// - **Right Identity**: `m.bind(Continuation::pure).run(k) == m.run(k)`
/// - **Associativity**: `m.bind(f).bind(g).run(k) == m.bind(|x| f(x).bind(g)).run(k)`
pub struct Continuation<R, A> {
    computation: Rc<dyn Fn(Callback<A, R>) -> R>,
}

impl<R: 'static, A: 'static> Continuation<R, A> {
    /// Creates a continuation from a function receiving the callback.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::control::Continuation;
    ///
    /// let both: Continuation<i32, i32> = Continuation::new(|callback| callback(1) + callback(2));
    /// assert_eq!(both.run(|value| value * 10), 30);
    /// ```
    pub fn new<F>(computation: F) -> Self
    where
        F: Fn(Callback<A, R>) -> R + 'static,
    {
        Self {
            computation: Rc::new(computation),
        }
    }

    /// Creates a continuation that hands `value` to its callback once.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |callback| callback(value.clone()))
    }

    /// Runs the computation with `callback` as the final continuation.
    pub fn run<K>(&self, callback: K) -> R
    where
        K: Fn(A) -> R + 'static,
    {
        self.run_shared(Rc::new(callback))
    }

    fn run_shared(&self, callback: Callback<A, R>) -> R {
        (self.computation)(callback)
    }
}

impl<R, A> Clone for Continuation<R, A> {
    fn clone(&self) -> Self {
        Self {
            computation: Rc::clone(&self.computation),
        }
    }
}

impl<R, A> fmt::Debug for Continuation<R, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Continuation")
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Computation Implementation
// =============================================================================

impl<R, A> TypeConstructor for Continuation<R, A> {
    type Inner = A;
    type WithType<B> = Continuation<R, B>;
}

impl<R: 'static, A: 'static> Computation for Continuation<R, A> {
    fn map<B, F>(self, function: F) -> Continuation<R, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let function = Rc::new(function);
        Continuation::new(move |callback: Callback<B, R>| {
            let function = Rc::clone(&function);
            self.run_shared(Rc::new(move |value: A| callback(function(value))))
        })
    }

    fn bind<B, F>(self, function: F) -> Continuation<R, B>
    where
        F: Fn(A) -> Continuation<R, B> + 'static,
        B: 'static,
    {
        let function = Rc::new(function);
        Continuation::new(move |callback: Callback<B, R>| {
            let function = Rc::clone(&function);
            self.run_shared(Rc::new(move |value: A| {
                function(value).run_shared(Rc::clone(&callback))
            }))
        })
    }

    fn apply<B, G>(self, other: Continuation<R, G>) -> Continuation<R, B>
    where
        G: Fn(A) -> B + 'static,
        B: 'static,
    {
        other.bind(move |function| self.clone().map(function))
    }

    fn apply2<V, B>(self, other: Continuation<R, V>) -> Continuation<R, B>
    where
        A: Fn(V) -> B,
        V: Clone + 'static,
        B: 'static,
    {
        self.bind(move |function| other.clone().map(move |value| function(value)))
    }
}

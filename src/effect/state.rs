//! State - computations threading a state value.
//!
//! A `State<S, A>` wraps a transition `S -> (S, A)`: given the current state it
//! produces the next state and a value. Chaining with `bind` feeds the state
//! left by one step into the next, so a sequence of stateful steps reads like
//! straight-line code.
//!
//! # Laws
//!
//! Besides the functor and monad laws of the protocol:
//!
//! - Get Put Law: `State::get().bind(State::put)` leaves the state unchanged
//! - Put Get Law: `State::put(s).then(State::get())` yields `s`
//! - Put Put Law: `State::put(s1).then(State::put(s2)) == State::put(s2)`
//!
//! # Examples
//!
//! ```rust
//! use moliath::effect::State;
//! use moliath::typeclass::Computation;
//!
//! fn push(value: i32) -> State<Vec<i32>, ()> {
//!     State::modify(move |mut stack: Vec<i32>| {
//!         stack.push(value);
//!         stack
//!     })
//! }
//!
//! fn pop() -> State<Vec<i32>, Option<i32>> {
//!     State::new(|mut stack: Vec<i32>| {
//!         let top = stack.pop();
//!         (stack, top)
//!     })
//! }
//!
//! let program = push(1).then(push(2)).then(pop());
//! assert_eq!(program.run(vec![]), (vec![1], Some(2)));
//! ```

use std::fmt;
use std::rc::Rc;

use crate::typeclass::{Computation, Run, TypeConstructor};

/// A stateful computation over a state of type `S` producing an `A`.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The value type
pub struct State<S, A> {
    transition: Rc<dyn Fn(S) -> (S, A)>,
}

impl<S: 'static, A: 'static> State<S, A> {
    /// Creates a state computation from a transition returning
    /// `(new_state, value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::effect::State;
    ///
    /// let tick: State<u32, &str> = State::new(|count| (count + 1, "tick"));
    /// assert_eq!(tick.run(0), (1, "tick"));
    /// ```
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> (S, A) + 'static,
    {
        Self {
            transition: Rc::new(transition),
        }
    }

    /// Runs the computation from `initial_state`, returning
    /// `(final_state, value)`.
    pub fn run(&self, initial_state: S) -> (S, A) {
        (self.transition)(initial_state)
    }

    /// Runs the computation and returns only the value.
    pub fn eval(&self, initial_state: S) -> A {
        self.run(initial_state).1
    }

    /// Runs the computation and returns only the final state.
    pub fn exec(&self, initial_state: S) -> S {
        self.run(initial_state).0
    }

    /// Creates a computation returning `value` and leaving the state alone.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (state, value.clone()))
    }

    /// Creates a computation returning a projection of the state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::effect::State;
    ///
    /// let length: State<String, usize> = State::gets(|text: &String| text.len());
    /// assert_eq!(length.run("abc".into()), ("abc".to_string(), 3));
    /// ```
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| {
            let value = projection(&state);
            (state, value)
        })
    }
}

impl<S: Clone + 'static> State<S, S> {
    /// Creates a computation returning the current state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::effect::State;
    ///
    /// assert_eq!(State::<i32, i32>::get().run(5), (5, 5));
    /// ```
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S: 'static> State<S, ()> {
    /// Creates a computation replacing the state with `new_state`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::effect::State;
    ///
    /// assert_eq!(State::put(9).run(5), (9, ()));
    /// ```
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| (new_state.clone(), ()))
    }

    /// Creates a computation transforming the state with `modifier`.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| (modifier(state), ()))
    }
}

// =============================================================================
// Clone and Display
// =============================================================================

impl<S, A> Clone for State<S, A> {
    fn clone(&self) -> Self {
        Self {
            transition: Rc::clone(&self.transition),
        }
    }
}

impl<S, A> fmt::Display for State<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<State>")
    }
}

impl<S, A> fmt::Debug for State<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("State").finish_non_exhaustive()
    }
}

impl<S: 'static, A: 'static> Run for State<S, A> {
    type Input = S;
    type Output = (S, A);

    fn run_with(&self, initial_state: S) -> (S, A) {
        self.run(initial_state)
    }
}

// =============================================================================
// Computation Implementation
// =============================================================================

impl<S, A> TypeConstructor for State<S, A> {
    type Inner = A;
    type WithType<B> = State<S, B>;
}

impl<S: 'static, A: 'static> Computation for State<S, A> {
    fn map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let (next_state, value) = transition(state);
            (next_state, function(value))
        })
    }

    fn bind<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let (next_state, value) = transition(state);
            function(value).run(next_state)
        })
    }

    fn apply<B, G>(self, other: State<S, G>) -> State<S, B>
    where
        G: Fn(A) -> B + 'static,
        B: 'static,
    {
        // Same threading as `other.bind(|function| self.map(function))`.
        State::new(move |state| {
            let (state, function) = other.run(state);
            let (state, value) = self.run(state);
            (state, function(value))
        })
    }

    fn apply2<V, B>(self, other: State<S, V>) -> State<S, B>
    where
        A: Fn(V) -> B,
        V: Clone + 'static,
        B: 'static,
    {
        State::new(move |state| {
            let (state, function) = self.run(state);
            let (state, value) = other.run(state);
            (state, function(value))
        })
    }
}

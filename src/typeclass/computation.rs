//! The computation protocol shared by every container.
//!
//! [`Computation`] bundles the four composition operations every container
//! supports:
//!
//! - `map`: transform the held value(s) without changing the shape
//! - `bind`: feed the held value(s) to a function returning a new container
//!   and flatten one level
//! - `apply`: feed the held value(s) to the function(s) held by another
//!   container
//! - `apply2`: the mirror image, where the receiver holds the function(s)
//!
//! [`Run`] is the matching terminal operation for the deferred containers,
//! giving generic code one way to force any of them.
//!
//! # Shapes
//!
//! Containers with an absent or error shape (`Nothing`, `Left`, `Err`,
//! `Failure`) short-circuit: functions passed to `map` and `bind` are never
//! invoked, and the payload is carried over unchanged. When both sides of
//! `apply`/`apply2` are absent or failed, the receiver's shape wins.
//!
//! # Laws
//!
//! ## Functor Laws
//!
//! ```text
//! c.map(|x| x) == c
//! c.map(f).map(g) == c.map(|x| g(f(x)))
//! ```
//!
//! ## Monad Laws
//!
//! ```text
//! unit(a).bind(f) == f(a)
//! m.bind(unit) == m
//! m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
//! ```
//!
//! ## Applicative Law
//!
//! ```text
//! c.apply(h) == h.bind(|function| c.map(function))
//! ```
//!
//! Deferred containers therefore run `h` before `c`. Two exceptions:
//!
//! - When both sides are absent or failed, `apply` keeps the receiver's
//!   payload, where the right-hand side would keep `h`'s.
//! - `Writer::apply` puts the receiver's log before the log of `h`.
//!
//! # Examples
//!
//! ```rust
//! use moliath::typeclass::Computation;
//!
//! fn increment<C>(container: C) -> C::WithType<i32>
//! where
//!     C: Computation<Inner = i32>,
//! {
//!     container.map(|value| value + 1)
//! }
//!
//! assert_eq!(increment(Ok::<i32, String>(41)), Ok(42));
//! assert_eq!(increment(Err::<i32, String>("boom".into())), Err("boom".into()));
//! ```

use super::higher::TypeConstructor;

/// The composition protocol implemented by every container.
///
/// Functions handed to the protocol are `'static` closures: deferred
/// containers store them until a terminal operation runs.
pub trait Computation: TypeConstructor + Sized {
    /// Applies a function to the held value(s), preserving the shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::typeclass::Computation;
    ///
    /// assert_eq!(Ok::<i32, ()>(2).map(|value| value * 21), Ok(42));
    /// ```
    fn map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> B + 'static,
        B: 'static;

    /// Applies a function returning a container and flattens the result.
    ///
    /// Absent or error shapes are returned without invoking `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::typeclass::Computation;
    ///
    /// let failed: Result<i32, String> = Err("boom".to_string());
    /// let chained = failed.bind(|_| -> Result<i32, String> { unreachable!() });
    /// assert_eq!(chained, Err("boom".to_string()));
    /// ```
    fn bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static;

    /// Applies the function(s) held by `other` to the held value(s).
    ///
    /// Multi-valued containers may hand the same value to several
    /// functions, hence the `Clone` bound on the held type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::typeclass::Computation;
    ///
    /// let function: Result<fn(i32) -> i32, ()> = Ok(|value| value + 1);
    /// assert_eq!(Ok(41).apply(function), Ok(42));
    /// ```
    fn apply<B, G>(self, other: Self::WithType<G>) -> Self::WithType<B>
    where
        G: Fn(Self::Inner) -> B + 'static,
        Self::Inner: Clone,
        B: 'static;

    /// Applies the held function(s) to the value(s) held by `other`.
    ///
    /// Multi-valued containers may hand the same argument to several
    /// functions, hence the `Clone` bound on `A`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::typeclass::Computation;
    ///
    /// let function: Result<fn(i32) -> i32, ()> = Ok(|value| value * 2);
    /// assert_eq!(function.apply2(Ok(21)), Ok(42));
    /// ```
    fn apply2<A, B>(self, other: Self::WithType<A>) -> Self::WithType<B>
    where
        Self::Inner: Fn(A) -> B,
        A: Clone + 'static,
        B: 'static;

    /// Sequences `next` after this computation, discarding this result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::typeclass::Computation;
    ///
    /// assert_eq!(Ok::<i32, ()>(1).then(Ok("next")), Ok("next"));
    /// assert_eq!(Err::<i32, &str>("first").then(Ok::<&str, &str>("next")), Err("first"));
    /// ```
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self::WithType<B>: Clone + 'static,
        B: 'static,
    {
        self.bind(move |_| next.clone())
    }
}

/// The terminal operation of a deferred container.
///
/// `Input` is what evaluation needs from the caller (`()` for containers that
/// need nothing, the environment for Reader, the initial state for State).
/// Running never mutates the container.
///
/// # Examples
///
/// ```rust
/// use moliath::effect::Reader;
/// use moliath::typeclass::Run;
///
/// fn run_twice<C: Run>(container: &C, input: C::Input) -> (C::Output, C::Output)
/// where
///     C::Input: Clone,
/// {
///     (container.run_with(input.clone()), container.run_with(input))
/// }
///
/// let reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
/// assert_eq!(run_twice(&reader, 21), (42, 42));
/// ```
pub trait Run {
    /// What evaluation consumes.
    type Input;
    /// What evaluation produces.
    type Output;

    /// Evaluates the container.
    fn run_with(&self, input: Self::Input) -> Self::Output;
}

// =============================================================================
// Result Implementation
// =============================================================================

impl<T, E> Computation for Result<T, E> {
    #[inline]
    fn map<B, F>(self, function: F) -> Result<B, E>
    where
        F: Fn(T) -> B + 'static,
        B: 'static,
    {
        match self {
            Ok(value) => Ok(function(value)),
            Err(error) => Err(error),
        }
    }

    #[inline]
    fn bind<B, F>(self, function: F) -> Result<B, E>
    where
        F: Fn(T) -> Result<B, E> + 'static,
        B: 'static,
    {
        match self {
            Ok(value) => function(value),
            Err(error) => Err(error),
        }
    }

    fn apply<B, G>(self, other: Result<G, E>) -> Result<B, E>
    where
        G: Fn(T) -> B + 'static,
        B: 'static,
    {
        match (self, other) {
            (Err(error), _) | (Ok(_), Err(error)) => Err(error),
            (Ok(value), Ok(function)) => Ok(function(value)),
        }
    }

    fn apply2<A, B>(self, other: Result<A, E>) -> Result<B, E>
    where
        T: Fn(A) -> B,
        A: Clone + 'static,
        B: 'static,
    {
        match (self, other) {
            (Err(error), _) | (Ok(_), Err(error)) => Err(error),
            (Ok(function), Ok(value)) => Ok(function(value)),
        }
    }
}

//! Either type - a value that can be one of two types.
//!
//! `Either<L, R>` is right-biased: the computation protocol acts on `Right`
//! values, and a `Left` value short-circuits every operation, carrying its
//! payload through unchanged. By convention `Left` holds an error or the
//! reason a computation stopped.
//!
//! # Examples
//!
//! ```rust
//! use moliath::control::Either;
//! use moliath::typeclass::Computation;
//!
//! fn positive(value: i32) -> Either<String, i32> {
//!     if value > 0 {
//!         Either::Right(value)
//!     } else {
//!         Either::Left(format!("{value} is not positive"))
//!     }
//! }
//!
//! assert_eq!(positive(3).bind(|value| positive(value - 1)), Either::Right(2));
//! assert_eq!(
//!     positive(1).bind(|value| positive(value - 1)),
//!     Either::Left("0 is not positive".to_string())
//! );
//! ```

use std::fmt;

use crate::error::ContractViolation;
use crate::typeclass::{Computation, TypeConstructor};

/// A value that is either `Left(L)` or `Right(R)`.
///
/// # Type Parameters
///
/// * `L` - The type of the left value, usually an error
/// * `R` - The type of the right value, the one the protocol works on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally the failure.
    Left(L),
    /// The right variant, conventionally the success.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the left value or `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::control::Either;
    ///
    /// assert_eq!(Either::<i32, &str>::Left(1).left_or(0), 1);
    /// assert_eq!(Either::<i32, &str>::Right("r").left_or(0), 0);
    /// ```
    #[inline]
    pub fn left_or(self, default: L) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => default,
        }
    }

    /// Returns the right value or `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::control::Either;
    ///
    /// assert_eq!(Either::<&str, i32>::Right(1).right_or(0), 1);
    /// assert_eq!(Either::<&str, i32>::Left("l").right_or(0), 0);
    /// ```
    #[inline]
    pub fn right_or(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics with a [`ContractViolation`] message if this is a `Right` value.
    #[inline]
    #[track_caller]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => ContractViolation {
                container: "Either",
                operation: "unwrap_left",
                shape: "Right",
            }
            .raise(),
        }
    }

    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics with a [`ContractViolation`] message if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::control::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(42);
    /// assert_eq!(right.unwrap_right(), 42);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => ContractViolation {
                container: "Either",
                operation: "unwrap_right",
                shape: "Left",
            }
            .raise(),
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left value, leaving a `Right` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::control::Either;
    ///
    /// let left: Either<&str, i32> = Either::Left("bad input");
    /// assert_eq!(left.map_left(str::len), Either::Left(9));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Eliminates the either by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::control::Either;
    ///
    /// let describe = |either: Either<String, i32>| {
    ///     either.fold(|error| format!("error: {error}"), |value| format!("value: {value}"))
    /// };
    /// assert_eq!(describe(Either::Right(1)), "value: 1");
    /// assert_eq!(describe(Either::Left("bad".into())), "error: bad");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Swaps the variants: `Left(l)` becomes `Right(l)` and vice versa.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Reference Extraction
    // =========================================================================

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Computation Implementation
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L, R> Computation for Either<L, R> {
    #[inline]
    fn map<B, F>(self, function: F) -> Either<L, B>
    where
        F: Fn(R) -> B + 'static,
        B: 'static,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    #[inline]
    fn bind<B, F>(self, function: F) -> Either<L, B>
    where
        F: Fn(R) -> Either<L, B> + 'static,
        B: 'static,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    fn apply<B, G>(self, other: Either<L, G>) -> Either<L, B>
    where
        G: Fn(R) -> B + 'static,
        B: 'static,
    {
        match (self, other) {
            (Self::Left(value), _) | (Self::Right(_), Either::Left(value)) => Either::Left(value),
            (Self::Right(value), Either::Right(function)) => Either::Right(function(value)),
        }
    }

    fn apply2<A, B>(self, other: Either<L, A>) -> Either<L, B>
    where
        R: Fn(A) -> B,
        A: Clone + 'static,
        B: 'static,
    {
        match (self, other) {
            (Self::Left(value), _) | (Self::Right(_), Either::Left(value)) => Either::Left(value),
            (Self::Right(function), Either::Right(value)) => Either::Right(function(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn shape_checks() {
        let left: Either<i32, String> = Either::Left(1);
        let right: Either<i32, String> = Either::Right("r".to_string());
        assert!(left.is_left() && !left.is_right());
        assert!(right.is_right() && !right.is_left());
    }

    #[rstest]
    fn map_acts_on_right_only() {
        let left: Either<&str, i32> = Either::Left("stop");
        assert_eq!(left.map(|value| value + 1), Either::Left("stop"));
        assert_eq!(Either::<&str, i32>::Right(1).map(|value| value + 1), Either::Right(2));
    }

    #[rstest]
    fn apply_left_receiver_wins() {
        let receiver: Either<&str, i32> = Either::Left("receiver");
        let function: Either<&str, fn(i32) -> i32> = Either::Left("function");
        assert_eq!(receiver.apply(function), Either::Left("receiver"));
    }

    #[rstest]
    fn apply2_left_function_holder_wins() {
        let function: Either<&str, fn(i32) -> i32> = Either::Left("function");
        assert_eq!(function.apply2(Either::Left("argument")), Either::Left("function"));
    }

    #[rstest]
    fn swap_exchanges_sides() {
        assert_eq!(Either::<i32, &str>::Left(1).swap(), Either::Right(1));
        assert_eq!(Either::<i32, &str>::Right("r").swap(), Either::Left("r"));
    }

    #[rstest]
    fn result_round_trip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        assert_eq!(Result::from(either), Ok(42));

        let error: Result<i32, String> = Err("error".to_string());
        let either: Either<String, i32> = error.into();
        assert_eq!(Result::from(either), Err::<i32, String>("error".to_string()));
    }

    #[rstest]
    #[should_panic(expected = "called `Either::unwrap_right()` on a `Left` value")]
    fn unwrap_right_on_left_panics() {
        let _ = Either::<&str, i32>::Left("bad").unwrap_right();
    }

    #[rstest]
    #[should_panic(expected = "called `Either::unwrap_left()` on a `Right` value")]
    fn unwrap_left_on_right_panics() {
        let _ = Either::<&str, i32>::Right(1).unwrap_left();
    }
}

//! Maybe type - an optional value with the computation protocol.
//!
//! `Maybe<T>` is either `Just(T)` or `Nothing`. It mirrors [`Option`] and
//! converts to and from it freely, but implements
//! [`Computation`] so it composes with the other containers of this crate.
//!
//! # Examples
//!
//! ```rust
//! use moliath::control::Maybe;
//! use moliath::typeclass::Computation;
//!
//! fn parse(input: &str) -> Maybe<i32> {
//!     input.parse().ok().into()
//! }
//!
//! let total = parse("40").bind(|value| parse("2").map(move |other| value + other));
//! assert_eq!(total, Maybe::Just(42));
//!
//! let missing = parse("forty").bind(|value| parse("2").map(move |other| value + other));
//! assert_eq!(missing, Maybe::Nothing);
//! ```

use std::fmt;

use crate::control::Either;
use crate::error::ContractViolation;
use crate::typeclass::{Computation, TypeConstructor};

/// A value that may be absent.
///
/// `Nothing` short-circuits every protocol operation: functions handed to
/// `map` or `bind` are never called on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// No value.
    #[default]
    Nothing,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Just` value.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Returns a reference to the held value, if any.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the held value, consuming the maybe.
    ///
    /// # Panics
    ///
    /// Panics with a [`ContractViolation`] message if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(3).unwrap(), 3);
    /// ```
    ///
    /// ```rust,should_panic
    /// use moliath::control::Maybe;
    ///
    /// Maybe::<i32>::Nothing.unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => ContractViolation {
                container: "Maybe",
                operation: "unwrap",
                shape: "Nothing",
            }
            .raise(),
        }
    }

    /// Returns the held value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the held value or computes one from `fallback`.
    #[inline]
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => fallback(),
        }
    }

    /// Eliminates the maybe: `on_nothing` for `Nothing`, `on_just` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::control::Maybe;
    ///
    /// let describe = |maybe: Maybe<i32>| maybe.fold(|| "none".to_string(), |value| value.to_string());
    /// assert_eq!(describe(Maybe::Just(7)), "7");
    /// assert_eq!(describe(Maybe::Nothing), "none");
    /// ```
    #[inline]
    pub fn fold<U, N, J>(self, on_nothing: N, on_just: J) -> U
    where
        N: FnOnce() -> U,
        J: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => on_just(value),
            Self::Nothing => on_nothing(),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts from an [`Option`].
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        option.map_or(Self::Nothing, Self::Just)
    }

    /// Converts into an [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Converts into an [`Either`], using `left` for `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::control::{Either, Maybe};
    ///
    /// assert_eq!(Maybe::Just(1).ok_or("missing"), Either::Right(1));
    /// assert_eq!(Maybe::<i32>::Nothing.ok_or("missing"), Either::Left("missing"));
    /// ```
    #[inline]
    pub fn ok_or<L>(self, left: L) -> Either<L, T> {
        match self {
            Self::Just(value) => Either::Right(value),
            Self::Nothing => Either::Left(left),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value})"),
            Self::Nothing => write!(formatter, "Nothing"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self::from_option(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

// =============================================================================
// Computation Implementation
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Computation for Maybe<T> {
    #[inline]
    fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: Fn(T) -> B + 'static,
        B: 'static,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    #[inline]
    fn bind<B, F>(self, function: F) -> Maybe<B>
    where
        F: Fn(T) -> Maybe<B> + 'static,
        B: 'static,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    fn apply<B, G>(self, other: Maybe<G>) -> Maybe<B>
    where
        G: Fn(T) -> B + 'static,
        B: 'static,
    {
        match (self, other) {
            (Self::Just(value), Maybe::Just(function)) => Maybe::Just(function(value)),
            _ => Maybe::Nothing,
        }
    }

    fn apply2<A, B>(self, other: Maybe<A>) -> Maybe<B>
    where
        T: Fn(A) -> B,
        A: Clone + 'static,
        B: 'static,
    {
        match (self, other) {
            (Self::Just(function), Maybe::Just(value)) => Maybe::Just(function(value)),
            _ => Maybe::Nothing,
        }
    }
}

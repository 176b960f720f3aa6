//! Try type and the `safe` boundary.
//!
//! [`Try<T>`] is either `Success(T)` or `Failure(Failure)`. A `Try` is produced
//! at the boundary with code that may panic or return an error: [`safe`] runs
//! a function behind [`catch_unwind`] and turns a panic into a
//! [`Failure`] value, after which it short-circuits like any other error
//! shape.
//!
//! The protocol operations do not catch panics themselves. A function that
//! can fail should be wrapped with [`safe`] (or return a `Try`) and chained
//! with `bind`.
//!
//! # Examples
//!
//! ```rust
//! use moliath::control::{Try, safe};
//! use moliath::typeclass::Computation;
//!
//! let parsed = safe(|| "21".parse::<i32>().unwrap()).map(|value| value * 2);
//! assert_eq!(parsed, Try::Success(42));
//!
//! let broken = safe(|| "twenty".parse::<i32>().unwrap()).map(|value| value * 2);
//! assert!(broken.is_failure());
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::control::Either;
use crate::error::{ContractViolation, Failure};
use crate::typeclass::{Computation, TypeConstructor};

/// The outcome of a computation that may have failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Try<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed.
    Failure(Failure),
}

/// Runs `function`, capturing a panic as a [`Try::Failure`].
///
/// A normal return becomes [`Try::Success`]. The panic message is kept in the
/// captured [`Failure`]; the process-wide panic hook still runs as usual.
///
/// # Examples
///
/// ```rust
/// use moliath::control::safe;
/// use moliath::error::FailureKind;
///
/// let divisor = std::hint::black_box(0);
/// let outcome = safe(move || 10 / divisor);
/// let failure = outcome.unwrap_failure_or_else(|_| unreachable!());
/// assert_eq!(failure.kind(), FailureKind::Panic);
/// assert!(failure.message().contains("divide by zero"));
/// ```
pub fn safe<T, F>(function: F) -> Try<T>
where
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(function)) {
        Ok(value) => Try::Success(value),
        Err(payload) => {
            let failure = Failure::from_panic(payload.as_ref());
            tracing::debug!(message = failure.message(), "captured panic at safe boundary");
            Try::Failure(failure)
        }
    }
}

/// Like [`safe`], but returns a `Result<T, Failure>`.
///
/// # Examples
///
/// ```rust
/// use moliath::control::safe_result;
///
/// assert_eq!(safe_result(|| 1 + 1), Ok(2));
/// assert!(safe_result(|| -> i32 { panic!("nope") }).is_err());
/// ```
pub fn safe_result<T, F>(function: F) -> Result<T, Failure>
where
    F: FnOnce() -> T,
{
    safe(function).to_result()
}

/// Like [`safe`], but returns an [`Either`] with the failure on the left.
///
/// # Examples
///
/// ```rust
/// use moliath::control::{Either, safe_either};
///
/// assert_eq!(safe_either(|| 2 * 21), Either::Right(42));
/// assert!(safe_either(|| -> i32 { panic!("nope") }).is_left());
/// ```
pub fn safe_either<T, F>(function: F) -> Either<Failure, T>
where
    F: FnOnce() -> T,
{
    safe(function).to_either()
}

/// Like [`safe`], with `message` put in front of a captured failure's message.
///
/// # Examples
///
/// ```rust
/// use moliath::control::safe_with_message;
///
/// let outcome = safe_with_message("reading port: ", || "http".parse::<u16>().unwrap());
/// let failure = outcome.unwrap_failure_or_else(|_| unreachable!());
/// assert!(failure.message().starts_with("reading port: "));
/// ```
pub fn safe_with_message<T, F>(message: &str, function: F) -> Try<T>
where
    F: FnOnce() -> T,
{
    safe(function).with_context(message)
}

/// Puts a prefix in front of the message of a carried [`Failure`].
///
/// Success shapes pass through untouched. The prefix is prepended as is, so
/// it usually ends with a separator such as `": "`.
///
/// # Examples
///
/// ```rust
/// use moliath::control::{WithContext, safe_result};
///
/// let loaded = safe_result(|| -> u8 { panic!("file missing") }).with_context("config: ");
/// assert_eq!(loaded.unwrap_err().message(), "config: file missing");
/// ```
pub trait WithContext: Sized {
    /// Returns `self` with `prefix` added to the failure message, if any.
    #[must_use]
    fn with_context(self, prefix: &str) -> Self;
}

impl<T> WithContext for Try<T> {
    fn with_context(self, prefix: &str) -> Self {
        self.map_failure(|failure| failure.with_prefix(prefix))
    }
}

impl<T> WithContext for Result<T, Failure> {
    fn with_context(self, prefix: &str) -> Self {
        self.map_err(|failure| failure.with_prefix(prefix))
    }
}

impl<T> WithContext for Either<Failure, T> {
    fn with_context(self, prefix: &str) -> Self {
        self.map_left(|failure| failure.with_prefix(prefix))
    }
}

impl<T> Try<T> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Runs a fallible function at the `safe` boundary.
    ///
    /// An `Err` is captured with its display text; a panic is captured the
    /// same way [`safe`] does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::control::Try;
    /// use moliath::error::FailureKind;
    ///
    /// let outcome = Try::from_fallible(|| "x".parse::<i32>());
    /// let failure = outcome.unwrap_failure_or_else(|_| unreachable!());
    /// assert_eq!(failure.kind(), FailureKind::Error);
    /// ```
    pub fn from_fallible<E, F>(function: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: std::error::Error,
    {
        match safe(function) {
            Try::Success(Ok(value)) => Self::Success(value),
            Try::Success(Err(error)) => {
                let failure = Failure::from_error(&error);
                tracing::debug!(message = failure.message(), "captured error at safe boundary");
                Self::Failure(failure)
            }
            Try::Failure(failure) => Self::Failure(failure),
        }
    }

    /// Converts a `Result` whose error is already a [`Failure`].
    #[inline]
    pub fn from_result(result: Result<T, Failure>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(failure) => Self::Failure(failure),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Failure Side
    // =========================================================================

    /// Transforms the failure, leaving a success untouched.
    #[inline]
    pub fn map_failure<F>(self, function: F) -> Self
    where
        F: FnOnce(Failure) -> Failure,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(failure) => Self::Failure(function(failure)),
        }
    }

    /// Recovers from a failure with a function returning a new `Try`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::control::{Try, safe};
    ///
    /// let recovered = safe(|| -> i32 { panic!("cache miss") })
    ///     .bind_failure(|_| Try::Success(0));
    /// assert_eq!(recovered, Try::Success(0));
    /// ```
    #[inline]
    pub fn bind_failure<F>(self, function: F) -> Self
    where
        F: FnOnce(Failure) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(failure) => function(failure),
        }
    }

    /// Calls `function` with a reference to the success value.
    #[inline]
    #[must_use]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            function(value);
        }
        self
    }

    /// Calls `function` with a reference to the failure.
    #[inline]
    #[must_use]
    pub fn inspect_failure<F>(self, function: F) -> Self
    where
        F: FnOnce(&Failure),
    {
        if let Self::Failure(failure) = &self {
            function(failure);
        }
        self
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Eliminates the try by applying one of two functions.
    #[inline]
    pub fn fold<U, F, S>(self, on_failure: F, on_success: S) -> U
    where
        F: FnOnce(Failure) -> U,
        S: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(failure) => on_failure(failure),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with a [`ContractViolation`] message if this is a `Failure`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => ContractViolation {
                container: "Try",
                operation: "unwrap",
                shape: "Failure",
            }
            .raise(),
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value or computes one from the failure.
    #[inline]
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(Failure) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(failure) => fallback(failure),
        }
    }

    /// Returns the failure or `default`.
    #[inline]
    pub fn unwrap_failure_or(self, default: Failure) -> Failure {
        match self {
            Self::Success(_) => default,
            Self::Failure(failure) => failure,
        }
    }

    /// Returns the failure or builds one from the success value.
    #[inline]
    pub fn unwrap_failure_or_else<F>(self, fallback: F) -> Failure
    where
        F: FnOnce(T) -> Failure,
    {
        match self {
            Self::Success(value) => fallback(value),
            Self::Failure(failure) => failure,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into an [`Either`] with the failure on the left.
    #[inline]
    pub fn to_either(self) -> Either<Failure, T> {
        match self {
            Self::Success(value) => Either::Right(value),
            Self::Failure(failure) => Either::Left(failure),
        }
    }

    /// Converts into a `Result` with the failure as the error.
    #[inline]
    pub fn to_result(self) -> Result<T, Failure> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failure) => Err(failure),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Result<T, Failure>> for Try<T> {
    #[inline]
    fn from(result: Result<T, Failure>) -> Self {
        Self::from_result(result)
    }
}

impl<T> From<Try<T>> for Result<T, Failure> {
    #[inline]
    fn from(attempt: Try<T>) -> Self {
        attempt.to_result()
    }
}

impl<T> From<Try<T>> for Either<Failure, T> {
    #[inline]
    fn from(attempt: Try<T>) -> Self {
        attempt.to_either()
    }
}

// =============================================================================
// Computation Implementation
// =============================================================================

impl<T> TypeConstructor for Try<T> {
    type Inner = T;
    type WithType<B> = Try<B>;
}

impl<T> Computation for Try<T> {
    #[inline]
    fn map<B, F>(self, function: F) -> Try<B>
    where
        F: Fn(T) -> B + 'static,
        B: 'static,
    {
        match self {
            Self::Success(value) => Try::Success(function(value)),
            Self::Failure(failure) => Try::Failure(failure),
        }
    }

    #[inline]
    fn bind<B, F>(self, function: F) -> Try<B>
    where
        F: Fn(T) -> Try<B> + 'static,
        B: 'static,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(failure) => Try::Failure(failure),
        }
    }

    fn apply<B, G>(self, other: Try<G>) -> Try<B>
    where
        G: Fn(T) -> B + 'static,
        B: 'static,
    {
        match (self, other) {
            (Self::Failure(failure), _) | (Self::Success(_), Try::Failure(failure)) => {
                Try::Failure(failure)
            }
            (Self::Success(value), Try::Success(function)) => Try::Success(function(value)),
        }
    }

    fn apply2<A, B>(self, other: Try<A>) -> Try<B>
    where
        T: Fn(A) -> B,
        A: Clone + 'static,
        B: 'static,
    {
        match (self, other) {
            (Self::Failure(failure), _) | (Self::Success(_), Try::Failure(failure)) => {
                Try::Failure(failure)
            }
            (Self::Success(function), Try::Success(value)) => Try::Success(function(value)),
        }
    }
}

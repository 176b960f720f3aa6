//! Error types shared by every container.
//!
//! Two kinds of failure leave the library as values:
//!
//! - [`Failure`] is the payload of an error-shaped container produced at the
//!   `safe` boundary, where a panic or an error returned by outside code is
//!   captured and turned into data.
//! - [`ContractViolation`] describes a caller misusing a container, such as
//!   unwrapping a `Nothing`. It is never recovered: the library panics with its
//!   message at the point of misuse.
//!
//! # Examples
//!
//! ```rust
//! use moliath::error::ContractViolation;
//!
//! let violation = ContractViolation {
//!     container: "Maybe",
//!     operation: "unwrap",
//!     shape: "Nothing",
//! };
//! assert_eq!(
//!     violation.to_string(),
//!     "called `Maybe::unwrap()` on a `Nothing` value"
//! );
//! ```

use std::any::Any;

use thiserror::Error;

/// A caller contract violation: an operation was attempted on the wrong shape.
///
/// The message names the container, the attempted operation and the shape the
/// container was actually in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("called `{container}::{operation}()` on a `{shape}` value")]
pub struct ContractViolation {
    /// The container type, e.g. `"Maybe"`.
    pub container: &'static str,
    /// The attempted operation, e.g. `"unwrap"`.
    pub operation: &'static str,
    /// The shape the container was in, e.g. `"Nothing"`.
    pub shape: &'static str,
}

impl ContractViolation {
    /// Logs the violation and panics with its message.
    ///
    /// # Panics
    ///
    /// Always.
    #[track_caller]
    pub fn raise(self) -> ! {
        tracing::error!(
            container = self.container,
            operation = self.operation,
            shape = self.shape,
            "contract violation"
        );
        panic!("{self}")
    }
}

/// Where a captured [`Failure`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FailureKind {
    /// The wrapped function panicked.
    Panic,
    /// The wrapped function returned an error value.
    Error,
}

/// A failure captured at the `safe` boundary.
///
/// `Failure` is plain data: it compares by kind and message, clones cheaply and
/// can be carried through any number of `map`/`bind` steps.
///
/// # Examples
///
/// ```rust
/// use moliath::error::{Failure, FailureKind};
///
/// let failure = Failure::new(FailureKind::Error, "disk full");
/// assert_eq!(failure.message(), "disk full");
/// assert_eq!(failure.to_string(), "error: disk full");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{}: {message}", kind_label(.kind))]
pub struct Failure {
    kind: FailureKind,
    message: String,
}

const fn kind_label(kind: &FailureKind) -> &'static str {
    match kind {
        FailureKind::Panic => "panicked",
        FailureKind::Error => "error",
    }
}

impl Failure {
    /// Creates a failure of the given kind.
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Builds a failure from the payload returned by `catch_unwind`.
    ///
    /// `&str` and `String` payloads keep their text; anything else is reported
    /// as an opaque panic.
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "opaque panic payload".to_string());
        Self::new(FailureKind::Panic, message)
    }

    /// Builds a failure from an error value, keeping its display text.
    pub fn from_error<E>(error: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self::new(FailureKind::Error, error.to_string())
    }

    /// Returns where the failure came from.
    pub const fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Returns the captured message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if the failure was a captured panic.
    pub const fn is_panic(&self) -> bool {
        matches!(self.kind, FailureKind::Panic)
    }

    /// Returns the failure with `prefix` put in front of its message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::error::{Failure, FailureKind};
    ///
    /// let failure = Failure::new(FailureKind::Error, "disk full").with_prefix("saving: ");
    /// assert_eq!(failure.message(), "saving: disk full");
    /// assert_eq!(failure.kind(), FailureKind::Error);
    /// ```
    #[must_use]
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.message.insert_str(0, prefix);
        self
    }
}

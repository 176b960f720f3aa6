//! # moliath
//!
//! Composable computation contexts for Rust.
//!
//! ## Overview
//!
//! Every container in this crate speaks the same small protocol,
//! [`Computation`](typeclass::Computation): `map`, `bind`, `apply` and
//! `apply2`. Callers chain those operations to describe a computation over
//! values that may be absent, erroneous, deferred, or threaded through an
//! environment, a log or a state, and only at the end call a terminal
//! operation to get a concrete value back.
//!
//! - **Type Classes**: `TypeConstructor`, `Computation`, `Run`, `Semigroup`, `Monoid`
//! - **Control Structures**: `Maybe`, `Either`, `Try`, `ListMonad`, `Lazy`,
//!   the lazily evaluated `Sequence` and `Continuation`
//! - **Effect System**: `IO`, `Reader`, `Writer`, `State`
//! - **Function Composition**: `compose!`, `curry2!`, `curry3!`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Protocol traits and the monoid algebra
//! - `control`: Eager containers, `Lazy`, `Sequence`, `Continuation`
//! - `effect`: `IO`, `Reader`, `Writer`, `State`
//! - `compose`: Function composition macros
//! - `serde`: `Serialize`/`Deserialize` for the data-carrying containers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use moliath::prelude::*;
//!
//! let halves = Sequence::new(1..)
//!     .filter(|value: &u64| value % 2 == 0)
//!     .map(|value| value / 2)
//!     .take(3);
//! assert_eq!(halves.run(), vec![1, 2, 3]);
//!
//! let counter = State::get().bind(|count: i32| State::put(count + 1));
//! assert_eq!(counter.run(41), (42, ()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use moliath::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    pub use crate::error::{ContractViolation, Failure, FailureKind};
}

pub mod error;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "compose")]
pub mod compose;

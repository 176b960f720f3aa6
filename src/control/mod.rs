//! Control structures built on the computation protocol.
//!
//! - [`Maybe`]: An optional value (`Just` / `Nothing`)
//! - [`Either`]: A right-biased choice between two types
//! - [`Try`]: The outcome of code run behind the [`safe`] boundary
//! - [`WithContext`]: Prefixes the message of a carried failure
//! - [`ListMonad`]: An eager list with non-deterministic composition
//! - [`Sequence`]: A lazily evaluated, restartable sequence
//! - [`Lazy`]: A deferred pure computation
//! - [`Continuation`]: Continuation-passing style computations
//!
//! `Result` takes part in the protocol through the implementation in
//! [`typeclass`](crate::typeclass).
//!
//! # Examples
//!
//! ```rust
//! use moliath::control::{Maybe, Sequence};
//! use moliath::typeclass::Computation;
//!
//! let evens = Sequence::new(1..).filter(|value: &i32| value % 2 == 0).take(2);
//! assert_eq!(evens.run(), vec![2, 4]);
//!
//! let doubled = Maybe::Just(21).map(|value| value * 2);
//! assert_eq!(doubled, Maybe::Just(42));
//! ```

mod attempt;
mod continuation;
mod either;
mod lazy;
mod list;
mod maybe;
mod sequence;

pub use attempt::{Try, WithContext, safe, safe_either, safe_result, safe_with_message};
pub use continuation::{Callback, Continuation};
pub use either::Either;
pub use lazy::Lazy;
pub use list::ListMonad;
pub use maybe::Maybe;
pub use sequence::{Sequence, StepKind};

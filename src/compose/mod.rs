//! Function composition utilities.
//!
//! - [`compose!`]: Compose functions right to left
//! - [`curry2!`], [`curry3!`]: Turn a multi-argument function into a chain of
//!   single-argument closures
//! - [`identity`]: The unit of composition
//!
//! Composed and curried functions are ordinary `Fn` closures, so they can be
//! handed straight to `map`, `bind` and the other protocol operations.
//!
//! # Examples
//!
//! ```rust
//! use moliath::compose;
//! use moliath::control::Maybe;
//! use moliath::typeclass::Computation;
//!
//! fn add_one(value: i32) -> i32 { value + 1 }
//! fn double(value: i32) -> i32 { value * 2 }
//!
//! let doubled_then_incremented = Maybe::Just(5).map(compose!(add_one, double));
//! assert_eq!(doubled_then_incremented, Maybe::Just(11));
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`

mod compose_macro;
mod curry_macro;

pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;

/// Returns the value unchanged.
///
/// # Examples
///
/// ```rust
/// use moliath::compose;
/// use moliath::compose::identity;
///
/// let double = |value: i32| value * 2;
/// assert_eq!(compose!(identity, double)(5), double(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

//! Type class traits for composable computations.
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation through GATs
//! - [`Computation`]: `map`, `bind`, `apply`, `apply2` for every container
//! - [`Run`]: The terminal operation of deferred containers
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element, used for Writer logs
//! - [`Sum`], [`Product`]: Numeric wrappers selecting a monoid
//!
//! # Examples
//!
//! ```rust
//! use moliath::typeclass::{Monoid, Semigroup};
//!
//! let log = String::empty()
//!     .combine(String::from("a"))
//!     .combine(String::from("b"));
//! assert_eq!(log, "ab");
//! ```

mod computation;
mod higher;
mod monoid;
mod semigroup;
mod wrappers;

pub use computation::{Computation, Run};
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Product, Sum};

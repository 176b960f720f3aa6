//! Semigroup type class - types with an associative binary operation.
//!
//! A type `T` is a semigroup if there exists a function
//! `combine: (T, T) -> T` that is associative. Writer logs are combined with
//! this operation when two Writer computations are chained.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use moliath::typeclass::Semigroup;
//!
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//!
//! assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{Product, Sum};

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::typeclass::Semigroup;
    ///
    /// let result = String::from("a").combine(String::from("b"));
    /// assert_eq!(result, "ab");
    /// ```
    #[must_use]
    fn combine(self, other: Self) -> Self;
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `Some` values are combined, `None` is skipped.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

// =============================================================================
// Numeric Wrapper Implementations
// =============================================================================

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

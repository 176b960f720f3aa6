//! Numeric newtype wrappers that pick a monoid for a number.
//!
//! A number has more than one lawful monoid: addition with `0` and
//! multiplication with `1`. These wrappers select one, so numbers can be used
//! as Writer logs (for example to count steps).
//!
//! # Examples
//!
//! ```rust
//! use moliath::typeclass::{Monoid, Product, Semigroup, Sum};
//!
//! assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
//! assert_eq!(Product(2).combine(Product(5)), Product(10));
//! assert_eq!(Product::<i32>::empty(), Product(1));
//! ```

/// A wrapper selecting the additive monoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Sum<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}

/// A wrapper selecting the multiplicative monoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Product<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}

//! Monoid type class - semigroups with an identity element.
//!
//! A monoid is a [`Semigroup`] with an identity element `empty` such that for
//! all `a`:
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```
//!
//! Writer requires its log type to be a monoid: `Writer::pure` starts from
//! `empty`, and chaining combines logs with `combine`.
//!
//! # Examples
//!
//! ```rust
//! use moliath::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(String::empty(), "");
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//! assert_eq!(String::combine_all(vec![String::from("a"), String::from("b")]), "ab");
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Product, Sum};

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// ```text
/// Self::empty().combine(a) == a
/// a.combine(Self::empty()) == a
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::typeclass::Monoid;
    ///
    /// assert_eq!(String::empty(), "");
    /// assert!(Vec::<i32>::empty().is_empty());
    /// ```
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::typeclass::Monoid;
    ///
    /// let empty: Vec<String> = vec![];
    /// assert_eq!(String::combine_all(empty), String::empty());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! product_monoid {
    ($($numeric:ty),* $(,)?) => {
        $(
            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self(1)
                }
            }
        )*
    };
}

product_monoid!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_identity_laws() {
        let value = String::from("log");
        assert_eq!(String::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(String::empty()), value);
    }

    #[rstest]
    fn vec_identity_laws() {
        let value = vec![1, 2, 3];
        assert_eq!(Vec::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(Vec::empty()), value);
    }

    #[rstest]
    fn sum_empty_is_zero() {
        assert_eq!(Sum::<i32>::empty(), Sum(0));
        assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2)]), Sum(3));
    }

    #[rstest]
    fn product_empty_is_one() {
        assert_eq!(Product::<u64>::empty(), Product(1));
        assert_eq!(Product::combine_all(vec![Product(2), Product(4)]), Product(8));
    }

    #[rstest]
    fn option_empty_is_none() {
        assert_eq!(Option::<String>::empty(), None);
    }

    #[rstest]
    fn pair_empty_is_pair_of_empties() {
        assert_eq!(<(String, Sum<i32>)>::empty(), (String::new(), Sum(0)));
    }
}

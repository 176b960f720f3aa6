#![cfg(feature = "typeclass")]
//! Property-based tests for the monoids used as Writer logs.
//!
//! ## Semigroup Law
//! - Associativity: (a.combine(b)).combine(c) == a.combine(b.combine(c))
//!
//! ## Monoid Laws
//! - Left Identity: empty().combine(a) == a
//! - Right Identity: a.combine(empty()) == a

use moliath::typeclass::{Monoid, Product, Semigroup, Sum};
use proptest::prelude::*;

macro_rules! monoid_laws {
    ($module:ident, $type:ty, $strategy:expr) => {
        mod $module {
            use super::*;

            proptest! {
                #[test]
                fn prop_left_identity(value in $strategy) {
                    prop_assert_eq!(<$type>::empty().combine(value.clone()), value);
                }

                #[test]
                fn prop_right_identity(value in $strategy) {
                    prop_assert_eq!(value.clone().combine(<$type>::empty()), value);
                }

                #[test]
                fn prop_associativity(first in $strategy, second in $strategy, third in $strategy) {
                    let left = first.clone().combine(second.clone()).combine(third.clone());
                    let right = first.combine(second.combine(third));
                    prop_assert_eq!(left, right);
                }
            }
        }
    };
}

monoid_laws!(string_monoid, String, "[a-z]{0,8}");
monoid_laws!(vec_monoid, Vec<u8>, prop::collection::vec(any::<u8>(), 0..8));
monoid_laws!(sum_monoid, Sum<i64>, (-1_000_000i64..1_000_000).prop_map(Sum));
monoid_laws!(product_monoid, Product<i64>, (-100i64..100).prop_map(Product));
monoid_laws!(
    pair_monoid,
    (String, Sum<i32>),
    ("[a-z]{0,4}", (-1000i32..1000).prop_map(Sum))
);

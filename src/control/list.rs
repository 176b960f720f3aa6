//! ListMonad - an eager list with the computation protocol.
//!
//! `ListMonad<T>` wraps a `Vec<T>` and models a non-deterministic
//! computation: every protocol operation runs for every element.
//! `bind` concatenates the lists produced for each element in order, and the
//! applicative operations combine every function with every value, functions
//! outer and values inner.
//!
//! For chains over large or unbounded inputs use
//! [`Sequence`](crate::control::Sequence), which evaluates lazily and
//! converts to a `ListMonad` with `to_list`.
//!
//! # Examples
//!
//! ```rust
//! use moliath::control::ListMonad;
//! use moliath::typeclass::Computation;
//!
//! let pairs = ListMonad::from(vec![1, 2])
//!     .bind(|number| ListMonad::from(vec!['a', 'b']).map(move |letter| (number, letter)));
//! assert_eq!(pairs.into_vec(), vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
//! ```

use crate::typeclass::{Computation, TypeConstructor};

/// An eager, `Vec`-backed list.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ListMonad<T> {
    elements: Vec<T>,
}

impl<T> ListMonad<T> {
    /// Creates an empty list.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates a list holding a single value.
    #[inline]
    pub fn pure(value: T) -> Self {
        Self {
            elements: vec![value],
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the list, returning the backing vector.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

// =============================================================================
// Conversion and Iteration
// =============================================================================

impl<T> From<Vec<T>> for ListMonad<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T> From<ListMonad<T>> for Vec<T> {
    #[inline]
    fn from(list: ListMonad<T>) -> Self {
        list.elements
    }
}

impl<T> FromIterator<T> for ListMonad<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self {
            elements: iterator.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for ListMonad<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ListMonad<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

// =============================================================================
// Computation Implementation
// =============================================================================

impl<T> TypeConstructor for ListMonad<T> {
    type Inner = T;
    type WithType<B> = ListMonad<B>;
}

impl<T> Computation for ListMonad<T> {
    fn map<B, F>(self, function: F) -> ListMonad<B>
    where
        F: Fn(T) -> B + 'static,
        B: 'static,
    {
        self.elements.into_iter().map(function).collect()
    }

    fn bind<B, F>(self, function: F) -> ListMonad<B>
    where
        F: Fn(T) -> ListMonad<B> + 'static,
        B: 'static,
    {
        self.elements.into_iter().flat_map(function).collect()
    }

    fn apply<B, G>(self, other: ListMonad<G>) -> ListMonad<B>
    where
        G: Fn(T) -> B + 'static,
        T: Clone,
        B: 'static,
    {
        let mut elements = Vec::with_capacity(self.len() * other.len());
        for function in &other.elements {
            elements.extend(self.elements.iter().cloned().map(function));
        }
        ListMonad { elements }
    }

    fn apply2<A, B>(self, other: ListMonad<A>) -> ListMonad<B>
    where
        T: Fn(A) -> B,
        A: Clone + 'static,
        B: 'static,
    {
        let mut elements = Vec::with_capacity(self.len() * other.len());
        for function in &self.elements {
            elements.extend(other.elements.iter().cloned().map(function));
        }
        ListMonad { elements }
    }
}

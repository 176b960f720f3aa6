//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] recovers that ability: every container names the type
//! it currently holds (`Inner`) and how to rebuild itself around another type
//! (`WithType<B>`). [`Computation`](super::Computation) is written entirely in
//! these terms, which is what lets `map` turn a `Reader<Env, A>` into a
//! `Reader<Env, B>` while keeping `Env` fixed.
//!
//! # Example
//!
//! ```rust
//! use moliath::typeclass::TypeConstructor;
//!
//! fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
//! assert_inner::<Result<i32, String>>();
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

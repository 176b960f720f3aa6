//! Writer - computations that accumulate a log.
//!
//! A `Writer<A, W>` is a pair of a value `A` and a log `W`. The log type must
//! be a [`Monoid`]: `pure` starts from the empty log, and chaining with `bind`
//! combines the logs of both steps in order. The protocol operations act on
//! the value; the log only ever grows by combination unless `censor` or `pass`
//! rewrites it.
//!
//! # Laws
//!
//! Besides the functor and monad laws of the protocol:
//!
//! - Tell Monoid Law: `w.tell(a).tell(b) == w.tell(a.combine(b))`
//! - Listen Law: `w.listen()` holds `(value, log)` and keeps the log unchanged
//! - Censor Definition: `w.censor(f) == w.map(|a| (a, f)).pass()`
//!
//! # Examples
//!
//! ```rust
//! use moliath::effect::Writer;
//! use moliath::typeclass::Computation;
//!
//! fn half(value: i32) -> Writer<i32, Vec<String>> {
//!     Writer::new(value / 2, vec![format!("halved {value}")])
//! }
//!
//! let (value, log) = half(40).bind(half).run();
//! assert_eq!(value, 10);
//! assert_eq!(log, vec!["halved 40", "halved 20"]);
//! ```

use crate::typeclass::{Computation, Monoid, Run, Semigroup, TypeConstructor};

/// A value paired with an accumulated log.
///
/// # Type Parameters
///
/// - `A`: The value type
/// - `W`: The log type (a [`Monoid`])
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Writer<A, W> {
    value: A,
    log: W,
}

impl<A, W> Writer<A, W> {
    /// Creates a writer from a value and a log.
    pub const fn new(value: A, log: W) -> Self {
        Self { value, log }
    }

    /// Creates a writer holding `value` and an empty log.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::effect::Writer;
    ///
    /// let writer: Writer<i32, String> = Writer::pure(42);
    /// assert_eq!(writer.run(), (42, String::new()));
    /// ```
    pub fn pure(value: A) -> Self
    where
        W: Monoid,
    {
        Self::new(value, W::empty())
    }

    /// Returns `(value, log)` without consuming the writer.
    pub fn run(&self) -> (A, W)
    where
        A: Clone,
        W: Clone,
    {
        (self.value.clone(), self.log.clone())
    }

    /// Consumes the writer, returning `(value, log)`.
    pub fn into_parts(self) -> (A, W) {
        (self.value, self.log)
    }

    /// Returns a reference to the value.
    pub const fn value(&self) -> &A {
        &self.value
    }

    /// Returns a reference to the log.
    pub const fn log(&self) -> &W {
        &self.log
    }

    /// Appends `extra` to the log.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::effect::Writer;
    ///
    /// let writer = Writer::new(1, "a".to_string()).tell("b".to_string());
    /// assert_eq!(writer.run(), (1, "ab".to_string()));
    /// ```
    #[must_use]
    pub fn tell(self, extra: W) -> Self
    where
        W: Semigroup,
    {
        Self::new(self.value, self.log.combine(extra))
    }

    /// Pairs the value with a copy of the log, keeping the log unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::effect::Writer;
    ///
    /// let listened = Writer::new(42, vec!["log"]).listen();
    /// assert_eq!(listened.run(), ((42, vec!["log"]), vec!["log"]));
    /// ```
    pub fn listen(self) -> Writer<(A, W), W>
    where
        W: Clone,
    {
        let log = self.log.clone();
        Writer::new((self.value, self.log), log)
    }

    /// Rewrites the log with `modifier`.
    #[must_use]
    pub fn censor<F>(self, modifier: F) -> Self
    where
        F: FnOnce(W) -> W,
    {
        Self::new(self.value, modifier(self.log))
    }
}

impl<W> Writer<(), W> {
    /// Creates a writer that only contributes `log`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::effect::Writer;
    /// use moliath::typeclass::Computation;
    ///
    /// let logged = Writer::tell_only(vec!["start"]).then(Writer::new(7, vec!["done"]));
    /// assert_eq!(logged.run(), (7, vec!["start", "done"]));
    /// ```
    pub const fn tell_only(log: W) -> Self {
        Self::new((), log)
    }
}

impl<A, F, W> Writer<(A, F), W>
where
    F: FnOnce(W) -> W,
{
    /// Applies the function carried next to the value to the log.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::effect::Writer;
    ///
    /// let shout = |log: String| log.to_uppercase();
    /// let writer = Writer::new((42, shout), "hello".to_string());
    /// assert_eq!(writer.pass().run(), (42, "HELLO".to_string()));
    /// ```
    pub fn pass(self) -> Writer<A, W> {
        let (value, modifier) = self.value;
        Writer::new(value, modifier(self.log))
    }
}

impl<A: Clone, W: Clone> Run for Writer<A, W> {
    type Input = ();
    type Output = (A, W);

    fn run_with(&self, _: ()) -> (A, W) {
        self.run()
    }
}

// =============================================================================
// Computation Implementation
// =============================================================================

impl<A, W> TypeConstructor for Writer<A, W> {
    type Inner = A;
    type WithType<B> = Writer<B, W>;
}

impl<A, W: Monoid> Computation for Writer<A, W> {
    fn map<B, F>(self, function: F) -> Writer<B, W>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        Writer::new(function(self.value), self.log)
    }

    fn bind<B, F>(self, function: F) -> Writer<B, W>
    where
        F: Fn(A) -> Writer<B, W> + 'static,
        B: 'static,
    {
        let next = function(self.value);
        Writer::new(next.value, self.log.combine(next.log))
    }

    fn apply<B, G>(self, other: Writer<G, W>) -> Writer<B, W>
    where
        G: Fn(A) -> B + 'static,
        B: 'static,
    {
        // Receiver's log first, in both `apply` and `apply2`.
        Writer::new((other.value)(self.value), self.log.combine(other.log))
    }

    fn apply2<V, B>(self, other: Writer<V, W>) -> Writer<B, W>
    where
        A: Fn(V) -> B,
        V: Clone + 'static,
        B: 'static,
    {
        Writer::new((self.value)(other.value), self.log.combine(other.log))
    }
}

//! Reader - computations that read a shared environment.
//!
//! A `Reader<R, A>` wraps a function `R -> A`. Composing readers threads the
//! same environment to every step without passing it around by hand, which
//! makes Reader a lightweight way to inject configuration or dependencies.
//!
//! # Laws
//!
//! Besides the functor and monad laws of the protocol:
//!
//! - Ask Retrieval: `Reader::ask().run(r) == r`
//! - Local Identity: `m.local(|r| r) == m`
//! - Local Composition: `m.local(g).local(f) == m.local(|r| g(f(r)))`
//!
//! # Examples
//!
//! ```rust
//! use moliath::effect::Reader;
//! use moliath::typeclass::Computation;
//!
//! #[derive(Clone)]
//! struct Config {
//!     host: String,
//!     port: u16,
//! }
//!
//! fn address() -> Reader<Config, String> {
//!     Reader::asks(|config: Config| config.host)
//!         .bind(|host| Reader::asks(move |config: Config| format!("{host}:{}", config.port)))
//! }
//!
//! let config = Config { host: "localhost".into(), port: 8080 };
//! assert_eq!(address().run(config), "localhost:8080");
//! ```

use std::fmt;
use std::rc::Rc;

use crate::typeclass::{Computation, Run, TypeConstructor};

/// A computation reading an environment of type `R` to produce an `A`.
///
/// # Type Parameters
///
/// - `R`: The environment type (read-only context)
/// - `A`: The result type
pub struct Reader<R, A> {
    run_function: Rc<dyn Fn(R) -> A>,
}

impl<R: 'static, A: 'static> Reader<R, A> {
    /// Creates a reader from a function of the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment + 1);
    /// assert_eq!(reader.run(41), 42);
    /// assert_eq!(reader.run(0), 1);
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the reader against `environment`.
    pub fn run(&self, environment: R) -> A {
        (self.run_function)(environment)
    }

    /// Creates a reader that ignores the environment and returns `value`.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Creates a reader that projects a value out of the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::effect::Reader;
    ///
    /// let length: Reader<String, usize> = Reader::asks(|text: String| text.len());
    /// assert_eq!(length.run("four".to_string()), 4);
    /// ```
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Returns a reader that runs this one with a modified environment.
    ///
    /// The original reader is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::effect::Reader;
    ///
    /// let doubled: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// let shifted = doubled.clone().local(|environment| environment + 10);
    /// assert_eq!(shifted.run(5), 30);
    /// assert_eq!(doubled.run(5), 10);
    /// ```
    #[must_use]
    pub fn local<F>(self, modifier: F) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        let computation = self.run_function;
        Self::new(move |environment| computation(modifier(environment)))
    }
}

impl<Env: 'static> Reader<Env, Env> {
    /// Creates a reader returning the environment itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::ask();
    /// assert_eq!(reader.run(42), 42);
    /// ```
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

// =============================================================================
// Clone and Display
// =============================================================================

impl<R, A> Clone for Reader<R, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<R, A> fmt::Display for Reader<R, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<Reader>")
    }
}

impl<R, A> fmt::Debug for Reader<R, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Reader").finish_non_exhaustive()
    }
}

impl<R: 'static, A: 'static> Run for Reader<R, A> {
    type Input = R;
    type Output = A;

    fn run_with(&self, environment: R) -> A {
        self.run(environment)
    }
}

// =============================================================================
// Computation Implementation
// =============================================================================

impl<R, A> TypeConstructor for Reader<R, A> {
    type Inner = A;
    type WithType<B> = Reader<R, B>;
}

// Chaining hands the environment to both sides.
impl<R: Clone + 'static, A: 'static> Computation for Reader<R, A> {
    fn map<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        Reader::new(move |environment| function(original_function(environment)))
    }

    fn bind<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        Reader::new(move |environment: R| {
            let value = original_function(environment.clone());
            function(value).run(environment)
        })
    }

    fn apply<B, G>(self, other: Reader<R, G>) -> Reader<R, B>
    where
        G: Fn(A) -> B + 'static,
        B: 'static,
    {
        Reader::new(move |environment: R| {
            let function = other.run(environment.clone());
            function(self.run(environment))
        })
    }

    fn apply2<V, B>(self, other: Reader<R, V>) -> Reader<R, B>
    where
        A: Fn(V) -> B,
        V: Clone + 'static,
        B: 'static,
    {
        Reader::new(move |environment: R| {
            let function = self.run(environment.clone());
            function(other.run(environment))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn display_reader() {
        let reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
        assert_eq!(format!("{reader}"), "<Reader>");
    }

    #[rstest]
    fn pure_ignores_environment() {
        let reader: Reader<i32, &str> = Reader::pure("constant");
        assert_eq!(reader.run(0), "constant");
        assert_eq!(reader.run(100), "constant");
    }

    #[rstest]
    fn ask_returns_environment() {
        assert_eq!(Reader::<String, String>::ask().run("env".into()), "env");
    }

    #[rstest]
    fn bind_sees_same_environment() {
        let reader: Reader<i32, i32> = Reader::ask().bind(|value: i32| {
            Reader::new(move |environment: i32| value + environment)
        });
        assert_eq!(reader.run(10), 20);
    }

    #[rstest]
    fn local_changes_environment_for_inner_only() {
        let reader = Reader::ask()
            .local(|environment: i32| environment * 100)
            .bind(|scaled| Reader::new(move |environment: i32| (scaled, environment)));
        assert_eq!(reader.run(2), (200, 2));
    }

    #[rstest]
    fn apply_runs_both_with_environment() {
        let function: Reader<i32, Box<dyn Fn(i32) -> i32>> =
            Reader::new(|environment| Box::new(move |value: i32| value * environment) as Box<dyn Fn(i32) -> i32>);
        let value: Reader<i32, i32> = Reader::new(|environment| environment + 1);
        assert_eq!(value.apply(function).run(6), 42);
    }

    #[rstest]
    fn apply2_runs_both_with_environment() {
        let function: Reader<i32, Box<dyn Fn(i32) -> i32>> =
            Reader::new(|environment| Box::new(move |value: i32| value - environment) as Box<dyn Fn(i32) -> i32>);
        assert_eq!(function.apply2(Reader::ask()).run(5), 0);
    }

    #[rstest]
    fn run_with_matches_run() {
        let reader: Reader<i32, i32> = Reader::new(|environment| environment * 3);
        assert_eq!(reader.run_with(3), reader.run(3));
    }
}

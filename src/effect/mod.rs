//! Effectful computation contexts.
//!
//! - [`IO`]: A deferred, re-runnable side effect
//! - [`Reader`]: A computation reading a shared environment
//! - [`Writer`]: A value paired with an accumulated log
//! - [`State`]: A computation threading a state value
//!
//! All four take part in the [`Computation`](crate::typeclass::Computation)
//! protocol. The deferred ones (`IO`, `Reader`, `State`) do no work until
//! their `run` is called and can be run any number of times.
//!
//! # Examples
//!
//! ```rust
//! use moliath::effect::{IO, Reader, State, Writer};
//! use moliath::typeclass::Computation;
//!
//! let io = IO::pure(10).map(|value| value * 2).bind(|value| IO::pure(value + 1));
//! assert_eq!(io.run(), 21);
//!
//! let reader: Reader<i32, i32> = Reader::ask().map(|environment: i32| environment * 2);
//! assert_eq!(reader.run(21), 42);
//!
//! let writer = Writer::new(1, vec!["one"]).bind(|value| Writer::new(value + 1, vec!["two"]));
//! assert_eq!(writer.run(), (2, vec!["one", "two"]));
//!
//! let state = State::modify(|count: i32| count + 1).then(State::get());
//! assert_eq!(state.run(0), (1, 1));
//! ```

mod io;
mod reader;
mod state;
mod writer;

pub use io::IO;
pub use reader::Reader;
pub use state::State;
pub use writer::Writer;

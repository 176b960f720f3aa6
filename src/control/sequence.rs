//! Lazily evaluated sequences.
//!
//! A [`Sequence<T>`] is a source of elements plus an ordered list of pending
//! steps (`map`, `filter`, `take`, `bind`). Building a chain only records
//! steps; nothing is evaluated until a terminal operation (`run`,
//! `to_list`, `first`, `count`) starts a pass.
//!
//! # Evaluation
//!
//! A pass pulls source elements one at a time, left to right, and pushes each
//! element through the steps in declaration order before the next element is
//! pulled. No intermediate collection is built between steps.
//!
//! - `take(n)` stops the pass once `n` elements went through it: the source
//!   is not pulled again. `take(0)` yields nothing without touching the source
//!   or any step function.
//! - `bind(f)` replaces each element with the sub-sequence `f(element)` and
//!   drains it before the next outer element is pulled. A downstream `take`
//!   that is satisfied stops the current sub-sequence as well.
//!
//! The source is re-created for every pass, so a sequence can be run any
//! number of times and always yields the same elements for a deterministic
//! source and steps.
//!
//! # Examples
//!
//! ```rust
//! use moliath::control::Sequence;
//! use moliath::typeclass::Computation;
//!
//! let squares = Sequence::new(1..)
//!     .map(|value: u64| value * value)
//!     .filter(|square| square % 2 == 1)
//!     .take(3);
//!
//! assert_eq!(squares.run(), vec![1, 9, 25]);
//! assert_eq!(squares.run(), vec![1, 9, 25]);
//! ```

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use smallvec::{SmallVec, smallvec};

use crate::control::ListMonad;
use crate::typeclass::{Computation, Run, TypeConstructor};

type Erased = Box<dyn Any>;
type Source = Rc<dyn Fn() -> Box<dyn Iterator<Item = Erased>>>;

/// A pending step of a [`Sequence`], as reported by [`Sequence::steps`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// An element-wise transformation.
    Map,
    /// A predicate dropping elements.
    Filter,
    /// A limit on the number of elements passing this point.
    Take(usize),
    /// An element-to-sub-sequence expansion.
    Bind,
}

#[derive(Clone)]
enum Step {
    Map(Rc<dyn Fn(Erased) -> Erased>),
    Filter(Rc<dyn Fn(&dyn Any) -> bool>),
    Take(usize),
    Bind(Rc<dyn Fn(Erased) -> Pipeline>),
}

impl Step {
    const fn kind(&self) -> StepKind {
        match self {
            Self::Map(_) => StepKind::Map,
            Self::Filter(_) => StepKind::Filter,
            Self::Take(limit) => StepKind::Take(*limit),
            Self::Bind(_) => StepKind::Bind,
        }
    }
}

/// What a sink wants after receiving an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Halt,
}

/// What a push through the steps means for the rest of the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signal {
    Continue,
    /// A `take` reached its limit.
    Exhausted,
    /// The sink asked to stop.
    Halt,
}

/// The type-erased source and step list behind a [`Sequence`].
#[derive(Clone)]
struct Pipeline {
    source: Source,
    steps: SmallVec<[Step; 4]>,
}

impl Pipeline {
    /// Runs one pass, handing every surviving element to `sink`.
    ///
    /// Returns the number of source elements pulled.
    fn drive(&self, sink: &mut dyn FnMut(Erased) -> Flow) -> usize {
        if self.steps.iter().any(|step| matches!(step, Step::Take(0))) {
            return 0;
        }

        let mut taken: SmallVec<[usize; 4]> = smallvec![0; self.steps.len()];
        let mut pulled = 0;
        for value in (self.source)() {
            pulled += 1;
            if self.push(value, 0, &mut taken, sink) != Signal::Continue {
                break;
            }
        }
        pulled
    }

    fn push(
        &self,
        value: Erased,
        index: usize,
        taken: &mut [usize],
        sink: &mut dyn FnMut(Erased) -> Flow,
    ) -> Signal {
        let Some(step) = self.steps.get(index) else {
            return match sink(value) {
                Flow::Continue => Signal::Continue,
                Flow::Halt => Signal::Halt,
            };
        };

        match step {
            Step::Map(function) => self.push(function(value), index + 1, taken, sink),
            Step::Filter(predicate) => {
                if predicate(&*value) {
                    self.push(value, index + 1, taken, sink)
                } else {
                    Signal::Continue
                }
            }
            Step::Take(limit) => {
                taken[index] += 1;
                let signal = self.push(value, index + 1, taken, sink);
                if signal == Signal::Continue && taken[index] >= *limit {
                    Signal::Exhausted
                } else {
                    signal
                }
            }
            Step::Bind(function) => {
                let inner = function(value);
                let mut outcome = Signal::Continue;
                let mut forward = |element: Erased| match self.push(element, index + 1, taken, sink) {
                    Signal::Continue => Flow::Continue,
                    signal => {
                        outcome = signal;
                        Flow::Halt
                    }
                };
                // The inner pass ending on its own `take` is not a signal for this one.
                inner.drive(&mut forward);
                outcome
            }
        }
    }
}

fn downcast<T: 'static>(value: Erased) -> T {
    match value.downcast::<T>() {
        Ok(value) => *value,
        Err(_) => unreachable!("sequence step received an element of an unexpected type"),
    }
}

/// A lazily evaluated, restartable sequence.
///
/// `Sequence` shares its source and step functions through [`Rc`]: cloning is
/// cheap, and the type is neither `Send` nor `Sync`.
pub struct Sequence<T> {
    pipeline: Pipeline,
    marker: PhantomData<fn() -> T>,
}

impl<T: 'static> Sequence<T> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Creates a sequence over a cloneable source.
    ///
    /// The source is cloned at the start of every pass.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::control::Sequence;
    ///
    /// assert_eq!(Sequence::new(vec![1, 2, 3]).run(), vec![1, 2, 3]);
    /// assert_eq!(Sequence::new(0..).take(2).run(), vec![0, 1]);
    /// ```
    pub fn new<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T> + Clone + 'static,
        I::IntoIter: 'static,
    {
        Self::from_fn(move || source.clone())
    }

    /// Creates a sequence whose source is produced by `factory` for every pass.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::control::Sequence;
    ///
    /// let countdown = Sequence::from_fn(|| (1..=3).rev());
    /// assert_eq!(countdown.run(), vec![3, 2, 1]);
    /// ```
    pub fn from_fn<F, I>(factory: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        let source: Source = Rc::new(move || -> Box<dyn Iterator<Item = Erased>> {
            Box::new(factory().into_iter().map(|value| Box::new(value) as Erased))
        });
        Self {
            pipeline: Pipeline {
                source,
                steps: SmallVec::new(),
            },
            marker: PhantomData,
        }
    }

    /// Creates a sequence with no elements.
    pub fn empty() -> Self {
        Self::from_fn(std::iter::empty)
    }

    /// Creates a sequence holding a single value.
    pub fn pure(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(std::iter::once(value))
    }

    // =========================================================================
    // Pending Steps
    // =========================================================================

    /// Keeps the elements satisfying `predicate`.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.with_step(Step::Filter(Rc::new(move |value: &dyn Any| {
            match value.downcast_ref::<T>() {
                Some(value) => predicate(value),
                None => unreachable!("sequence filter received an element of an unexpected type"),
            }
        })))
    }

    /// Keeps at most the first `count` elements reaching this step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::control::Sequence;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let pulled = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&pulled);
    /// let naturals = Sequence::from_fn(move || {
    ///     let counter = Rc::clone(&counter);
    ///     (0..).inspect(move |_| counter.set(counter.get() + 1))
    /// });
    ///
    /// assert_eq!(naturals.take(3).run(), vec![0, 1, 2]);
    /// assert_eq!(pulled.get(), 3);
    /// ```
    #[must_use]
    pub fn take(self, count: usize) -> Self {
        self.with_step(Step::Take(count))
    }

    /// Returns the pending steps in declaration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::control::{Sequence, StepKind};
    /// use moliath::typeclass::Computation;
    ///
    /// let sequence = Sequence::new(0..10).map(|value| value + 1).take(2);
    /// assert_eq!(sequence.steps(), vec![StepKind::Map, StepKind::Take(2)]);
    /// ```
    pub fn steps(&self) -> Vec<StepKind> {
        self.pipeline.steps.iter().map(Step::kind).collect()
    }

    fn with_step<B>(self, step: Step) -> Sequence<B> {
        let mut pipeline = self.pipeline;
        pipeline.steps.push(step);
        Sequence {
            pipeline,
            marker: PhantomData,
        }
    }

    // =========================================================================
    // Terminal Operations
    // =========================================================================

    fn realize<S>(&self, mut sink: S)
    where
        S: FnMut(T) -> Flow,
    {
        let mut emitted = 0_usize;
        let mut collect = |value: Erased| {
            emitted += 1;
            sink(downcast::<T>(value))
        };
        let pulled = self.pipeline.drive(&mut collect);
        tracing::trace!(
            steps = self.pipeline.steps.len(),
            pulled,
            emitted,
            "sequence pass finished"
        );
    }

    /// Evaluates the sequence, collecting every element.
    pub fn run(&self) -> Vec<T> {
        let mut elements = Vec::new();
        self.realize(|value| {
            elements.push(value);
            Flow::Continue
        });
        elements
    }

    /// Evaluates the sequence into a [`ListMonad`].
    pub fn to_list(&self) -> ListMonad<T> {
        ListMonad::from(self.run())
    }

    /// Evaluates the sequence up to its first element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moliath::control::Sequence;
    ///
    /// let first_even = Sequence::new(1..).filter(|value: &u32| value % 2 == 0).first();
    /// assert_eq!(first_even, Some(2));
    /// ```
    pub fn first(&self) -> Option<T> {
        let mut first = None;
        self.realize(|value| {
            first = Some(value);
            Flow::Halt
        });
        first
    }

    /// Evaluates the sequence, counting its elements.
    pub fn count(&self) -> usize {
        let mut count = 0;
        self.realize(|_| {
            count += 1;
            Flow::Continue
        });
        count
    }
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            pipeline: self.pipeline.clone(),
            marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let steps: Vec<StepKind> = self.pipeline.steps.iter().map(Step::kind).collect();
        formatter
            .debug_struct("Sequence")
            .field("steps", &steps)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Run for Sequence<T> {
    type Input = ();
    type Output = Vec<T>;

    fn run_with(&self, _: ()) -> Vec<T> {
        self.run()
    }
}

// =============================================================================
// Computation Implementation
// =============================================================================

impl<T> TypeConstructor for Sequence<T> {
    type Inner = T;
    type WithType<B> = Sequence<B>;
}

impl<T: 'static> Computation for Sequence<T> {
    fn map<B, F>(self, function: F) -> Sequence<B>
    where
        F: Fn(T) -> B + 'static,
        B: 'static,
    {
        self.with_step(Step::Map(Rc::new(move |value: Erased| -> Erased {
            Box::new(function(downcast::<T>(value)))
        })))
    }

    fn bind<B, F>(self, function: F) -> Sequence<B>
    where
        F: Fn(T) -> Sequence<B> + 'static,
        B: 'static,
    {
        self.with_step(Step::Bind(Rc::new(move |value: Erased| -> Pipeline {
            function(downcast::<T>(value)).pipeline
        })))
    }

    fn apply<B, G>(self, other: Sequence<G>) -> Sequence<B>
    where
        G: Fn(T) -> B + 'static,
        B: 'static,
    {
        other.bind(move |function| self.clone().map(function))
    }

    fn apply2<A, B>(self, other: Sequence<A>) -> Sequence<B>
    where
        T: Fn(A) -> B,
        A: Clone + 'static,
        B: 'static,
    {
        self.bind(move |function| other.clone().map(move |value| function(value)))
    }
}

//! The deferred chain.
//!
//! A [`Lazy<T>`] holds an initial value and an ordered list of pending transformations.
//! Nothing runs until the chain is forced, either all at once with [`Lazy::value`] or
//! one step at a time with [`Lazy::stepwise`]. A chain can be forced once; every later
//! attempt fails with [`LazyError::AlreadyConsumed`].
//!
//! # Examples
//!
//! ```rust
//! use lazy_chain::prelude::*;
//!
//! let mut chain = Lazy::new(vec![1, 2, 3])
//!     .pipe(|v: Vec<i32>| v.into_iter().map(|x| 2 * x).collect::<Vec<_>>())
//!     .pipe(|v: Vec<i32>| v.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "))
//!     .pipe(|s: String| s.contains('4'));
//!
//! assert!(chain.value().unwrap());
//! assert!(chain.value().unwrap_err().is_consumed());
//! ```

use std::{collections::VecDeque, fmt, marker::PhantomData, mem};

use crate::{
    error::{BoxError, LazyError},
    step::Step,
    stepwise::Stepwise,
    value::Value,
};

/// A queued step with its input and output types erased.
pub(crate) type Transform = Box<dyn FnOnce(Value) -> Result<Value, BoxError>>;

/// Untyped state shared by every handle a chain passes through.
pub(crate) struct Chain {
    current: Value,
    steps: VecDeque<Transform>,
    applied: usize,
    consumed: bool,
}

impl Chain {
    fn new(current: Value) -> Self {
        Self {
            current,
            steps: VecDeque::new(),
            applied: 0,
            consumed: false,
        }
    }

    /// Marks the chain consumed, failing if forcing already began once.
    fn begin(&mut self) -> Result<(), LazyError> {
        if self.consumed {
            tracing::debug!(applied = self.applied, "rejected forcing of consumed chain");
            return Err(LazyError::AlreadyConsumed);
        }
        self.consumed = true;
        tracing::debug!(steps = self.steps.len(), "forcing chain");
        Ok(())
    }

    pub(crate) fn pending(&self) -> usize {
        self.steps.len()
    }

    pub(crate) fn applied(&self) -> usize {
        self.applied
    }

    pub(crate) fn next_transform(&mut self) -> Option<Transform> {
        self.steps.pop_front()
    }

    /// Runs `transform` on the current value and stores its output in place.
    pub(crate) fn apply(&mut self, transform: Transform) -> Result<&Value, LazyError> {
        let index = self.applied;
        let input = mem::replace(&mut self.current, Value::vacant());
        match transform(input) {
            Ok(output) => {
                tracing::trace!(index, output = output.type_name(), "applied step");
                self.applied += 1;
                self.current = output;
                Ok(&self.current)
            }
            Err(source) => {
                tracing::debug!(index, error = %source, "step failed");
                self.steps.clear();
                Err(LazyError::StepFailed { index, source })
            }
        }
    }

    pub(crate) fn take_current(&mut self) -> Value {
        mem::replace(&mut self.current, Value::vacant())
    }
}

/// A value with transformations attached but not yet run.
///
/// `T` is the type the chain will produce once forced: the initial value's type for a
/// fresh chain, or the output type of the last step attached with [`pipe`](Lazy::pipe).
///
/// ```rust
/// use lazy_chain::Lazy;
///
/// let mut chain = Lazy::new("value").pipe(|s: &str| s.to_uppercase());
/// assert_eq!(chain.value().unwrap(), "VALUE");
/// assert!(chain.value().is_err());
/// ```
pub struct Lazy<T> {
    chain: Chain,
    _marker: PhantomData<fn() -> T>,
}

impl<T: 'static> Lazy<T> {
    /// Wraps `value` in a chain with no steps.
    pub fn new(value: T) -> Self {
        Self {
            chain: Chain::new(Value::new(value)),
            _marker: PhantomData,
        }
    }

    /// Queues `f` to run on the previous step's output. Nothing is evaluated.
    ///
    /// ```rust
    /// use lazy_chain::Lazy;
    ///
    /// let mut chain = Lazy::new(3)
    ///     .pipe(|x: i32| x + 1)
    ///     .pipe(|x: i32| format!("{x}!"));
    /// assert_eq!(chain.pending(), 2);
    /// assert_eq!(chain.value().unwrap(), "4!");
    /// ```
    pub fn pipe<U, F>(self, f: F) -> Lazy<U>
    where
        U: 'static,
        F: FnOnce(T) -> U + 'static,
    {
        self.attach(Box::new(move |value: Value| -> Result<Value, BoxError> {
            Ok(Value::new(f(value.into_inner::<T>())))
        }))
    }

    /// Queues a fallible step. An `Err` halts forcing with [`LazyError::StepFailed`].
    ///
    /// ```rust
    /// use lazy_chain::Lazy;
    ///
    /// let mut chain = Lazy::new("12")
    ///     .try_pipe(|s: &str| s.parse::<i32>())
    ///     .pipe(|n: i32| n * 2);
    /// assert_eq!(chain.value().unwrap(), 24);
    /// ```
    pub fn try_pipe<U, E, F>(self, f: F) -> Lazy<U>
    where
        U: 'static,
        E: Into<BoxError>,
        F: FnOnce(T) -> Result<U, E> + 'static,
    {
        self.attach(Box::new(move |value: Value| -> Result<Value, BoxError> {
            f(value.into_inner::<T>())
                .map(Value::new)
                .map_err(Into::into)
        }))
    }

    fn attach<U>(mut self, transform: Transform) -> Lazy<U> {
        self.chain.steps.push_back(transform);
        tracing::trace!(pending = self.chain.steps.len(), "attached step");
        Lazy {
            chain: self.chain,
            _marker: PhantomData,
        }
    }

    /// Number of attached steps that have not run.
    pub fn pending(&self) -> usize {
        self.chain.pending()
    }

    /// Returns `true` once forcing has begun.
    pub fn is_consumed(&self) -> bool {
        self.chain.consumed
    }

    /// Starts forcing the chain one step at a time.
    ///
    /// The chain counts as consumed from this call on, whether or not the returned
    /// driver is ever run to the end.
    ///
    /// ```rust
    /// use lazy_chain::{Lazy, Step};
    ///
    /// let mut chain = Lazy::new("lazy")
    ///     .pipe(|s: &str| s.to_uppercase())
    ///     .pipe(|s: String| s.chars().collect::<Vec<_>>());
    ///
    /// let mut steps = chain.stepwise().unwrap();
    /// while let Step::Yielded(value) = steps.resume().unwrap() {
    ///     println!("{value:?}");
    /// }
    /// ```
    pub fn stepwise(&mut self) -> Result<Stepwise<'_, T>, LazyError> {
        self.chain.begin()?;
        Ok(Stepwise::new(&mut self.chain))
    }

    /// Forces the whole chain and returns the last step's output.
    ///
    /// With no steps attached this is the initial value.
    pub fn value(&mut self) -> Result<T, LazyError> {
        let mut steps = self.stepwise()?;
        loop {
            match steps.resume()? {
                Step::Yielded(_) => {}
                Step::Complete(value) => return Ok(value),
            }
        }
    }

    /// Consuming form of [`value`](Lazy::value).
    pub fn into_value(mut self) -> Result<T, LazyError> {
        self.value()
    }
}

impl<T: 'static> From<T> for Lazy<T> {
    fn from(value: T) -> Self {
        Lazy::new(value)
    }
}

/// Wraps `value` in a chain with no steps. Same as [`Lazy::new`].
///
/// ```rust
/// use lazy_chain::{Lazy, lazy};
///
/// let chains: Vec<Lazy<i32>> = vec![1, 2, 3].into_iter().map(lazy).collect();
/// assert_eq!(chains.len(), 3);
/// ```
pub fn lazy<T: 'static>(value: T) -> Lazy<T> {
    Lazy::new(value)
}

impl<T> fmt::Debug for Lazy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lazy")
            .field("current", &self.chain.current)
            .field("pending", &self.chain.steps.len())
            .field("consumed", &self.chain.consumed)
            .finish()
    }
}

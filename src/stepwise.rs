//! Step-by-step forcing.
//!
//! [`Stepwise`] is an explicit state machine over a chain: every call to
//! [`resume`](Stepwise::resume) runs exactly one pending step and hands out its result,
//! so a caller can interleave its own work between steps.
//!
//! # Examples
//!
//! ```rust
//! use lazy_chain::prelude::*;
//!
//! let mut chain = Lazy::new(vec![1, 2, 3])
//!     .pipe(|v: Vec<i32>| v.into_iter().map(|x| 2 * x).collect::<Vec<_>>())
//!     .pipe(|v: Vec<i32>| v.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "));
//!
//! let mut steps = chain.stepwise().unwrap();
//! let first = steps.resume().unwrap().unwrap_yielded();
//! assert_eq!(first.downcast_ref::<Vec<i32>>(), Some(&vec![2, 4, 6]));
//!
//! let second = steps.resume().unwrap().unwrap_yielded();
//! assert_eq!(second.downcast_ref::<String>().unwrap(), "2, 4, 6");
//!
//! assert_eq!(steps.resume().unwrap().unwrap_complete(), "2, 4, 6");
//! ```

use std::marker::PhantomData;

use crate::{chain::Chain, error::LazyError, iter::Observe, step::Step, value::Value};

/// Drives a chain one step per [`resume`](Stepwise::resume) call.
///
/// Created by [`Lazy::stepwise`](crate::Lazy::stepwise). Dropping it part way leaves the
/// chain consumed with the remaining steps never run.
pub struct Stepwise<'a, T> {
    chain: &'a mut Chain,
    finished: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T: 'static> Stepwise<'a, T> {
    pub(crate) fn new(chain: &'a mut Chain) -> Self {
        Self {
            chain,
            finished: false,
            _marker: PhantomData,
        }
    }

    /// Runs the next step.
    ///
    /// Returns `Yielded` with that step's output, or `Complete` with the chain's final
    /// value once every step has run. A chain without steps completes on the first call
    /// with its initial value. After completion or a step failure every call returns
    /// [`LazyError::AlreadyConsumed`].
    pub fn resume(&mut self) -> Result<Step<&Value, T>, LazyError> {
        if self.finished {
            return Err(LazyError::AlreadyConsumed);
        }

        let Some(transform) = self.chain.next_transform() else {
            return Ok(Step::Complete(self.finish()));
        };

        match self.chain.apply(transform) {
            Ok(value) => Ok(Step::Yielded(value)),
            Err(err) => {
                self.finished = true;
                Err(err)
            }
        }
    }

    /// Steps still to run. Zero once finished.
    pub fn remaining(&self) -> usize {
        if self.finished { 0 } else { self.chain.pending() }
    }

    /// Returns `true` after completion or a step failure.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Adapts the driver into an [`Iterator`] that passes each intermediate result to `f`.
    ///
    /// ```rust
    /// use lazy_chain::Lazy;
    ///
    /// let mut chain = Lazy::new(2).pipe(|x: i32| x * 3).pipe(|x: i32| x.to_string());
    /// let mut observed = chain.stepwise().unwrap().observe(|v| v.type_name());
    ///
    /// let names: Vec<_> = observed.by_ref().collect::<Result<_, _>>().unwrap();
    /// assert_eq!(names.len(), 2);
    /// assert_eq!(observed.into_value().as_deref(), Some("6"));
    /// ```
    pub fn observe<R, F>(self, f: F) -> Observe<'a, T, F>
    where
        F: FnMut(&Value) -> R,
    {
        Observe::new(self, f)
    }

    fn finish(&mut self) -> T {
        self.finished = true;
        tracing::debug!(applied = self.chain.applied(), "chain forced");
        self.chain.take_current().into_inner::<T>()
    }
}

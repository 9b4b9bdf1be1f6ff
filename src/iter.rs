//! Iterator adapter for stepwise forcing.
//!
//! Intermediate results of a chain have different types and live inside the chain, so
//! [`Stepwise`] cannot be an [`Iterator`] itself. [`Observe`] bridges the gap: it runs
//! each step, passes the borrowed result to a closure and yields what the closure returns.
//!
//! # Examples
//!
//! ```rust
//! use lazy_chain::prelude::*;
//!
//! let mut chain = Lazy::new("lazy")
//!     .pipe(|s: &str| s.to_uppercase())
//!     .pipe(|s: String| s.chars().collect::<Vec<_>>());
//!
//! let mut observed = chain.stepwise().unwrap().observe(|value| {
//!     if let Some(s) = value.downcast_ref::<String>() {
//!         s.clone()
//!     } else {
//!         format!("{:?}", value.downcast_ref::<Vec<char>>().unwrap())
//!     }
//! });
//!
//! let steps: Vec<String> = observed.by_ref().collect::<Result<_, _>>().unwrap();
//! assert_eq!(steps, vec!["LAZY", "['L', 'A', 'Z', 'Y']"]);
//! assert_eq!(observed.into_value(), Some(vec!['L', 'A', 'Z', 'Y']));
//! ```

use std::iter::FusedIterator;

use crate::{error::LazyError, step::Step, stepwise::Stepwise, value::Value};

/// Iterator over observations of each step of a chain.
///
/// Created by [`Stepwise::observe`]. Both `Observe` and `&mut Observe` iterate, so the
/// final value can be taken out with [`into_value`](Observe::into_value) afterwards.
/// A step failure is yielded once as `Err`; iteration ends there.
pub struct Observe<'a, T, F> {
    state: ObserveState<'a, T>,
    f: F,
}

enum ObserveState<'a, T> {
    Active(Stepwise<'a, T>),
    Complete(T),
    Failed,
    Invalid,
}

impl<T> ObserveState<'_, T> {
    fn take(&mut self) -> Self {
        std::mem::replace(self, ObserveState::Invalid)
    }
}

impl<'a, T, F> Observe<'a, T, F> {
    pub(crate) fn new(steps: Stepwise<'a, T>, f: F) -> Self {
        Self {
            state: ObserveState::Active(steps),
            f,
        }
    }

    /// Check if every step ran and the final value is available.
    pub fn is_complete(&self) -> bool {
        matches!(self.state, ObserveState::Complete(_))
    }

    /// Check if a step failed.
    pub fn is_failed(&self) -> bool {
        matches!(self.state, ObserveState::Failed)
    }

    /// Consume the iterator and return the chain's final value if complete.
    ///
    /// Returns `None` if iteration has not finished or a step failed.
    pub fn into_value(self) -> Option<T> {
        match self.state {
            ObserveState::Complete(value) => Some(value),
            _ => None,
        }
    }

    /// Get a reference to the final value if complete.
    pub fn value_ref(&self) -> Option<&T> {
        match &self.state {
            ObserveState::Complete(value) => Some(value),
            _ => None,
        }
    }
}

impl<T, F, R> Iterator for Observe<'_, T, F>
where
    T: 'static,
    F: FnMut(&Value) -> R,
{
    type Item = Result<R, LazyError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state.take() {
            ObserveState::Active(mut steps) => {
                let step = steps.resume().map(|step| step.map_yielded(&mut self.f));
                match step {
                    Ok(Step::Yielded(observed)) => {
                        self.state = ObserveState::Active(steps);
                        Some(Ok(observed))
                    }
                    Ok(Step::Complete(value)) => {
                        self.state = ObserveState::Complete(value);
                        None
                    }
                    Err(err) => {
                        self.state = ObserveState::Failed;
                        Some(Err(err))
                    }
                }
            }
            state => {
                self.state = state;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            ObserveState::Active(steps) => (0, Some(steps.remaining())),
            _ => (0, Some(0)),
        }
    }
}

impl<T, F, R> FusedIterator for Observe<'_, T, F>
where
    T: 'static,
    F: FnMut(&Value) -> R,
{
}

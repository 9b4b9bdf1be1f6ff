//! # Lazy Chain: Deferred, Single-Use Transformation Chains
//!
//! Attach transformations to a value without running them, then force the chain exactly
//! once, either all at once or one step at a time.
//!
//! ## Core Types
//!
//! - **[`Lazy<T>`]**: a value plus pending steps; `T` tracks the last step's output type
//! - **[`Stepwise`]**: state machine that runs one step per [`resume`](Stepwise::resume)
//! - **[`Observe`]**: [`Iterator`] over a closure's view of each intermediate result
//! - **[`Step`]**: `Yielded` intermediate result or `Complete` final value
//!
//! ## Key Properties
//!
//! - **Deferred**: [`Lazy::pipe`] only queues; nothing runs until forced
//! - **Ordered**: each step receives the previous step's output
//! - **Single-use**: forcing twice fails with [`LazyError::AlreadyConsumed`], including
//!   after an abandoned stepwise drive or a failing step
//!
//! ## Example
//!
//! ```
//! use lazy_chain::*;
//!
//! let mut chain = Lazy::new([1, 2, 3, 4, 5])
//!     .pipe(|mut a: [i32; 5]| { a.reverse(); a })
//!     .pipe(|mut a: [i32; 5]| { a.sort(); a })
//!     .pipe(|a: [i32; 5]| a.iter().fold(0, |acc, x| acc - x));
//!
//! assert_eq!(chain.value().unwrap(), -15);
//! assert!(matches!(chain.value(), Err(LazyError::AlreadyConsumed)));
//! ```
//!
//! ## Common Functions
//!
//! **Building chains:**
//! - [`Lazy::new(value)`](Lazy::new), [`Lazy::from(value)`](Lazy::from) or [`lazy(value)`] - start a chain
//! - [`pipe(f)`](Lazy::pipe) - queue an infallible step
//! - [`try_pipe(f)`](Lazy::try_pipe) - queue a step returning `Result`
//!
//! **Forcing:**
//! - [`value()`](Lazy::value) - run everything, return the final value
//! - [`stepwise()`](Lazy::stepwise) - run one step per [`resume`](Stepwise::resume)
//! - [`observe(f)`](Stepwise::observe) - iterate over each step's result

mod chain;
mod error;
mod iter;
mod step;
mod stepwise;
mod value;

pub mod prelude;

pub use chain::{Lazy, lazy};
pub use error::*;
pub use iter::*;
pub use step::*;
pub use stepwise::*;
pub use value::*;

//! Commonly used imports
//!
//! Use `use lazy_chain::prelude::*;` for quick access to the chain and its drivers.

// Core types
pub use crate::{Lazy, Step, Value};

// Constructors
pub use crate::lazy;

// Forcing
pub use crate::{Observe, Stepwise};

// Errors
pub use crate::{BoxError, LazyError};

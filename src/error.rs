//! Errors raised while forcing a chain.

/// A failure produced by a step attached with [`Lazy::try_pipe`](crate::Lazy::try_pipe).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when forcing a [`Lazy`](crate::Lazy) chain.
#[derive(thiserror::Error, Debug)]
pub enum LazyError {
    /// The chain was already forced, fully or partially. Build a new chain to redo the work.
    #[error("value already consumed")]
    AlreadyConsumed,

    /// A step returned an error. The chain is spent and will not retry it.
    #[error("step {index} failed: {source}")]
    StepFailed {
        /// Zero-based position of the failing step in attachment order.
        index: usize,
        #[source]
        source: BoxError,
    },
}

impl LazyError {
    /// Returns `true` for [`LazyError::AlreadyConsumed`].
    pub fn is_consumed(&self) -> bool {
        matches!(self, LazyError::AlreadyConsumed)
    }

    /// Index of the failing step, if this is a step failure.
    pub fn step_index(&self) -> Option<usize> {
        match self {
            LazyError::StepFailed { index, .. } => Some(*index),
            LazyError::AlreadyConsumed => None,
        }
    }

    /// Hands back the error the step itself returned.
    ///
    /// ```rust
    /// use lazy_chain::Lazy;
    ///
    /// let err = Lazy::new("x")
    ///     .try_pipe(|s: &str| s.parse::<u8>())
    ///     .value()
    ///     .unwrap_err();
    ///
    /// let source = err.into_step_error().unwrap();
    /// assert!(source.downcast_ref::<std::num::ParseIntError>().is_some());
    /// ```
    pub fn into_step_error(self) -> Option<BoxError> {
        match self {
            LazyError::StepFailed { source, .. } => Some(source),
            LazyError::AlreadyConsumed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(thiserror::Error, Debug, PartialEq)]
    #[error("boom")]
    struct Boom;

    #[test]
    fn test_already_consumed_display() {
        let err = LazyError::AlreadyConsumed;
        assert_eq!(err.to_string(), "value already consumed");
        assert!(err.is_consumed());
        assert_eq!(err.step_index(), None);
        assert!(err.into_step_error().is_none());
    }

    #[test]
    fn test_step_failed_keeps_source() {
        let err = LazyError::StepFailed {
            index: 2,
            source: Box::new(Boom),
        };
        assert_eq!(err.to_string(), "step 2 failed: boom");
        assert!(!err.is_consumed());
        assert_eq!(err.step_index(), Some(2));
        assert!(std::error::Error::source(&err).is_some());

        let source = err.into_step_error().expect("step failure carries a source");
        assert_eq!(source.downcast_ref::<Boom>(), Some(&Boom));
    }
}

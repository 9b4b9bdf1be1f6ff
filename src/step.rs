/// Result of advancing a [`Stepwise`](crate::Stepwise) driver by one step.
///
/// `Yielded` carries an intermediate result, `Complete` carries the final value of the
/// chain once no steps remain.
///
/// # Examples
///
/// ```rust
/// use lazy_chain::Step;
///
/// let yielded: Step<i32, String> = Step::Yielded(42);
/// let complete: Step<i32, String> = Step::Complete("finished".to_string());
///
/// assert_eq!(yielded.map_yielded(|x| x * 2), Step::Yielded(84));
/// assert!(complete.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<Y, D> {
    /// An intermediate result; more steps may follow.
    Yielded(Y),
    /// The final value; the drive is over.
    Complete(D),
}

impl<Y, D> Step<Y, D> {
    /// Returns `true` if the step is `Yielded`.
    ///
    /// ```rust
    /// use lazy_chain::Step;
    ///
    /// let x: Step<i32, &str> = Step::Yielded(42);
    /// assert!(x.is_yielded());
    /// ```
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns `true` if the step is `Complete`.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    /// Converts from `Step<Y, D>` to `Option<Y>`, discarding a complete value.
    ///
    /// ```rust
    /// use lazy_chain::Step;
    ///
    /// let x: Step<i32, &str> = Step::Yielded(42);
    /// assert_eq!(x.yielded_value(), Some(42));
    ///
    /// let y: Step<i32, &str> = Step::Complete("complete");
    /// assert_eq!(y.yielded_value(), None);
    /// ```
    #[inline]
    pub fn yielded_value(self) -> Option<Y> {
        match self {
            Step::Yielded(y) => Some(y),
            Step::Complete(_) => None,
        }
    }

    /// Converts from `Step<Y, D>` to `Option<D>`, discarding a yielded value.
    #[inline]
    pub fn complete_value(self) -> Option<D> {
        match self {
            Step::Yielded(_) => None,
            Step::Complete(d) => Some(d),
        }
    }

    /// Maps the yielded value, leaving a complete value untouched.
    ///
    /// Handy for turning the borrowed intermediate handed out by
    /// [`Stepwise::resume`](crate::Stepwise::resume) into something owned.
    #[inline]
    pub fn map_yielded<Y2, F>(self, f: F) -> Step<Y2, D>
    where
        F: FnOnce(Y) -> Y2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(f(y)),
            Step::Complete(d) => Step::Complete(d),
        }
    }

    /// Maps the complete value, leaving a yielded value untouched.
    #[inline]
    pub fn map_complete<D2, F>(self, f: F) -> Step<Y, D2>
    where
        F: FnOnce(D) -> D2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Complete(d) => Step::Complete(f(d)),
        }
    }

    /// Returns the contained `Yielded` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Complete`.
    ///
    /// ```should_panic
    /// use lazy_chain::Step;
    ///
    /// let x: Step<i32, &str> = Step::Complete("complete");
    /// x.unwrap_yielded(); // panics
    /// ```
    #[inline]
    pub fn unwrap_yielded(self) -> Y {
        match self {
            Step::Yielded(y) => y,
            Step::Complete(_) => panic!("called `Step::unwrap_yielded()` on a `Complete` value"),
        }
    }

    /// Returns the contained `Complete` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Yielded`.
    #[inline]
    pub fn unwrap_complete(self) -> D {
        match self {
            Step::Yielded(_) => panic!("called `Step::unwrap_complete()` on a `Yielded` value"),
            Step::Complete(d) => d,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yielded_and_is_complete() {
        let y: Step<i32, &str> = Step::Yielded(42);
        let d: Step<i32, &str> = Step::Complete("complete");

        assert!(y.is_yielded());
        assert!(!y.is_complete());
        assert!(d.is_complete());
        assert!(!d.is_yielded());
    }

    #[test]
    fn test_yielded_value_and_complete_value() {
        let y: Step<i32, &str> = Step::Yielded(42);
        let d: Step<i32, &str> = Step::Complete("complete");

        assert_eq!(y.yielded_value(), Some(42));
        assert_eq!(y.complete_value(), None);
        assert_eq!(d.yielded_value(), None);
        assert_eq!(d.complete_value(), Some("complete"));
    }

    #[test]
    fn test_map_yielded_leaves_complete_alone() {
        let y: Step<&str, bool> = Step::Yielded("borrowed");
        let d: Step<&str, bool> = Step::Complete(true);

        assert_eq!(y.map_yielded(str::to_owned), Step::Yielded("borrowed".to_string()));
        assert_eq!(d.map_yielded(str::to_owned), Step::Complete(true));
    }

    #[test]
    fn test_map_complete_leaves_yielded_alone() {
        let y: Step<i32, i32> = Step::Yielded(42);
        let d: Step<i32, i32> = Step::Complete(10);

        assert_eq!(y.map_complete(|x| x * 2), Step::Yielded(42));
        assert_eq!(d.map_complete(|x| x * 2), Step::Complete(20));
    }

    #[test]
    #[should_panic(expected = "called `Step::unwrap_yielded()` on a `Complete` value")]
    fn test_unwrap_yielded_panics() {
        let d: Step<i32, &str> = Step::Complete("complete");
        d.unwrap_yielded();
    }

    #[test]
    #[should_panic(expected = "called `Step::unwrap_complete()` on a `Yielded` value")]
    fn test_unwrap_complete_panics() {
        let y: Step<i32, &str> = Step::Yielded(42);
        y.unwrap_complete();
    }
}

use std::{
    any::{Any, type_name},
    fmt,
};

/// A type-erased intermediate result of a chain.
///
/// Steps of one chain may produce values of different types, so the stepwise driver hands
/// them out behind this wrapper. Use [`downcast_ref`](Value::downcast_ref) to look inside.
///
/// ```rust
/// use lazy_chain::{Lazy, Step};
///
/// let mut chain = Lazy::new(21).pipe(|x: i32| x * 2);
/// let mut steps = chain.stepwise().unwrap();
///
/// let Step::Yielded(value) = steps.resume().unwrap() else { unreachable!() };
/// assert_eq!(value.downcast_ref::<i32>(), Some(&42));
/// assert_eq!(value.type_name(), "i32");
/// ```
pub struct Value {
    inner: Box<dyn Any>,
    type_name: &'static str,
}

impl Value {
    pub(crate) fn new<T: Any>(value: T) -> Self {
        Self {
            inner: Box::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Placeholder left behind while the real value is inside a step.
    pub(crate) fn vacant() -> Self {
        Self::new(())
    }

    /// Name of the concrete type held, as reported by [`std::any::type_name`].
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if the held value is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Borrows the held value as a `T`, or `None` if it is some other type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Unwraps into the `T` a typed [`Lazy`](crate::Lazy) handle promised.
    ///
    /// Every call site is keyed by the handle's type parameter, which `pipe` keeps equal
    /// to the type of the value stored at that point of the chain.
    pub(crate) fn into_inner<T: Any>(self) -> T {
        match self.inner.downcast::<T>() {
            Ok(value) => *value,
            Err(_) => panic!(
                "chain holds a `{}` where a `{}` was expected",
                self.type_name,
                type_name::<T>()
            ),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Value").field(&self.type_name).finish()
    }
}

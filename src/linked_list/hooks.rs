use crate::error::ListError;

/// Strategy used to move values in and out of a list.
///
/// Every value stored in a list is a copy made by [`ValueHooks::copy`], and
/// every value handed back to a caller is another copy. Before a stored value
/// is dropped, [`ValueHooks::dealloc`] gets the chance to release resources
/// nested inside it.
pub trait ValueHooks<T> {
    /// Produce an independent copy of `source`.
    ///
    /// # Returns
    /// The copy, or an error (typically [`ListError::OutOfMemory`]) if the
    /// copy could not be made.
    fn copy(&self, source: &T) -> Result<T, ListError>;

    /// Release resources nested inside `value` right before it is dropped.
    fn dealloc(&self, _value: &mut T) {}
}

/// Default hooks: copies with [`Clone`] and releases nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct CloneHooks;

impl<T: Clone> ValueHooks<T> for CloneHooks {
    #[inline]
    fn copy(&self, source: &T) -> Result<T, ListError> {
        Ok(source.clone())
    }
}

/// Hooks built from a pair of closures.
///
/// # Type Parameters
/// * `C` - The copy closure, `Fn(&T) -> Result<T, ListError>`
/// * `D` - The dealloc closure, `Fn(&mut T)`
#[derive(Clone)]
pub struct FnHooks<C, D> {
    copy: C,
    dealloc: D,
}

impl<C, D> FnHooks<C, D> {
    /// Create hooks from a copy and a dealloc closure.
    pub fn new(copy: C, dealloc: D) -> Self {
        Self { copy, dealloc }
    }
}

impl<T, C> FnHooks<C, fn(&mut T)> {
    /// Create hooks with a custom copy and no dealloc step.
    pub fn copy_only(copy: C) -> Self {
        Self {
            copy,
            dealloc: |_| {},
        }
    }
}

impl<T, C, D> ValueHooks<T> for FnHooks<C, D>
where
    C: Fn(&T) -> Result<T, ListError>,
    D: Fn(&mut T),
{
    fn copy(&self, source: &T) -> Result<T, ListError> {
        (self.copy)(source)
    }

    fn dealloc(&self, value: &mut T) {
        (self.dealloc)(value)
    }
}

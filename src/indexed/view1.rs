use std::fmt;
use std::sync::Arc;

use super::Index;

type ValueFn<T> = dyn Fn(Index) -> T + Send + Sync;

/// One-Dimensional View
///
/// A lazily evaluated mapping from an index to a value. A view is total: it
/// answers any index, including negative ones, and places no bounds on the
/// positions it is asked about. Views are cheap to clone and can be shared
/// between threads.
///
/// ```
/// use matmax::indexed::View1;
///
/// let squares = View1::new(|i| i * i);
/// assert_eq!(squares.value(4), 16);
/// assert_eq!(squares.value(-3), 9);
/// ```
///
pub struct View1<T>(Arc<ValueFn<T>>);

impl<T> View1<T> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Index) -> T + Send + Sync + 'static,
    {
        View1(Arc::new(f))
    }

    #[inline]
    pub fn value(&self, index: Index) -> T {
        (self.0)(index)
    }

    /// Whether both views share the same underlying function.
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: 'static> View1<T> {
    /// Derive a view of another kind by converting each value.
    pub fn convert<U, F>(&self, f: F) -> View1<U>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let source = self.clone();
        View1::new(move |i| f(source.value(i)))
    }

    /// Shift values towards higher indices; position `i` reads `i - offset`.
    pub fn shift(&self, offset: Index) -> View1<T> {
        let source = self.clone();
        View1::new(move |i| source.value(i.wrapping_sub(offset)))
    }
}

impl<T: Clone + Send + Sync + 'static> View1<T> {
    /// A view answering `value` at every index.
    pub fn constant(value: T) -> Self {
        View1::new(move |_| value.clone())
    }
}

impl<T> Clone for View1<T> {
    fn clone(&self) -> Self {
        View1(self.0.clone())
    }
}

impl<T> fmt::Debug for View1<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("View1")
    }
}

use std::fmt;
use std::sync::Arc;

use super::{Index, View1};

type ValueFn<T> = dyn Fn(Index, Index) -> T + Send + Sync;

/// Two-Dimensional View
///
/// A lazily evaluated mapping from a `(row, column)` pair to a value. Like
/// [`View1`], a two-dimensional view is total and unbounded.
///
/// ```
/// use matmax::indexed::View2;
///
/// let table = View2::new(|r, c| r * 10 + c);
/// assert_eq!(table.value(2, 3), 23);
/// assert_eq!(table.row(1).value(4), 14);
/// assert_eq!(table.column(4).value(1), 14);
/// ```
///
pub struct View2<T>(Arc<ValueFn<T>>);

impl<T> View2<T> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Index, Index) -> T + Send + Sync + 'static,
    {
        View2(Arc::new(f))
    }

    #[inline]
    pub fn value(&self, row: Index, column: Index) -> T {
        (self.0)(row, column)
    }

    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: 'static> View2<T> {
    /// The one-dimensional slice at `row`, indexed by column.
    pub fn row(&self, row: Index) -> View1<T> {
        let source = self.clone();
        View1::new(move |c| source.value(row, c))
    }

    /// The one-dimensional slice at `column`, indexed by row.
    pub fn column(&self, column: Index) -> View1<T> {
        let source = self.clone();
        View1::new(move |r| source.value(r, column))
    }

    pub fn convert<U, F>(&self, f: F) -> View2<U>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let source = self.clone();
        View2::new(move |r, c| f(source.value(r, c)))
    }

    /// Swap the roles of rows and columns.
    pub fn transpose(&self) -> View2<T> {
        let source = self.clone();
        View2::new(move |r, c| source.value(c, r))
    }

    /// Shift values down by `rows` and right by `columns`.
    pub fn shift(&self, rows: Index, columns: Index) -> View2<T> {
        let source = self.clone();
        View2::new(move |r, c| source.value(r.wrapping_sub(rows), c.wrapping_sub(columns)))
    }
}

impl<T: Clone + Send + Sync + 'static> View2<T> {
    pub fn constant(value: T) -> Self {
        View2::new(move |_, _| value.clone())
    }
}

impl<T> Clone for View2<T> {
    fn clone(&self) -> Self {
        View2(self.0.clone())
    }
}

impl<T> fmt::Debug for View2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("View2")
    }
}

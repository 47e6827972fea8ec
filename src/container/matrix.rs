use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::hash;
use super::iterators::Cells;
use super::Vector;
use crate::error::Error;
use crate::indexed::{index_len, Element, Index, Kind, View1, View2};
use crate::operand::Operand;

#[derive(Clone)]
enum Data<T> {
    Lazy(View2<T>),
    // row-major
    Materialized(Arc<[T]>),
}

/// Matrix
///
/// A two-dimensional view with a number of rows and columns. Cells outside
/// `0..rows x 0..columns` read as the element kind's absent value.
///
/// ```
/// use matmax::container::IntMatrix;
/// use matmax::indexed::View2;
///
/// let m = IntMatrix::new(2, 3, View2::new(|r, c| r * 3 + c)).unwrap();
/// assert_eq!(m.value(1, 2), 5);
/// assert_eq!(m.value(2, 0), 0);
/// assert_eq!(m.column(2).to_vec(), vec![2, 5]);
/// ```
///
#[derive(Clone)]
pub struct Matrix<T: Element> {
    rows: Index,
    columns: Index,
    data: Data<T>,
}

impl<T: Element> Matrix<T> {
    pub fn new(rows: Index, columns: Index, view: View2<T>) -> Result<Self, Error> {
        if rows < 0 {
            debug!(rows, "rejected matrix with negative rows");
            return Err(Error::NegativeRows(rows));
        }
        if columns < 0 {
            debug!(columns, "rejected matrix with negative columns");
            return Err(Error::NegativeColumns(columns));
        }
        Ok(Matrix::wrap(rows, columns, view))
    }

    pub fn from_fn<F>(rows: Index, columns: Index, f: F) -> Result<Self, Error>
    where
        F: Fn(Index, Index) -> T + Send + Sync + 'static,
    {
        Matrix::new(rows, columns, View2::new(f))
    }

    pub fn constant(rows: Index, columns: Index, value: T) -> Result<Self, Error> {
        Matrix::new(rows, columns, View2::constant(value))
    }

    /// Stack row views, each read over `columns` positions.
    pub fn from_rows(columns: Index, rows: Vec<View1<T>>) -> Result<Self, Error> {
        let n = index_len(rows.len());
        let rows: Arc<[View1<T>]> = rows.into();
        Matrix::from_fn(n, columns, move |r, c| rows[r as usize].value(c))
    }

    /// Place column views side by side, each read over `rows` positions.
    pub fn from_columns(rows: Index, columns: Vec<View1<T>>) -> Result<Self, Error> {
        let n = index_len(columns.len());
        let columns: Arc<[View1<T>]> = columns.into();
        Matrix::from_fn(rows, n, move |r, c| columns[c as usize].value(r))
    }

    /// Stack vectors as rows. The matrix is as wide as the first vector;
    /// shorter rows read as absent past their end.
    pub fn from_row_vectors(rows: Vec<Vector<T>>) -> Self {
        let columns = rows.first().map_or(0, Vector::len);
        let n = index_len(rows.len());
        let rows: Arc<[Vector<T>]> = rows.into();
        Matrix::wrap(n, columns, View2::new(move |r, c| rows[r as usize].value(c)))
    }

    /// Place vectors side by side as columns. The matrix is as tall as the
    /// first vector.
    pub fn from_column_vectors(columns: Vec<Vector<T>>) -> Self {
        let rows = columns.first().map_or(0, Vector::len);
        let n = index_len(columns.len());
        let columns: Arc<[Vector<T>]> = columns.into();
        Matrix::wrap(rows, n, View2::new(move |r, c| columns[c as usize].value(r)))
    }

    pub(crate) fn wrap(rows: Index, columns: Index, view: View2<T>) -> Self {
        Matrix {
            rows,
            columns,
            data: Data::Lazy(view),
        }
    }

    #[inline]
    pub fn rows(&self) -> Index {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> Index {
        self.columns
    }

    pub fn kind(&self) -> Kind {
        T::KIND
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    pub fn value(&self, row: Index, column: Index) -> T {
        if row < 0 || row >= self.rows || column < 0 || column >= self.columns {
            return T::absent();
        }

        match &self.data {
            Data::Lazy(view) => view.value(row, column),
            Data::Materialized(values) => {
                values[row as usize * self.columns as usize + column as usize].clone()
            }
        }
    }

    /// The values of `row`, one per column.
    pub fn row(&self, row: Index) -> Vector<T> {
        let this = self.clone();
        Vector::wrap(self.columns, View1::new(move |c| this.value(row, c)))
    }

    /// The values of `column`, one per row.
    pub fn column(&self, column: Index) -> Vector<T> {
        let this = self.clone();
        Vector::wrap(self.rows, View1::new(move |r| this.value(r, column)))
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = Vector<T>> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    pub fn iter_columns(&self) -> impl Iterator<Item = Vector<T>> + '_ {
        (0..self.columns).map(move |c| self.column(c))
    }

    pub fn is_materialized(&self) -> bool {
        matches!(self.data, Data::Materialized(_))
    }

    /// Materialize a Matrix
    ///
    /// Read every in-bounds cell once, row by row, and keep the results.
    /// Materializing an already materialized matrix reads nothing.
    ///
    pub fn materialize(&self) -> Self {
        match &self.data {
            Data::Materialized(_) => self.clone(),
            Data::Lazy(view) => {
                let kind = T::KIND;
                debug!(rows = self.rows, columns = self.columns, %kind, "materializing matrix");
                let (rows, columns) = (self.rows, self.columns);
                let values: Arc<[T]> = (0..rows)
                    .flat_map(|r| (0..columns).map(move |c| (r, c)))
                    .map(|(r, c)| view.value(r, c))
                    .collect();
                Matrix {
                    rows,
                    columns,
                    data: Data::Materialized(values),
                }
            }
        }
    }

    /// Cell values in row-major order.
    pub fn iter(&self) -> Cells<'_, T> {
        Cells::new(self)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// The `columns x rows` matrix reading `(column, row)` for `(row, column)`.
    pub fn transpose(&self) -> Self {
        Matrix::wrap(self.columns, self.rows, self.as_view().transpose())
    }

    pub fn convert<U, F>(&self, f: F) -> Matrix<U>
    where
        U: Element,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        Matrix::wrap(self.rows, self.columns, self.as_view().convert(f))
    }

    /// Sampled structural hash, consistent with equality.
    pub fn hash_code(&self) -> i32 {
        hash::hash_2d(self.rows, self.columns, |r, c| self.value(r, c))
    }
}

macro_rules! square {
    ($($t:ty => $one:expr, $zero:expr);*) => {$(
        impl Matrix<$t> {
            /// A square matrix holding `values` on its diagonal and zero
            /// everywhere else.
            pub fn diagonal(size: Index, values: View1<$t>) -> Result<Self, Error> {
                Matrix::from_fn(size, size, move |r, c| if r == c { values.value(r) } else { $zero })
            }

            pub fn identity(size: Index) -> Result<Self, Error> {
                Matrix::from_fn(size, size, |r, c| if r == c { $one } else { $zero })
            }
        }
    )*};
}

square!(bool => true, false; i32 => 1, 0; i64 => 1, 0; f64 => 1.0, 0.0);

impl<T: Element> Operand for Matrix<T> {
    type Elem = T;
    type View = View2<T>;

    fn as_view(&self) -> View2<T> {
        let this = self.clone();
        View2::new(move |r, c| this.value(r, c))
    }

    fn with_view(&self, view: View2<T>) -> Self {
        Matrix::wrap(self.rows, self.columns, view)
    }
}

impl<T: Element> From<Vec<Vec<T>>> for Matrix<T> {
    /// Rows of values. The matrix is as wide as the first row; shorter rows
    /// are padded with the absent value and longer rows are cut.
    ///
    /// # Panics
    ///
    /// If there are more than `Index::MAX` rows or columns.
    fn from(values: Vec<Vec<T>>) -> Self {
        let rows = index_len(values.len());
        let columns = index_len(values.first().map_or(0, Vec::len));
        let cells: Arc<[T]> = values
            .into_iter()
            .flat_map(|row| {
                row.into_iter()
                    .chain(std::iter::repeat_with(T::absent))
                    .take(columns as usize)
            })
            .collect();
        Matrix {
            rows,
            columns,
            data: Data::Materialized(cells),
        }
    }
}

impl<T: Element> From<Matrix<T>> for View2<T> {
    fn from(value: Matrix<T>) -> Self {
        value.as_view()
    }
}

impl<T: Element> From<&Matrix<T>> for View2<T> {
    fn from(value: &Matrix<T>) -> Self {
        value.as_view()
    }
}

impl<T: Element> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || hash::equal_2d(
                (self.rows, self.columns),
                |r, c| self.value(r, c),
                (other.rows, other.columns),
                |r, c| other.value(r, c),
            )
    }
}

impl<T: Element> Eq for Matrix<T> {}

impl<T: Element> std::hash::Hash for Matrix<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code())
    }
}

impl<T: Element> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}Matrix:{}x{}",
            T::KIND.type_prefix(),
            self.rows,
            self.columns
        )
    }
}

impl<T: Element> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MAX_ROWS: Index = 10;
        write!(f, "{self} ")?;
        f.debug_list()
            .entries(self.iter_rows().take(MAX_ROWS as usize).map(|r| r.to_vec()))
            .finish()?;
        if self.rows > MAX_ROWS {
            write!(f, " [ omitting {} rows ]", self.rows - MAX_ROWS)?;
        }
        Ok(())
    }
}

use std::fmt;

use crate::container::hash::fold;
use crate::container::{Matrix, ObjMatrix, ObjVector, Vector};
use crate::indexed::{Index, Value, View1, View2};

/// Header
///
/// Labels for the rows and columns of a table, laid out in four regions:
///
/// ```text
///   corner labels   | column labels
///   (header rows x  | (header rows x columns)
///    header cols)   |
///   ----------------+----------------------
///   row labels      | (data)
///   (rows x         |
///    header cols)   |
/// ```
///
/// Any label may be absent. Two headers are equal when their four dimensions
/// match and every label in all three regions is equal.
///
pub trait Header {
    type Label: Value;

    fn corner_label(&self, header_row: Index, header_column: Index) -> Option<Self::Label>;
    fn column_label(&self, header_row: Index, column: Index) -> Option<Self::Label>;
    fn row_label(&self, row: Index, header_column: Index) -> Option<Self::Label>;

    fn n_header_rows(&self) -> Index;
    fn n_header_columns(&self) -> Index;
    fn n_rows(&self) -> Index;
    fn n_columns(&self) -> Index;

    /// The column labels at `header_row`, one per column.
    fn row(&self, header_row: Index) -> ObjVector<Self::Label>
    where
        Self: Clone + Send + Sync + 'static,
    {
        let this = self.clone();
        Vector::wrap(
            self.n_columns(),
            View1::new(move |c| this.column_label(header_row, c)),
        )
    }

    /// The row labels at `header_column`, one per row.
    fn column(&self, header_column: Index) -> ObjVector<Self::Label>
    where
        Self: Clone + Send + Sync + 'static,
    {
        let this = self.clone();
        Vector::wrap(
            self.n_rows(),
            View1::new(move |r| this.row_label(r, header_column)),
        )
    }
}

fn grid(rows: Index, columns: Index) -> impl Iterator<Item = (Index, Index)> {
    (0..rows).flat_map(move |r| (0..columns).map(move |c| (r, c)))
}

/// Structural hash over every label: corner labels first, then column labels
/// by header row, then row labels by row.
pub fn header_hash<H: Header + ?Sized>(header: &H) -> i32 {
    let (header_rows, header_columns) = (header.n_header_rows(), header.n_header_columns());
    let corner = grid(header_rows, header_columns)
        .map(|(r, c)| header.corner_label(r, c).value_hash());
    let columns = grid(header_rows, header.n_columns())
        .map(|(r, c)| header.column_label(r, c).value_hash());
    let rows = grid(header.n_rows(), header_columns)
        .map(|(r, c)| header.row_label(r, c).value_hash());
    corner.chain(columns).chain(rows).fold(0, fold)
}

/// Whether two headers have equal dimensions and equal labels.
pub fn headers_equal<A, B>(a: &A, b: &B) -> bool
where
    A: Header + ?Sized,
    B: Header<Label = A::Label> + ?Sized,
{
    let (header_rows, header_columns) = (a.n_header_rows(), a.n_header_columns());
    let (rows, columns) = (a.n_rows(), a.n_columns());
    if header_rows != b.n_header_rows()
        || header_columns != b.n_header_columns()
        || rows != b.n_rows()
        || columns != b.n_columns()
    {
        return false;
    }

    grid(header_rows, header_columns)
        .all(|(r, c)| a.corner_label(r, c).value_eq(&b.corner_label(r, c)))
        && grid(header_rows, columns)
            .all(|(r, c)| a.column_label(r, c).value_eq(&b.column_label(r, c)))
        && grid(rows, header_columns)
            .all(|(r, c)| a.row_label(r, c).value_eq(&b.row_label(r, c)))
}

/// A header backed by label matrices.
///
/// ```
/// use matmax::frame::{DefaultHeader, Header};
///
/// let header = DefaultHeader::from_labels(vec!["a", "b"], vec!["x", "y", "z"]);
/// assert_eq!((header.n_rows(), header.n_columns()), (3, 2));
/// assert_eq!(header.column_label(0, 1), Some("b"));
/// assert_eq!(header.row_label(2, 0), Some("z"));
/// assert_eq!(header.row_label(3, 0), None);
/// ```
///
#[derive(Clone)]
pub struct DefaultHeader<L: Value> {
    corner_labels: ObjMatrix<L>,
    column_labels: ObjMatrix<L>,
    row_labels: ObjMatrix<L>,
}

impl<L: Value> DefaultHeader<L> {
    /// One header row holding `column_labels` and one header column holding
    /// `row_labels`.
    pub fn new(column_labels: ObjVector<L>, row_labels: ObjVector<L>) -> Self {
        DefaultHeader::with_matrices(column_labels.to_row(), row_labels.to_column())
    }

    pub fn from_labels(column_labels: Vec<L>, row_labels: Vec<L>) -> Self {
        let present = |labels: Vec<L>| labels.into_iter().map(Some).collect::<ObjVector<L>>();
        DefaultHeader::new(present(column_labels), present(row_labels))
    }

    /// Column labels as a `header rows x columns` matrix and row labels as a
    /// `rows x header columns` matrix, with no corner labels.
    pub fn with_matrices(column_labels: ObjMatrix<L>, row_labels: ObjMatrix<L>) -> Self {
        DefaultHeader::with_corner(View2::constant(None), column_labels, row_labels)
    }

    /// Like [`DefaultHeader::with_matrices`], reading corner labels from
    /// `corner` within the header rows and header columns.
    pub fn with_corner(
        corner: View2<Option<L>>,
        column_labels: ObjMatrix<L>,
        row_labels: ObjMatrix<L>,
    ) -> Self {
        let corner_labels = Matrix::wrap(column_labels.rows(), row_labels.columns(), corner);
        DefaultHeader {
            corner_labels,
            column_labels,
            row_labels,
        }
    }
}

impl<L: Value> Header for DefaultHeader<L> {
    type Label = L;

    fn corner_label(&self, header_row: Index, header_column: Index) -> Option<L> {
        self.corner_labels.value(header_row, header_column)
    }

    fn column_label(&self, header_row: Index, column: Index) -> Option<L> {
        self.column_labels.value(header_row, column)
    }

    fn row_label(&self, row: Index, header_column: Index) -> Option<L> {
        self.row_labels.value(row, header_column)
    }

    fn n_header_rows(&self) -> Index {
        self.column_labels.rows()
    }

    fn n_header_columns(&self) -> Index {
        self.row_labels.columns()
    }

    fn n_rows(&self) -> Index {
        self.row_labels.rows()
    }

    fn n_columns(&self) -> Index {
        self.column_labels.columns()
    }

    fn row(&self, header_row: Index) -> ObjVector<L> {
        self.column_labels.row(header_row)
    }

    fn column(&self, header_column: Index) -> ObjVector<L> {
        self.row_labels.column(header_column)
    }
}

impl<L: Value> PartialEq for DefaultHeader<L> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || headers_equal(self, other)
    }
}

impl<L: Value> Eq for DefaultHeader<L> {}

impl<L: Value> std::hash::Hash for DefaultHeader<L> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(header_hash(self))
    }
}

impl<L: Value> fmt::Debug for DefaultHeader<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultHeader")
            .field("header_rows", &self.n_header_rows())
            .field("header_columns", &self.n_header_columns())
            .field("rows", &self.n_rows())
            .field("columns", &self.n_columns())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_by_three() -> DefaultHeader<String> {
        let labels = |prefix: &str| (0..3).map(|i| format!("{prefix}{i}")).collect::<Vec<_>>();
        let corner = View2::new(|r, c| (r == 0 && c == 0).then(|| "id".to_string()));
        let column_labels = ObjVector::from(labels("col").into_iter().map(Some).collect::<Vec<_>>());
        let row_labels = ObjVector::from(labels("row").into_iter().map(Some).collect::<Vec<_>>());
        DefaultHeader::with_corner(corner, column_labels.to_row(), row_labels.to_column())
    }

    #[test]
    fn independently_built_headers_are_equal() {
        let a = three_by_three();
        let b = three_by_three();
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(header_hash(&a), header_hash(&b));
        assert_eq!(a.corner_label(0, 0), Some("id".to_string()));
        assert_eq!(a.corner_label(1, 0), None);
    }

    #[test]
    fn one_by_one_header() {
        let a = DefaultHeader::from_labels(vec!["c".to_string()], vec!["r".to_string()]);
        let b = DefaultHeader::from_labels(vec!["c".to_string()], vec!["r".to_string()]);
        assert_eq!(a, b);
        assert_eq!(
            header_hash(&a),
            fold(fold(fold(0, None::<String>.value_hash()), "c".value_hash()), "r".value_hash())
        );
    }

    #[test]
    fn debug_shows_dimensions() {
        let header = DefaultHeader::from_labels(vec!["a", "b"], vec!["x", "y", "z"]);
        assert_eq!(
            format!("{header:?}"),
            "DefaultHeader { header_rows: 1, header_columns: 1, rows: 3, columns: 2 }"
        );
    }

    #[test]
    fn labels_and_dimensions_must_match() {
        let base = DefaultHeader::from_labels(vec!["a", "b"], vec!["x"]);
        assert_ne!(base, DefaultHeader::from_labels(vec!["a", "c"], vec!["x"]));
        assert_ne!(base, DefaultHeader::from_labels(vec!["a", "b"], vec!["y"]));
        assert_ne!(base, DefaultHeader::from_labels(vec!["a", "b", "c"], vec!["x"]));
        assert_ne!(
            base,
            DefaultHeader::with_matrices(
                ObjMatrix::from(vec![vec![Some("a"), Some("b")]]),
                ObjMatrix::from(vec![vec![Some("x"), Some("x")]]),
            )
        );
    }

    #[test]
    fn missing_labels_compare_null_safely() {
        let with_gap = DefaultHeader::new(
            ObjVector::from(vec![Some(1), None]),
            ObjVector::from(vec![None]),
        );
        let same = DefaultHeader::new(
            ObjVector::from(vec![Some(1), None]),
            ObjVector::from(vec![None]),
        );
        assert_eq!(with_gap, same);
        assert_eq!(header_hash(&with_gap), header_hash(&same));
    }

    #[test]
    fn bands_project_to_vectors() {
        let header = three_by_three();
        let row = header.row(0);
        let column = header.column(0);
        assert_eq!(row.len(), 3);
        assert_eq!(column.len(), 3);
        assert_eq!(row.value(2), Some("col2".to_string()));
        assert_eq!(column.value(1), Some("row1".to_string()));
        assert_eq!(header.row(1).value(0), None);
    }

    #[test]
    fn column_band_has_row_count_elements() {
        #[derive(Clone)]
        struct Wide;

        impl Header for Wide {
            type Label = i32;
            fn corner_label(&self, _: Index, _: Index) -> Option<i32> {
                None
            }
            fn column_label(&self, _: Index, column: Index) -> Option<i32> {
                Some(column)
            }
            fn row_label(&self, row: Index, _: Index) -> Option<i32> {
                Some(-row)
            }
            fn n_header_rows(&self) -> Index {
                1
            }
            fn n_header_columns(&self) -> Index {
                1
            }
            fn n_rows(&self) -> Index {
                2
            }
            fn n_columns(&self) -> Index {
                5
            }
        }

        assert_eq!(Wide.row(0).len(), 5);
        assert_eq!(Wide.column(0).to_vec(), vec![Some(0), Some(-1)]);
        let default = DefaultHeader::new(Wide.row(0), Wide.column(0));
        assert!(headers_equal(&Wide, &default));
        assert_eq!(header_hash(&Wide), header_hash(&default));
    }
}

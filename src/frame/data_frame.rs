use std::fmt;

use tracing::debug;

use super::header::{headers_equal, Header};
use crate::container::{Matrix, ObjVector};
use crate::error::Error;
use crate::indexed::{Element, Index, View2};

/// A matrix of values addressed through a [`Header`].
///
/// The data has as many rows as the header has row labels and as many columns
/// as it has column labels.
///
#[derive(Clone)]
pub struct DataFrame<T: Element, H: Header> {
    header: H,
    data: Matrix<T>,
}

impl<T, H> DataFrame<T, H>
where
    T: Element,
    H: Header + Clone + Send + Sync + 'static,
{
    pub fn new(header: H, data: View2<T>) -> Self {
        let data = Matrix::wrap(header.n_rows(), header.n_columns(), data);
        DataFrame { header, data }
    }

    pub fn header(&self) -> &H {
        &self.header
    }

    pub fn data(&self) -> &Matrix<T> {
        &self.data
    }

    pub fn n_rows(&self) -> Index {
        self.data.rows()
    }

    pub fn n_columns(&self) -> Index {
        self.data.columns()
    }

    pub fn value(&self, row: Index, column: Index) -> T {
        self.data.value(row, column)
    }

    /// The first header row: one label per column.
    pub fn header_row(&self) -> ObjVector<H::Label> {
        self.header.row(0)
    }

    /// The first header column: one label per row.
    pub fn header_column(&self) -> ObjVector<H::Label> {
        self.header.column(0)
    }

    /// Frames have the same shape when their headers are equal.
    pub fn has_same_shape_as<U, G>(&self, other: &DataFrame<U, G>) -> bool
    where
        U: Element,
        G: Header<Label = H::Label> + Clone + Send + Sync + 'static,
    {
        self.has_header(other.header())
    }

    pub fn has_header<G>(&self, header: &G) -> bool
    where
        G: Header<Label = H::Label>,
    {
        headers_equal(&self.header, header)
    }

    /// This frame under `header`.
    ///
    /// Only the identity reshape is supported: a frame whose header already
    /// equals `header` is returned unchanged.
    pub fn reshape_to<G>(&self, header: &G) -> Result<Self, Error>
    where
        G: Header<Label = H::Label>,
    {
        if self.has_header(header) {
            return Ok(self.clone());
        }
        debug!(
            rows = header.n_rows(),
            columns = header.n_columns(),
            "refusing to reshape data frame to a different header"
        );
        Err(Error::Unimplemented(Some("reshape_to".to_string())))
    }

    /// This frame under the header of `template`.
    pub fn reshape_like<U, G>(&self, template: &DataFrame<U, G>) -> Result<Self, Error>
    where
        U: Element,
        G: Header<Label = H::Label> + Clone + Send + Sync + 'static,
    {
        self.reshape_to(template.header())
    }

    pub fn materialize(&self) -> Self {
        DataFrame {
            header: self.header.clone(),
            data: self.data.materialize(),
        }
    }
}

impl<T: Element, H: Header> fmt::Display for DataFrame<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}DataFrame:{}x{}",
            T::KIND.type_prefix(),
            self.data.rows(),
            self.data.columns()
        )
    }
}

impl<T: Element, H: Header> fmt::Debug for DataFrame<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::DefaultHeader;

    fn prices() -> DataFrame<f64, DefaultHeader<&'static str>> {
        let header = DefaultHeader::from_labels(vec!["bid", "ask"], vec!["AAA", "BBB", "CCC"]);
        DataFrame::new(header, View2::new(|r, c| f64::from(r * 2 + c)))
    }

    #[test]
    fn data_follows_header_shape() {
        let frame = prices();
        assert_eq!((frame.n_rows(), frame.n_columns()), (3, 2));
        assert_eq!(frame.value(2, 1), 5.0);
        assert!(frame.value(3, 0).is_nan());
        assert_eq!(frame.to_string(), "DoubleDataFrame:3x2");
    }

    #[test]
    fn header_bands() {
        let frame = prices();
        assert_eq!(frame.header_row().to_vec(), vec![Some("bid"), Some("ask")]);
        assert_eq!(frame.header_column().len(), 3);
        assert_eq!(frame.header_column().value(1), Some("BBB"));
    }

    #[test]
    fn shape_compatibility_is_header_equality() {
        let frame = prices();
        let counts: DataFrame<i32, _> = DataFrame::new(
            DefaultHeader::from_labels(vec!["bid", "ask"], vec!["AAA", "BBB", "CCC"]),
            View2::constant(1),
        );
        assert!(frame.has_same_shape_as(&counts));

        let other = DataFrame::new(
            DefaultHeader::from_labels(vec!["bid", "ask"], vec!["AAA", "BBB"]),
            View2::constant(0.0),
        );
        assert!(!frame.has_same_shape_as(&other));
    }

    #[test]
    fn reshape_to_equal_header_is_identity() {
        let frame = prices();
        let same = frame.reshape_to(&frame.header().clone()).unwrap();
        assert_eq!(same.data(), frame.data());
        assert!(frame.reshape_like(&frame).is_ok());
    }

    #[test]
    fn reshape_to_other_header_is_unimplemented() {
        let frame = prices();
        let wider = DefaultHeader::from_labels(vec!["bid", "ask", "last"], vec!["AAA"]);
        assert_eq!(
            frame.reshape_to(&wider).unwrap_err(),
            Error::Unimplemented(Some("reshape_to".to_string()))
        );
    }

    #[test]
    fn materialized_frames_keep_values() {
        let frame = prices().materialize();
        assert!(frame.data().is_materialized());
        assert_eq!(frame.data().to_vec(), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }
}

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::hash;
use super::iterators::{IntoIter, Iter};
use super::Matrix;
use crate::error::Error;
use crate::indexed::{index_len, Element, Index, Kind, View1, View2};
use crate::operand::Operand;

#[derive(Clone)]
enum Data<T> {
    Lazy(View1<T>),
    Materialized(Arc<[T]>),
}

/// Vector
///
/// A view with a length. Reads at positions in `0..len` go to the backing
/// view (or the materialized values); every other position answers the
/// element kind's absent value without touching the view.
///
/// ```
/// use matmax::container::IntVector;
/// use matmax::indexed::View1;
///
/// let v = IntVector::new(3, View1::new(|i| i * 10)).unwrap();
/// assert_eq!(v.value(2), 20);
/// assert_eq!(v.value(3), 0);
/// assert_eq!(v.value(-1), 0);
/// ```
///
#[derive(Clone)]
pub struct Vector<T: Element> {
    len: Index,
    data: Data<T>,
}

impl<T: Element> Vector<T> {
    pub fn new(len: Index, view: View1<T>) -> Result<Self, Error> {
        if len < 0 {
            debug!(len, "rejected vector with negative length");
            return Err(Error::NegativeLength(len));
        }
        Ok(Vector::wrap(len, view))
    }

    pub fn from_fn<F>(len: Index, f: F) -> Result<Self, Error>
    where
        F: Fn(Index) -> T + Send + Sync + 'static,
    {
        Vector::new(len, View1::new(f))
    }

    pub fn constant(len: Index, value: T) -> Result<Self, Error> {
        Vector::new(len, View1::constant(value))
    }

    /// Wrap a view whose length is already known to be valid.
    pub(crate) fn wrap(len: Index, view: View1<T>) -> Self {
        Vector {
            len,
            data: Data::Lazy(view),
        }
    }

    #[inline]
    pub fn len(&self) -> Index {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn kind(&self) -> Kind {
        T::KIND
    }

    pub fn value(&self, index: Index) -> T {
        if index < 0 || index >= self.len {
            return T::absent();
        }

        match &self.data {
            Data::Lazy(view) => view.value(index),
            Data::Materialized(values) => values[index as usize].clone(),
        }
    }

    pub fn is_materialized(&self) -> bool {
        matches!(self.data, Data::Materialized(_))
    }

    /// Materialize a Vector
    ///
    /// Read every in-bounds value once and keep the results, so that later
    /// reads no longer evaluate the backing view. Materializing an already
    /// materialized vector shares its values and reads nothing.
    ///
    pub fn materialize(&self) -> Self {
        match &self.data {
            Data::Materialized(_) => self.clone(),
            Data::Lazy(view) => {
                let kind = T::KIND;
                debug!(len = self.len, %kind, "materializing vector");
                let values: Arc<[T]> = (0..self.len).map(|i| view.value(i)).collect();
                Vector {
                    len: self.len,
                    data: Data::Materialized(values),
                }
            }
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Position of the first value equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<Index> {
        self.index_matching(|x| x.value_eq(value))
    }

    /// Position of the first value satisfying `predicate`.
    pub fn index_matching<F>(&self, predicate: F) -> Option<Index>
    where
        F: Fn(&T) -> bool,
    {
        (0..self.len).find(|&i| predicate(&self.value(i)))
    }

    /// View this vector as a matrix with a single row.
    pub fn to_row(&self) -> Matrix<T> {
        let this = self.clone();
        Matrix::wrap(1, self.len, View2::new(move |_, c| this.value(c)))
    }

    /// View this vector as a matrix with a single column.
    pub fn to_column(&self) -> Matrix<T> {
        let this = self.clone();
        Matrix::wrap(self.len, 1, View2::new(move |r, _| this.value(r)))
    }

    pub fn convert<U, F>(&self, f: F) -> Vector<U>
    where
        U: Element,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        Vector::wrap(self.len, self.as_view().convert(f))
    }

    /// Sampled structural hash, consistent with equality.
    pub fn hash_code(&self) -> i32 {
        hash::hash_1d(self.len, |i| self.value(i))
    }
}

impl<T: Element> Operand for Vector<T> {
    type Elem = T;
    type View = View1<T>;

    fn as_view(&self) -> View1<T> {
        let this = self.clone();
        View1::new(move |i| this.value(i))
    }

    fn with_view(&self, view: View1<T>) -> Self {
        Vector::wrap(self.len, view)
    }
}

impl<T: Element> From<Vec<T>> for Vector<T> {
    /// # Panics
    ///
    /// If `values` holds more than `Index::MAX` elements.
    fn from(values: Vec<T>) -> Self {
        Vector {
            len: index_len(values.len()),
            data: Data::Materialized(values.into()),
        }
    }
}

impl<T: Element> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Element> From<Vector<T>> for View1<T> {
    fn from(value: Vector<T>) -> Self {
        value.as_view()
    }
}

impl<T: Element> From<&Vector<T>> for View1<T> {
    fn from(value: &Vector<T>) -> Self {
        value.as_view()
    }
}

impl<'a, T: Element> IntoIterator for &'a Vector<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Element> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<T: Element> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || hash::equal_1d(self.len, |i| self.value(i), other.len, |i| other.value(i))
    }
}

impl<T: Element> Eq for Vector<T> {}

impl<T: Element> std::hash::Hash for Vector<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code())
    }
}

impl<T: Element> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Vector:{}", T::KIND.type_prefix(), self.len)
    }
}

impl<T: Element> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MAX_PRINT: Index = 20;
        write!(f, "{self} ")?;
        f.debug_list()
            .entries(self.iter().take(MAX_PRINT as usize))
            .finish()?;
        if self.len > MAX_PRINT {
            write!(f, " [ omitting {} entries ]", self.len - MAX_PRINT)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{BoolVector, DoubleVector, IntVector, ObjVector};
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counted(len: Index) -> (IntVector, Arc<AtomicUsize>) {
        let reads = Arc::new(AtomicUsize::new(0));
        let counter = reads.clone();
        let v = IntVector::from_fn(len, move |i| {
            counter.fetch_add(1, Ordering::SeqCst);
            i + 1
        })
        .unwrap();
        (v, reads)
    }

    #[test]
    fn negative_length_is_rejected() {
        assert_eq!(
            IntVector::from_fn(-1, |i| i).unwrap_err(),
            Error::NegativeLength(-1)
        );
        assert!(IntVector::from_fn(0, |i| i).unwrap().is_empty());
    }

    #[test]
    fn out_of_range_reads_never_touch_the_view() {
        let v = DoubleVector::from_fn(3, |i| {
            assert!((0..3).contains(&i), "view read at {i}");
            f64::from(i)
        })
        .unwrap();
        assert!(v.value(-1).is_nan());
        assert!(v.value(3).is_nan());
        assert!(v.value(Index::MIN).is_nan());
        assert_eq!(v.value(2), 2.0);

        let b = BoolVector::from_fn(2, |i| {
            assert!(i < 2);
            true
        })
        .unwrap();
        assert!(!b.value(2));

        let o: ObjVector<String> = vec![Some("a".to_string())].into();
        assert_eq!(o.value(1), None);
    }

    #[test]
    fn materialize_reads_each_value_once() {
        let (v, reads) = counted(4);
        let m = v.materialize();
        assert_eq!(reads.load(Ordering::SeqCst), 4);
        assert!(m.is_materialized());

        let again = m.materialize();
        assert_eq!(m.to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(again.to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(reads.load(Ordering::SeqCst), 4);
        assert_eq!(again, v);
    }

    #[test]
    fn lazy_reads_recompute() {
        let (v, reads) = counted(2);
        v.value(0);
        v.value(0);
        assert_eq!(reads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn to_bool_then_materialize() {
        let v = IntVector::from(vec![1, 2, 3]);
        let b = v.to_bool(|x| x > 1).materialize();
        assert_eq!(b, BoolVector::from(vec![false, true, true]));
        assert_eq!(b.to_vec(), vec![false, true, true]);
    }

    #[test]
    fn nan_aware_equality() {
        let a = DoubleVector::from(vec![f64::NAN, 1.0, f64::NAN]);
        let b = DoubleVector::from(vec![f64::NAN, 1.0, f64::NAN]);
        let c = DoubleVector::from(vec![f64::NAN, 1.0, 2.0]);
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.hash_code(), b.hash_code());
        assert_eq!(a.hash_code(), -1610523363);

        let zero = DoubleVector::from(vec![0.0]);
        let negative_zero = DoubleVector::from(vec![-0.0]);
        assert_ne!(zero, negative_zero);
    }

    #[test]
    fn lazy_and_materialized_agree() {
        let lazy = IntVector::from_fn(25, |i| i * i).unwrap();
        let materialized = lazy.materialize();
        assert_eq!(lazy, materialized);
        assert_eq!(lazy.hash_code(), materialized.hash_code());
    }

    #[test]
    fn known_hashes() {
        assert_eq!(IntVector::from(vec![1, 2, 3]).hash_code(), 90399);
        assert_eq!(IntVector::from(vec![]).hash_code(), 0);
        assert_eq!(BoolVector::from(vec![false, true, true]).hash_code(), 1317522);
    }

    #[test]
    fn hash_distinguishes_lengths() {
        let hashes: HashSet<i32> = (0..50)
            .map(|n| IntVector::constant(n, 0).unwrap().hash_code())
            .collect();
        assert_eq!(hashes.len(), 50);
    }

    #[test]
    fn iteration_is_restartable() {
        let v = IntVector::from_fn(3, |i| i).unwrap();
        let first: Vec<_> = v.iter().collect();
        let second: Vec<_> = (&v).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(v.iter().len(), 3);
        assert_eq!(v.into_iter().sum::<i32>(), 3);
    }

    #[test]
    fn searching() {
        let v = IntVector::from(vec![4, 8, 15, 16, 23, 42]);
        assert_eq!(v.index_of(&15), Some(2));
        assert_eq!(v.index_of(&7), None);
        assert_eq!(v.index_matching(|x| x % 2 == 1), Some(2));

        let d = DoubleVector::from(vec![1.0, f64::NAN]);
        assert_eq!(d.index_of(&f64::NAN), Some(1));
    }

    #[test]
    fn row_and_column_matrices() {
        let v = IntVector::from(vec![1, 2, 3]);
        let row = v.to_row();
        let column = v.to_column();
        assert_eq!((row.rows(), row.columns()), (1, 3));
        assert_eq!((column.rows(), column.columns()), (3, 1));
        assert_eq!(row.value(0, 2), 3);
        assert_eq!(column.value(2, 0), 3);
        assert_eq!(column.value(0, 1), 0);
    }

    #[test]
    fn display_names_kind_and_length() {
        let v = DoubleVector::from(vec![1.0, 2.0, 3.0]);
        assert_eq!(v.to_string(), "DoubleVector:3");
        assert_eq!(format!("{v:?}"), "DoubleVector:3 [1.0, 2.0, 3.0]");
        let o: ObjVector<String> = ObjVector::constant(2, None).unwrap();
        assert_eq!(o.to_string(), "ObjVector:2");
    }

    #[test]
    fn shared_between_threads() {
        let v = IntVector::from_fn(1000, |i| i * 2).unwrap();
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let v = v.clone();
                std::thread::spawn(move || (0..250).map(|i| v.value(t * 250 + i)).sum::<i32>())
            })
            .collect();
        let total: i32 = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(total, (0..1000).map(|i| i * 2).sum::<i32>());
    }

    #[test]
    fn random_lazy_and_materialized_vectors_agree() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let len = rng.gen_range(0..200);
            let values: Vec<f64> = (0..len)
                .map(|_| match rng.gen_range(0..4) {
                    0 => f64::NAN,
                    _ => rng.gen_range(-100.0..100.0),
                })
                .collect();
            let shared: Arc<[f64]> = values.clone().into();
            let lazy = DoubleVector::from_fn(len, move |i| shared[i as usize]).unwrap();
            let materialized = DoubleVector::from(values);

            assert_eq!(lazy, lazy);
            assert_eq!(lazy, materialized);
            assert_eq!(lazy.hash_code(), materialized.hash_code());
            assert_eq!(lazy.materialize().hash_code(), lazy.hash_code());
        }
    }
}

/// Operand Algebra
///
/// Every view and container is an [`Operand`]: it can hand out a view of its
/// values, and wrap a derived view back into its own shape. Everything else
/// (unary transforms, elementwise maps, binary combination) is built on top
/// of that pair and stays lazy. No source value is read until the resulting
/// operand is itself read.
///
use crate::indexed::{Index, View1, View2};

mod logical;
pub use logical::*;

mod arith;
pub use arith::*;

pub mod functions;

/// Views that can be transformed value by value.
pub trait Indexed: Clone + Send + Sync + 'static {
    type Elem;

    fn map_values<F>(&self, f: F) -> Self
    where
        F: Fn(Self::Elem) -> Self::Elem + Send + Sync + 'static;

    fn zip_values<F>(&self, other: &Self, f: F) -> Self
    where
        F: Fn(Self::Elem, Self::Elem) -> Self::Elem + Send + Sync + 'static;
}

impl<T: 'static> Indexed for View1<T> {
    type Elem = T;

    fn map_values<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.convert(f)
    }

    fn zip_values<F>(&self, other: &Self, f: F) -> Self
    where
        F: Fn(T, T) -> T + Send + Sync + 'static,
    {
        let (a, b) = (self.clone(), other.clone());
        View1::new(move |i: Index| f(a.value(i), b.value(i)))
    }
}

impl<T: 'static> Indexed for View2<T> {
    type Elem = T;

    fn map_values<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.convert(f)
    }

    fn zip_values<F>(&self, other: &Self, f: F) -> Self
    where
        F: Fn(T, T) -> T + Send + Sync + 'static,
    {
        let (a, b) = (self.clone(), other.clone());
        View2::new(move |r: Index, c: Index| f(a.value(r, c), b.value(r, c)))
    }
}

pub trait Operand: Clone {
    type Elem;
    type View: Indexed<Elem = Self::Elem>;

    /// A view reading this operand's values.
    fn as_view(&self) -> Self::View;

    /// Wrap `view` in the same shape as `self`.
    fn with_view(&self, view: Self::View) -> Self;

    /// Transform the whole view at once.
    ///
    /// ```
    /// use matmax::container::DoubleVector;
    /// use matmax::operand::Operand;
    ///
    /// let v = DoubleVector::from(vec![1.0, 2.0, 3.0]);
    /// let lagged = v.apply(|view| view.shift(1));
    /// assert!(lagged.value(0).is_nan());
    /// assert_eq!(lagged.value(1), 1.0);
    /// ```
    ///
    fn apply<F>(&self, f: F) -> Self
    where
        F: FnOnce(Self::View) -> Self::View,
    {
        self.with_view(f(self.as_view()))
    }

    /// Transform each value independently.
    fn map<F>(&self, f: F) -> Self
    where
        F: Fn(Self::Elem) -> Self::Elem + Send + Sync + 'static,
    {
        self.apply(|view| view.map_values(f))
    }

    /// Pair this operand with `other`, ready to be combined by a binary
    /// operator. The returned [`Combiner`] can be used with several operators.
    fn combine_with(&self, other: impl Into<Self::View>) -> Combiner<Self> {
        Combiner {
            first: self.clone(),
            second: other.into(),
        }
    }
}

/// An operand waiting for the operator that combines it with a second view.
#[derive(Clone)]
pub struct Combiner<O: Operand> {
    first: O,
    second: O::View,
}

impl<O: Operand> Combiner<O> {
    /// Combine elementwise, `op(first[i], second[i])`.
    ///
    /// ```
    /// use matmax::container::IntVector;
    /// use matmax::operand::Operand;
    ///
    /// let a = IntVector::from(vec![1, 2, 3]);
    /// let b = IntVector::from(vec![10, 20, 30]);
    /// let pair = a.combine_with(b);
    /// assert_eq!(pair.using(|x, y| x + y).to_vec(), vec![11, 22, 33]);
    /// assert_eq!(pair.using(|x, y| y - x).to_vec(), vec![9, 18, 27]);
    /// ```
    ///
    pub fn using<F>(&self, op: F) -> O
    where
        F: Fn(O::Elem, O::Elem) -> O::Elem + Send + Sync + 'static,
    {
        self.first.apply(|view| view.zip_values(&self.second, op))
    }

    /// Combine the two views as wholes.
    pub fn apply<F>(&self, f: F) -> O
    where
        F: FnOnce(O::View, O::View) -> O::View,
    {
        self.first
            .with_view(f(self.first.as_view(), self.second.clone()))
    }
}

impl<T: 'static> Operand for View1<T> {
    type Elem = T;
    type View = View1<T>;

    fn as_view(&self) -> View1<T> {
        self.clone()
    }

    fn with_view(&self, view: View1<T>) -> Self {
        view
    }
}

impl<T: 'static> Operand for View2<T> {
    type Elem = T;
    type View = View2<T>;

    fn as_view(&self) -> View2<T> {
        self.clone()
    }

    fn with_view(&self, view: View2<T>) -> Self {
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn apply_hands_over_the_view() {
        let v = View1::new(|i| i).apply(|view| view.shift(-1));
        assert_eq!(v.value(0), 1);
    }

    #[test]
    fn combiners_are_reusable() {
        let a = View2::new(|r, c| r + c);
        let pair = a.combine_with(View2::constant(2));
        let sum = pair.using(|x, y| x + y);
        let product = pair.using(|x, y| x * y);
        assert_eq!(sum.value(1, 1), 4);
        assert_eq!(product.value(1, 1), 4);
        assert_eq!(product.value(3, 0), 6);
    }

    #[test]
    fn combining_whole_views() {
        let a = View1::new(|i| i);
        let b = View1::new(|i| i * 10);
        let interleaved = a
            .combine_with(b)
            .apply(|x, y| View1::new(move |i| if i % 2 == 0 { x.value(i) } else { y.value(i) }));
        assert_eq!(interleaved.value(2), 2);
        assert_eq!(interleaved.value(3), 30);
    }

    #[test]
    fn composition_reads_nothing_until_read() {
        let reads = Arc::new(AtomicUsize::new(0));
        let counter = reads.clone();
        let source = View1::new(move |i| {
            counter.fetch_add(1, Ordering::SeqCst);
            i
        });

        let derived = source
            .map(|x| x * 3)
            .combine_with(View1::new(|i| i))
            .using(|x, y| x - y);
        assert_eq!(reads.load(Ordering::SeqCst), 0);

        assert_eq!(derived.value(5), 10);
        assert_eq!(reads.load(Ordering::SeqCst), 1);
    }
}

//! Ready-made functions for [`Operand::map`](super::Operand::map) and
//! [`Operand::apply`](super::Operand::apply) on floating point and matrix
//! operands.

use crate::indexed::{Index, View2};

pub fn negate(x: f64) -> f64 {
    -x
}

pub fn invert(x: f64) -> f64 {
    1.0 / x
}

/// Sign of `x`; zeros and NaN are returned as they are.
pub fn signum(x: f64) -> f64 {
    if x == 0.0 || x.is_nan() {
        x
    } else {
        x.signum()
    }
}

pub fn abs(x: f64) -> f64 {
    x.abs()
}

pub fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

pub fn add(summand: f64) -> impl Fn(f64) -> f64 + Copy + Send + Sync + 'static {
    move |x| x + summand
}

pub fn subtract(subtrahend: f64) -> impl Fn(f64) -> f64 + Copy + Send + Sync + 'static {
    move |x| x - subtrahend
}

pub fn multiply(factor: f64) -> impl Fn(f64) -> f64 + Copy + Send + Sync + 'static {
    move |x| x * factor
}

pub fn divide(divisor: f64) -> impl Fn(f64) -> f64 + Copy + Send + Sync + 'static {
    move |x| x / divisor
}

pub fn pow(exponent: f64) -> impl Fn(f64) -> f64 + Copy + Send + Sync + 'static {
    move |x| x.powf(exponent)
}

/// Read `(column, row)` for `(row, column)`.
///
/// Applied to a matrix this keeps the matrix's own dimensions; use
/// [`Matrix::transpose`](crate::container::Matrix::transpose) to swap them.
pub fn transpose<T: 'static>(view: View2<T>) -> View2<T> {
    view.transpose()
}

/// Shift a view down by `rows` and right by `columns`.
///
/// ```
/// use matmax::container::DoubleMatrix;
/// use matmax::operand::{functions, Operand};
///
/// let m = DoubleMatrix::from(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
/// let lagged = m.apply(functions::lag(1, 0));
/// assert!(lagged.value(0, 0).is_nan());
/// assert_eq!(lagged.value(1, 1), 2.0);
/// ```
///
pub fn lag<T: 'static>(rows: Index, columns: Index) -> impl FnOnce(View2<T>) -> View2<T> {
    move |view| view.shift(rows, columns)
}

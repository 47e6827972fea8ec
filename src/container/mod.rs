pub mod hash;

mod iterators;
pub use iterators::*;

mod vector;
pub use vector::*;

mod matrix;
pub use matrix::*;

mod any;
pub use any::*;

mod print;

pub type BoolVector = Vector<bool>;
pub type IntVector = Vector<i32>;
pub type LongVector = Vector<i64>;
pub type DoubleVector = Vector<f64>;
pub type ObjVector<V> = Vector<Option<V>>;

pub type BoolMatrix = Matrix<bool>;
pub type IntMatrix = Matrix<i32>;
pub type LongMatrix = Matrix<i64>;
pub type DoubleMatrix = Matrix<f64>;
pub type ObjMatrix<V> = Matrix<Option<V>>;

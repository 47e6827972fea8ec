mod element;
pub use element::*;

mod view1;
pub use view1::*;

mod view2;
pub use view2::*;

mod conversion;

pub type Bool1D = View1<bool>;
pub type Int1D = View1<i32>;
pub type Long1D = View1<i64>;
pub type Double1D = View1<f64>;
pub type Obj1D<V> = View1<Option<V>>;

pub type Bool2D = View2<bool>;
pub type Int2D = View2<i32>;
pub type Long2D = View2<i64>;
pub type Double2D = View2<f64>;
pub type Obj2D<V> = View2<Option<V>>;

lazy_static::lazy_static! {
    pub static ref TRUE: Bool1D = View1::constant(true);
    pub static ref FALSE: Bool1D = View1::constant(false);
    pub static ref ZERO: Int1D = View1::constant(0);
    pub static ref ONE: Int1D = View1::constant(1);
}

use std::ops;

use super::{BoolOperand, Operand};
use crate::container::{Matrix, Vector};
use crate::indexed::{Element, View1, View2};

/// Numeric element arithmetic.
///
/// Integers wrap on overflow. Integer division or remainder by zero panics
/// when the element is read. Floating point follows IEEE-754.
pub trait Arith: Element + Copy {
    fn add(self, rhs: Self) -> Self;
    fn sub(self, rhs: Self) -> Self;
    fn mul(self, rhs: Self) -> Self;
    fn div(self, rhs: Self) -> Self;
    fn rem(self, rhs: Self) -> Self;
    fn neg(self) -> Self;
}

macro_rules! wrapping_arith {
    ($($t:ty),*) => {$(
        impl Arith for $t {
            fn add(self, rhs: Self) -> Self { self.wrapping_add(rhs) }
            fn sub(self, rhs: Self) -> Self { self.wrapping_sub(rhs) }
            fn mul(self, rhs: Self) -> Self { self.wrapping_mul(rhs) }
            fn div(self, rhs: Self) -> Self { self.wrapping_div(rhs) }
            fn rem(self, rhs: Self) -> Self { self.wrapping_rem(rhs) }
            fn neg(self) -> Self { self.wrapping_neg() }
        }
    )*};
}

wrapping_arith!(i32, i64);

impl Arith for f64 {
    fn add(self, rhs: Self) -> Self {
        self + rhs
    }
    fn sub(self, rhs: Self) -> Self {
        self - rhs
    }
    fn mul(self, rhs: Self) -> Self {
        self * rhs
    }
    fn div(self, rhs: Self) -> Self {
        self / rhs
    }
    fn rem(self, rhs: Self) -> Self {
        self % rhs
    }
    fn neg(self) -> Self {
        -self
    }
}

macro_rules! operators {
    ($($shape:ident),*) => {$(
        impl<T: Arith> ops::Add for $shape<T> {
            type Output = $shape<T>;
            fn add(self, rhs: Self) -> Self::Output {
                self.combine_with(rhs).using(<T as Arith>::add)
            }
        }

        impl<T: Arith> ops::Sub for $shape<T> {
            type Output = $shape<T>;
            fn sub(self, rhs: Self) -> Self::Output {
                self.combine_with(rhs).using(<T as Arith>::sub)
            }
        }

        impl<T: Arith> ops::Mul for $shape<T> {
            type Output = $shape<T>;
            fn mul(self, rhs: Self) -> Self::Output {
                self.combine_with(rhs).using(<T as Arith>::mul)
            }
        }

        impl<T: Arith> ops::Div for $shape<T> {
            type Output = $shape<T>;
            fn div(self, rhs: Self) -> Self::Output {
                self.combine_with(rhs).using(<T as Arith>::div)
            }
        }

        impl<T: Arith> ops::Rem for $shape<T> {
            type Output = $shape<T>;
            fn rem(self, rhs: Self) -> Self::Output {
                self.combine_with(rhs).using(<T as Arith>::rem)
            }
        }

        impl<T: Arith> ops::Neg for $shape<T> {
            type Output = $shape<T>;
            fn neg(self) -> Self::Output {
                self.map(<T as Arith>::neg)
            }
        }

        impl ops::Not for $shape<bool> {
            type Output = $shape<bool>;
            fn not(self) -> Self::Output {
                self.negate()
            }
        }

        impl ops::BitAnd for $shape<bool> {
            type Output = $shape<bool>;
            fn bitand(self, rhs: Self) -> Self::Output {
                self.and(rhs)
            }
        }

        impl ops::BitOr for $shape<bool> {
            type Output = $shape<bool>;
            fn bitor(self, rhs: Self) -> Self::Output {
                self.or(rhs)
            }
        }

        impl ops::BitXor for $shape<bool> {
            type Output = $shape<bool>;
            fn bitxor(self, rhs: Self) -> Self::Output {
                self.xor(rhs)
            }
        }
    )*};
}

operators!(View1, View2, Vector, Matrix);

#[cfg(test)]
mod tests {
    use crate::container::{BoolMatrix, DoubleVector, IntVector, LongVector};
    use crate::indexed::View1;

    #[test]
    fn integers_wrap() {
        let v = IntVector::from(vec![i32::MAX, i32::MIN]);
        let one = IntVector::from(vec![1, 1]);
        assert_eq!((v.clone() + one.clone()).to_vec(), vec![i32::MIN, i32::MIN + 1]);
        assert_eq!((v - one).to_vec(), vec![i32::MAX - 1, i32::MAX]);

        let l = LongVector::from(vec![i64::MIN]);
        assert_eq!((-l).to_vec(), vec![i64::MIN]);
    }

    #[test]
    fn doubles_follow_ieee() {
        let v = DoubleVector::from(vec![1.0, -1.0, 0.0]);
        let zeros = DoubleVector::from(vec![0.0, 0.0, 0.0]);
        let q = (v / zeros).to_vec();
        assert_eq!(q[0], f64::INFINITY);
        assert_eq!(q[1], f64::NEG_INFINITY);
        assert!(q[2].is_nan());
    }

    #[test]
    #[should_panic]
    fn integer_division_by_zero_panics_on_read() {
        let q = IntVector::from(vec![1]) / IntVector::from(vec![0]);
        q.value(0);
    }

    #[test]
    fn result_has_left_operand_length() {
        let short = IntVector::from(vec![1, 2]);
        let long = IntVector::from(vec![10, 20, 30]);
        let sum = short + long;
        assert_eq!(sum.len(), 2);
        assert_eq!(sum.to_vec(), vec![11, 22]);
    }

    #[test]
    fn boolean_operators_on_matrices() {
        let a = BoolMatrix::from(vec![vec![true, false], vec![true, true]]);
        let b = BoolMatrix::from(vec![vec![false, false], vec![true, false]]);
        assert_eq!((a.clone() & b.clone()).to_vec(), vec![false, false, true, false]);
        assert_eq!((a.clone() | b.clone()).to_vec(), vec![true, false, true, true]);
        assert_eq!((a.clone() ^ b).to_vec(), vec![true, false, false, true]);
        assert_eq!((!a).to_vec(), vec![false, true, false, false]);
    }

    #[test]
    fn view_arithmetic() {
        let v = View1::new(|i| i as f64) * View1::constant(0.5);
        assert_eq!(v.value(3), 1.5);
        assert_eq!((-v).value(4), -2.0);
    }
}

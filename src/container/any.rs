use std::fmt;

use super::print::{print_matrix, print_vector, ToLiteral};
use super::{
    BoolMatrix, BoolVector, DoubleMatrix, DoubleVector, IntMatrix, IntVector, LongMatrix,
    LongVector, ObjMatrix, ObjVector,
};
use crate::indexed::{Index, Kind};

/// A vector of any kind, with object vectors holding strings.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyVector {
    Bool(BoolVector),
    Int(IntVector),
    Long(LongVector),
    Double(DoubleVector),
    Obj(ObjVector<String>),
}

/// A matrix of any kind, with object matrices holding strings.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyMatrix {
    Bool(BoolMatrix),
    Int(IntMatrix),
    Long(LongMatrix),
    Double(DoubleMatrix),
    Obj(ObjMatrix<String>),
}

/// A parsed container literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Vector(AnyVector),
    Matrix(AnyMatrix),
}

fn parse_or<T: std::str::FromStr>(s: Option<String>, default: T) -> T {
    s.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

// every conversion named here exists with the same signature on vectors and
// matrices, so one expansion serves both
macro_rules! cast {
    ($any:ident, $value:expr, $kind:expr) => {{
        use $any::*;
        match ($value, $kind) {
            (Bool(v), Kind::Bool) => Bool(v.clone()),
            (Bool(v), Kind::Int) => Int(v.to_int(1, 0)),
            (Bool(v), Kind::Long) => Long(v.to_long(1, 0)),
            (Bool(v), Kind::Double) => Double(v.to_double(1.0, 0.0)),
            (Bool(v), Kind::Object) => Obj(v.to_str()),

            (Int(v), Kind::Bool) => Bool(v.to_bool(|x| x != 0)),
            (Int(v), Kind::Int) => Int(v.clone()),
            (Int(v), Kind::Long) => Long(v.as_long()),
            (Int(v), Kind::Double) => Double(v.as_double()),
            (Int(v), Kind::Object) => Obj(v.to_str()),

            (Long(v), Kind::Bool) => Bool(v.to_bool(|x| x != 0)),
            (Long(v), Kind::Int) => Int(v.to_int(|x| x as i32)),
            (Long(v), Kind::Long) => Long(v.clone()),
            (Long(v), Kind::Double) => Double(v.to_double(|x| x as f64)),
            (Long(v), Kind::Object) => Obj(v.to_str()),

            (Double(v), Kind::Bool) => Bool(v.to_bool(|x| x != 0.0)),
            (Double(v), Kind::Int) => Int(v.to_int(|x| x as i32)),
            (Double(v), Kind::Long) => Long(v.to_long(|x| x as i64)),
            (Double(v), Kind::Double) => Double(v.clone()),
            (Double(v), Kind::Object) => Obj(v.to_str()),

            (Obj(v), Kind::Bool) => Bool(v.to_bool(|s| s.as_deref() == Some("true"))),
            (Obj(v), Kind::Int) => Int(v.to_int(|s| parse_or(s, 0))),
            (Obj(v), Kind::Long) => Long(v.to_long(|s| parse_or(s, 0))),
            (Obj(v), Kind::Double) => Double(v.to_double(|s| parse_or(s, f64::NAN))),
            (Obj(v), Kind::Object) => Obj(v.clone()),
        }
    }};
}

macro_rules! dispatch {
    ($any:ident, $value:expr, $v:ident => $body:expr) => {{
        use $any::*;
        match $value {
            Bool($v) => $body,
            Int($v) => $body,
            Long($v) => $body,
            Double($v) => $body,
            Obj($v) => $body,
        }
    }};
}

impl AnyVector {
    pub fn kind(&self) -> Kind {
        dispatch!(AnyVector, self, v => v.kind())
    }

    pub fn len(&self) -> Index {
        dispatch!(AnyVector, self, v => v.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hash_code(&self) -> i32 {
        dispatch!(AnyVector, self, v => v.hash_code())
    }

    pub fn materialize(&self) -> Self {
        dispatch!(AnyVector, self, v => v.materialize().into())
    }

    /// Convert every value to `kind`. Strings convert to other kinds by
    /// parsing, falling back to the target kind's zero (or NaN).
    pub fn cast(&self, kind: Kind) -> Self {
        cast!(AnyVector, self, kind)
    }

    /// The values as literal text.
    pub fn to_literals(&self) -> Vec<String> {
        dispatch!(AnyVector, self, v => v.iter().map(|x| x.to_literal()).collect())
    }
}

impl AnyMatrix {
    pub fn kind(&self) -> Kind {
        dispatch!(AnyMatrix, self, m => m.kind())
    }

    pub fn rows(&self) -> Index {
        dispatch!(AnyMatrix, self, m => m.rows())
    }

    pub fn columns(&self) -> Index {
        dispatch!(AnyMatrix, self, m => m.columns())
    }

    pub fn hash_code(&self) -> i32 {
        dispatch!(AnyMatrix, self, m => m.hash_code())
    }

    pub fn materialize(&self) -> Self {
        dispatch!(AnyMatrix, self, m => m.materialize().into())
    }

    pub fn cast(&self, kind: Kind) -> Self {
        cast!(AnyMatrix, self, kind)
    }

    pub fn transpose(&self) -> Self {
        dispatch!(AnyMatrix, self, m => m.transpose().into())
    }

    /// The cell values as literal text, row-major.
    pub fn to_literals(&self) -> Vec<String> {
        dispatch!(AnyMatrix, self, m => m.iter().map(|x| x.to_literal()).collect())
    }
}

impl Literal {
    pub fn kind(&self) -> Kind {
        match self {
            Literal::Vector(v) => v.kind(),
            Literal::Matrix(m) => m.kind(),
        }
    }

    pub fn hash_code(&self) -> i32 {
        match self {
            Literal::Vector(v) => v.hash_code(),
            Literal::Matrix(m) => m.hash_code(),
        }
    }

    pub fn cast(&self, kind: Kind) -> Self {
        match self {
            Literal::Vector(v) => Literal::Vector(v.cast(kind)),
            Literal::Matrix(m) => Literal::Matrix(m.cast(kind)),
        }
    }
}

macro_rules! from_containers {
    ($($variant:ident: $vector:ty, $matrix:ty);*) => {$(
        impl From<$vector> for AnyVector {
            fn from(value: $vector) -> Self {
                AnyVector::$variant(value)
            }
        }

        impl From<$matrix> for AnyMatrix {
            fn from(value: $matrix) -> Self {
                AnyMatrix::$variant(value)
            }
        }
    )*};
}

from_containers!(
    Bool: BoolVector, BoolMatrix;
    Int: IntVector, IntMatrix;
    Long: LongVector, LongMatrix;
    Double: DoubleVector, DoubleMatrix;
    Obj: ObjVector<String>, ObjMatrix<String>
);

impl fmt::Display for AnyVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(AnyVector, self, v => write!(f, "{v}"))?;
        if !self.is_empty() {
            writeln!(f)?;
            print_vector(f, &self.to_literals())?;
        }
        Ok(())
    }
}

impl fmt::Display for AnyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(AnyMatrix, self, m => write!(f, "{m}"))?;
        if self.rows() > 0 && self.columns() > 0 {
            writeln!(f)?;
            print_matrix(f, self.rows(), self.columns(), &self.to_literals())?;
        }
        Ok(())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Vector(v) => write!(f, "{v}"),
            Literal::Matrix(m) => write!(f, "{m}"),
        }
    }
}

use pest::iterators::Pair;
use pest::Parser;
use tracing::trace;

use crate::container::{AnyMatrix, AnyVector, Literal, Matrix, Vector};
use crate::error::Error;
use crate::indexed::{index_len, Element, Kind};
use crate::internal_err;

#[derive(pest_derive::Parser)]
#[grammar = "grammar/literal.pest"]
pub struct LiteralParser;

#[derive(Debug, Clone, PartialEq)]
enum Scalar {
    Bool(bool),
    Int(i32),
    Long(i64),
    Double(f64),
    Str(Option<String>),
}

impl Scalar {
    fn kind(&self) -> Kind {
        match self {
            Scalar::Bool(_) => Kind::Bool,
            Scalar::Int(_) => Kind::Int,
            Scalar::Long(_) => Kind::Long,
            Scalar::Double(_) => Kind::Double,
            Scalar::Str(_) => Kind::Object,
        }
    }

    fn into_bool(self) -> bool {
        match self {
            Scalar::Bool(b) => b,
            _ => bool::absent(),
        }
    }

    fn into_int(self) -> i32 {
        match self {
            Scalar::Int(i) => i,
            _ => i32::absent(),
        }
    }

    fn into_long(self) -> i64 {
        match self {
            Scalar::Int(i) => i64::from(i),
            Scalar::Long(l) => l,
            _ => i64::absent(),
        }
    }

    fn into_double(self) -> f64 {
        match self {
            Scalar::Int(i) => f64::from(i),
            Scalar::Long(l) => l as f64,
            Scalar::Double(d) => d,
            _ => f64::absent(),
        }
    }

    fn into_obj(self) -> Option<String> {
        match self {
            Scalar::Str(s) => s,
            _ => None,
        }
    }
}

/// Parse a vector or matrix literal.
///
/// ```
/// use matmax::container::{AnyMatrix, AnyVector, Literal};
/// use matmax::indexed::Kind;
/// use matmax::parser::parse_literal;
///
/// let v = parse_literal("[1, 2, 3]").unwrap();
/// assert_eq!(v.kind(), Kind::Int);
/// assert_eq!(v.hash_code(), 90399);
///
/// let m = parse_literal("[[1, 2.5], [3, NaN]]").unwrap();
/// match m {
///     Literal::Matrix(AnyMatrix::Double(m)) => assert_eq!(m.value(0, 1), 2.5),
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
///
pub fn parse_literal(input: &str) -> Result<Literal, Error> {
    let mut pairs = LiteralParser::parse(Rule::literal, input)?;
    let literal = pairs.next().map_or(internal_err!(), Ok)?;
    let body = literal.into_inner().next().map_or(internal_err!(), Ok)?;

    match body.as_rule() {
        Rule::vector => Ok(Literal::Vector(parse_vector(body)?)),
        Rule::matrix => Ok(Literal::Matrix(parse_matrix(body)?)),
        rule => Err(Error::ParseUnexpected(rule)),
    }
}

/// Parse a literal that must be a vector.
pub fn parse_vector_literal(input: &str) -> Result<AnyVector, Error> {
    match parse_literal(input)? {
        Literal::Vector(v) => Ok(v),
        Literal::Matrix(_) => Err(Error::InvalidLiteral(input.to_string())),
    }
}

/// Parse a literal that must be a matrix.
pub fn parse_matrix_literal(input: &str) -> Result<AnyMatrix, Error> {
    match parse_literal(input)? {
        Literal::Matrix(m) => Ok(m),
        Literal::Vector(_) => Err(Error::InvalidLiteral(input.to_string())),
    }
}

fn parse_vector(pair: Pair<Rule>) -> Result<AnyVector, Error> {
    let values = parse_values(pair)?;
    let kind = common_kind(values.iter().map(Scalar::kind))?;
    trace!(len = values.len(), %kind, "parsed vector literal");

    Ok(match kind {
        Kind::Bool => AnyVector::Bool(collect(values, Scalar::into_bool)),
        Kind::Int => AnyVector::Int(collect(values, Scalar::into_int)),
        Kind::Long => AnyVector::Long(collect(values, Scalar::into_long)),
        Kind::Double => AnyVector::Double(collect(values, Scalar::into_double)),
        Kind::Object => AnyVector::Obj(collect(values, Scalar::into_obj)),
    })
}

fn parse_matrix(pair: Pair<Rule>) -> Result<AnyMatrix, Error> {
    let rows = pair
        .into_inner()
        .map(parse_values)
        .collect::<Result<Vec<_>, _>>()?;

    let expected = rows.first().map_or(0, Vec::len);
    if let Some((row, found)) = rows
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != expected)
    {
        return Err(Error::RaggedMatrix {
            row: index_len(row),
            expected: index_len(expected),
            found: index_len(found),
        });
    }

    let kind = common_kind(rows.iter().flatten().map(Scalar::kind))?;
    trace!(rows = rows.len(), columns = expected, %kind, "parsed matrix literal");

    Ok(match kind {
        Kind::Bool => AnyMatrix::Bool(collect_rows(rows, Scalar::into_bool)),
        Kind::Int => AnyMatrix::Int(collect_rows(rows, Scalar::into_int)),
        Kind::Long => AnyMatrix::Long(collect_rows(rows, Scalar::into_long)),
        Kind::Double => AnyMatrix::Double(collect_rows(rows, Scalar::into_double)),
        Kind::Object => AnyMatrix::Obj(collect_rows(rows, Scalar::into_obj)),
    })
}

fn collect<T: Element>(values: Vec<Scalar>, f: fn(Scalar) -> T) -> Vector<T> {
    values.into_iter().map(f).collect()
}

fn collect_rows<T: Element>(rows: Vec<Vec<Scalar>>, f: fn(Scalar) -> T) -> Matrix<T> {
    rows.into_iter()
        .map(|row| row.into_iter().map(f).collect::<Vec<T>>())
        .collect::<Vec<_>>()
        .into()
}

/// The narrowest kind holding every value; literals without values are ints.
fn common_kind(kinds: impl Iterator<Item = Kind>) -> Result<Kind, Error> {
    kinds.fold(Ok(None), |acc: Result<Option<Kind>, Error>, kind| {
        Ok(Some(match acc? {
            None => kind,
            Some(current) if kind.widens_to(current) => current,
            Some(current) if current.widens_to(kind) => kind,
            Some(current) => return Err(Error::MixedKinds(current, kind)),
        }))
    })
    .map(|kind| kind.unwrap_or(Kind::Int))
}

fn parse_values(pair: Pair<Rule>) -> Result<Vec<Scalar>, Error> {
    pair.into_inner().map(parse_scalar).collect()
}

fn parse_scalar(pair: Pair<Rule>) -> Result<Scalar, Error> {
    let text = pair.as_str();
    let invalid = || Error::InvalidLiteral(text.to_string());

    match pair.as_rule() {
        Rule::val_true => Ok(Scalar::Bool(true)),
        Rule::val_false => Ok(Scalar::Bool(false)),
        Rule::val_null => Ok(Scalar::Str(None)),
        Rule::val_nan => Ok(Scalar::Double(f64::NAN)),
        Rule::val_inf if text.starts_with('-') => Ok(Scalar::Double(f64::NEG_INFINITY)),
        Rule::val_inf => Ok(Scalar::Double(f64::INFINITY)),
        Rule::double => text.parse().map(Scalar::Double).map_err(|_| invalid()),
        Rule::long => text
            .trim_end_matches('L')
            .parse()
            .map(Scalar::Long)
            .map_err(|_| invalid()),
        Rule::integer => match text.parse::<i32>() {
            Ok(i) => Ok(Scalar::Int(i)),
            Err(_) => text.parse().map(Scalar::Long).map_err(|_| invalid()),
        },
        Rule::string => {
            let inner = pair.into_inner().next().map_or(internal_err!(), Ok)?;
            Ok(Scalar::Str(Some(inner.as_str().to_string())))
        }
        rule => Err(Error::ParseUnexpected(rule)),
    }
}

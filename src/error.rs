use core::fmt;
use pest::error::LineColLocation::Pos;

use crate::indexed::{Index, Kind};
use crate::parser::Rule;

#[macro_export]
macro_rules! internal_err {
    () => {
        $crate::error::Error::Internal(None, std::file!(), std::line!()).into()
    };
    ( $x:expr ) => {
        $crate::error::Error::Internal(Some($x.to_string()), std::file!(), std::line!()).into()
    };
}

#[macro_export]
macro_rules! err {
    ( $x:expr ) => {
        $crate::error::Error::Other($x.to_string()).into()
    };
}

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    // construction errors
    NegativeLength(Index),
    NegativeRows(Index),
    NegativeColumns(Index),

    // literal errors
    ParseFailure(Box<pest::error::Error<Rule>>),
    ParseUnexpected(Rule),
    InvalidLiteral(String),
    MixedKinds(Kind, Kind),
    RaggedMatrix {
        row: Index,
        expected: Index,
        found: Index,
    },

    Other(String),

    // in-dev errors
    Unimplemented(Option<String>),
    Internal(Option<String>, &'static str, u32),
}

impl Error {
    fn as_str(&self) -> String {
        match self {
            Error::NegativeLength(n) => format!("vector length must not be negative, got {n}"),
            Error::NegativeRows(n) => format!("matrix rows must not be negative, got {n}"),
            Error::NegativeColumns(n) => format!("matrix columns must not be negative, got {n}"),
            Error::ParseFailure(e) => match e.line_col {
                Pos((line, col)) => format!("Parse failed at Line {}, Column {}", line, col),
                _ => format!("Parse failed at {:?}", e.line_col),
            },
            Error::ParseUnexpected(rule) => {
                format!("Parse failed. Found unexpected parsing rule '{:#?}'", rule)
            }
            Error::InvalidLiteral(s) => format!("'{s}' is not a valid literal value"),
            Error::MixedKinds(a, b) => {
                format!("cannot mix values of kind '{a}' and '{b}' in one literal")
            }
            Error::RaggedMatrix {
                row,
                expected,
                found,
            } => format!("matrix row {row} has {found} values, expected {expected}"),
            Error::Other(s) => s.to_string(),
            Error::Unimplemented(Some(s)) => {
                format!("Uh, oh! Looks like '{s}' is only partially implemented")
            }
            Error::Unimplemented(_) => {
                "Uh, oh! You tried to do something that is only partially implemented".to_string()
            }
            Error::Internal(None, file, line) => format!("Internal Error ({file}:{line})"),
            Error::Internal(Some(msg), file, line) => {
                format!("Internal Error ({file}:{line})\n{msg}")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error: {}", self.as_str())
    }
}

impl std::error::Error for Error {}

impl<T> From<Error> for Result<T, Error> {
    fn from(val: Error) -> Self {
        Err(val)
    }
}

impl From<pest::error::Error<Rule>> for Error {
    fn from(value: pest::error::Error<Rule>) -> Self {
        Error::ParseFailure(Box::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_dimensions_name_the_value() {
        assert_eq!(
            Error::NegativeLength(-3).to_string(),
            "Error: vector length must not be negative, got -3"
        );
        assert_eq!(
            Error::NegativeColumns(-1).to_string(),
            "Error: matrix columns must not be negative, got -1"
        );
    }

    #[test]
    fn err_macro_builds_failed_result() {
        fn fails() -> Result<i32, Error> {
            err!("nope")
        }
        assert_eq!(fails(), Err(Error::Other("nope".to_string())));
    }

    #[test]
    fn internal_err_records_location() {
        let r: Result<(), Error> = internal_err!("bad state");
        match r {
            Err(Error::Internal(Some(msg), file, _)) => {
                assert_eq!(msg, "bad state");
                assert!(file.ends_with("error.rs"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}

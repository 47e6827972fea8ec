pub mod container;
pub mod error;
pub mod frame;
pub mod indexed;
pub mod operand;
pub mod parser;

#[cfg(feature = "cli")]
pub mod cli;

pub use container::{Literal, Matrix, Vector};
pub use error::Error;
pub use indexed::{Element, Index, Kind, Value, View1, View2};
pub use operand::Operand;

/// Literal Parsers
///
/// The primary interface for this module is `parse_literal`, which reads a
/// bracketed vector or matrix literal into an [`AnyVector`] or [`AnyMatrix`]
/// of the narrowest kind able to hold every value.
///
/// [`AnyVector`]: crate::container::AnyVector
/// [`AnyMatrix`]: crate::container::AnyMatrix
///
mod literal;
pub use literal::*;

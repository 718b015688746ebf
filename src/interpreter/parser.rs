/// Parser state and the statement entry point.
///
/// Holds the scanner, the session being evaluated against and the bindings
/// staged by the statement in progress.
pub mod core;

/// Expression parsing.
///
/// An expression is an operand optionally followed by a binary operator and
/// another expression, which makes every operator right-associative.
pub mod binary;

/// Operand parsing.
///
/// Handles unary operators, parenthesized expressions, number runs,
/// variables, nested assignments and trailing bracket indices.
pub mod unary;

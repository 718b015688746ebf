/// Binary operator evaluation logic.
///
/// Promotes both operands to a common shape, then applies scalar arithmetic,
/// elementwise broadcasting or the dot product, and shrinks the result.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements negation and the random roll.
pub mod unary;

/// Core evaluation logic and session management.
///
/// Contains the [`core::Session`] that owns the variable environment and the
/// random source, and the statement entry point.
pub mod core;

/// Bracket indexing into vectors.
pub mod index;

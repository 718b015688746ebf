/// Dispatch for every binary operator.
pub mod core;
/// Elementwise application with broadcasting.
pub mod array;
/// Integer arithmetic on two scalars.
pub mod scalar;
/// Exponentiation.
pub mod power;
/// The `+.*` inner product.
pub mod dot;

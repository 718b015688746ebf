/// Numeric conversion helpers.
///
/// This module provides safe functions for narrowing arbitrary-precision
/// integers to machine integers, for the few places where a value has to
/// drive a machine-sized quantity (exponents and indices).
///
/// All functions return a `Result`, which is `Ok` if the conversion is lossless
/// and valid, or the caller-supplied error otherwise.
pub mod num;

/// Runtime values: scalars, vectors, promotion and shrinking.
pub mod core;

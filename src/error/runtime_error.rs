use crate::{error::ErrorKind, operator::BinaryOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while values are computed.
///
/// Positions are byte offsets into the statement text.
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    UndefinedVariable {
        /// The name of the variable.
        name:     String,
        /// Where the identifier starts.
        position: usize,
    },
    /// Two vectors of different lengths met, and neither has length one.
    ShapeMismatch {
        /// The operator being applied.
        op:       BinaryOperator,
        /// Length of the left operand.
        left:     usize,
        /// Length of the right operand.
        right:    usize,
        /// Where the operator was found.
        position: usize,
    },
    /// `**` was given a negative exponent.
    NegativeExponent {
        /// Where the operator was found.
        position: usize,
    },
    /// `**` was given an exponent too large to compute with.
    ExponentTooLarge {
        /// Where the operator was found.
        position: usize,
    },
    /// `?` was given a bound below one.
    RollBoundTooSmall {
        /// The rejected bound.
        bound:    String,
        /// Where the operator was found.
        position: usize,
    },
    /// An index fell outside `1..=len`.
    IndexOutOfBounds {
        /// The largest valid index.
        max:      usize,
        /// The index that was actually requested.
        found:    String,
        /// Where the opening bracket was found.
        position: usize,
    },
}

impl RuntimeError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UndefinedVariable { .. } => ErrorKind::UndefinedVariable,
            Self::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
            Self::NegativeExponent { .. }
            | Self::ExponentTooLarge { .. }
            | Self::RollBoundTooSmall { .. }
            | Self::IndexOutOfBounds { .. } => ErrorKind::Domain,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, position } => {
                write!(f, "Error at {position}: Unknown variable '{name}'.")
            },
            Self::ShapeMismatch { op,
                                  left,
                                  right,
                                  position, } => write!(f,
                                                        "Error at {position}: Cannot apply {op} to vectors of different lengths: {left} vs {right}."),
            Self::NegativeExponent { position } => write!(f,
                                                          "Error at {position}: Exponent must not be negative."),
            Self::ExponentTooLarge { position } => {
                write!(f, "Error at {position}: Exponent is too large.")
            },
            Self::RollBoundTooSmall { bound, position } => write!(f,
                                                                  "Error at {position}: Cannot roll {bound}, the bound must be at least 1."),
            Self::IndexOutOfBounds { max,
                                     found,
                                     position, } => write!(f,
                                                           "Error at {position}: Index out of bounds. Valid indices are 1 to {max}, but found {found} instead."),
        }
    }
}

impl std::error::Error for RuntimeError {}

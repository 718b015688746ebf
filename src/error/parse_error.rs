use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning or parsing a statement.
///
/// Positions are byte offsets into the statement text.
pub enum ParseError {
    /// The scanner met a character that starts no token.
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Where the character was found.
        position:  usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// The statement ended where an operand was required.
    UnexpectedEndOfInput {
        /// The length of the statement.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Where the closing parenthesis should have been.
        position: usize,
    },
    /// A closing bracket `]` was expected but not found.
    ExpectedClosingBracket {
        /// Where the closing bracket should have been.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// Something other than a bare identifier stands left of `=`.
    InvalidAssignmentTarget {
        /// Where the `=` was found.
        position: usize,
    },
}

impl ParseError {
    /// Classifies the error. Unrecognized characters are lexical errors,
    /// everything else is a syntax error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnrecognizedCharacter { .. } => ErrorKind::Lex,
            _ => ErrorKind::Syntax,
        }
    }

    /// Returns the byte offset the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnrecognizedCharacter { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosingParen { position }
            | Self::ExpectedClosingBracket { position }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::InvalidAssignmentTarget { position } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character, position } => {
                write!(f, "Error at {position}: Unexpected character '{character}'.")
            },

            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at {position}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Error at {position}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Error at {position}: Expected closing parenthesis ')' but none found."),

            Self::ExpectedClosingBracket { position } => write!(f,
                                                                "Error at {position}: Expected closing bracket ']' but none found."),

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Error at {position}: Extra tokens after expression. Check your input: {token}"),

            Self::InvalidAssignmentTarget { position } => write!(f,
                                                                 "Error at {position}: Only a bare identifier can be assigned to."),
        }
    }
}

impl std::error::Error for ParseError {}

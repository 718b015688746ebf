/// Parsing errors.
///
/// Defines all error types that can occur during scanning and parsing of a
/// statement: unrecognized characters, unexpected tokens, unbalanced
/// delimiters and invalid assignment targets.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while values are computed:
/// unknown variables, incompatible vector shapes and domain violations.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The five ways a statement can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An unrecognized character was scanned.
    Lex,
    /// A token appeared where the grammar forbids it.
    Syntax,
    /// An identifier was read before being bound.
    UndefinedVariable,
    /// Vectors of incompatible lengths were combined.
    ShapeMismatch,
    /// An operand violated an operator's precondition.
    Domain,
}

/// Any failure surfaced by [`Session::execute`].
///
/// Parsing and evaluation are interleaved, so a single statement can fail in
/// either phase.
///
/// [`Session::execute`]: crate::interpreter::evaluator::core::Session::execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The statement could not be scanned or parsed.
    Parse(ParseError),
    /// A value could not be computed.
    Runtime(RuntimeError),
}

impl EvalError {
    /// Classifies the error.
    ///
    /// # Example
    /// ```
    /// use aplish::{error::ErrorKind, new_session};
    ///
    /// let mut session = new_session();
    /// let err = session.execute("1 2 * 3 4 5").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

use crate::interpreter::lexer::Token;

/// Represents a binary operator.
///
/// Every binary operator shares one precedence level and associates to the
/// right.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Exponentiation (`**`)
    Pow,
    /// Dot product (`+.*`)
    Dot,
}

/// Represents a unary (monadic) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Uniform random draw from `1..=x` (e.g. `?6`).
    Roll,
}

impl BinaryOperator {
    /// Maps a token to its corresponding binary operator.
    ///
    /// Returns `None` for tokens that are not binary operators, which includes
    /// the monadic-only `?`.
    ///
    /// # Example
    /// ```
    /// use aplish::{interpreter::lexer::Token, operator::BinaryOperator};
    ///
    /// assert_eq!(BinaryOperator::from_token(&Token::DoubleStar),
    ///            Some(BinaryOperator::Pow));
    /// assert_eq!(BinaryOperator::from_token(&Token::Question), None);
    /// ```
    #[must_use]
    pub const fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            Token::Star => Some(Self::Mul),
            Token::DoubleStar => Some(Self::Pow),
            Token::PlusDotStar => Some(Self::Dot),
            _ => None,
        }
    }
}

impl UnaryOperator {
    /// Maps a token in operand position to its unary operator.
    ///
    /// Only `-` and `?` have a monadic meaning; the other operator tokens
    /// yield `None`.
    #[must_use]
    pub const fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Minus => Some(Self::Negate),
            Token::Question => Some(Self::Roll),
            _ => None,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Pow => "**",
            Self::Dot => "+.*",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Roll => write!(f, "?"),
        }
    }
}

use logos::Logos;

use crate::error::ParseError;

/// Result type used by the scanner.
pub type LexResult<T> = Result<T, ParseError>;

/// Represents a lexical token in a statement.
///
/// `Number` and `Identifier` keep the exact text they were scanned from; every
/// other token has fixed text, reproduced by its `Display` implementation.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Unsigned integer literal tokens, such as `42`. Arbitrarily long digit
    /// runs are kept as text so no precision is lost.
    #[regex(r"[0-9]+", |lex| lex.slice().to_owned())]
    Number(String),
    /// Identifier tokens; variable names such as `x` or `ans`. They start with
    /// a letter and continue with letters or digits.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_owned())]
    Identifier(String),
    /// `+.*`
    #[token("+.*")]
    PlusDotStar,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `*`
    #[token("*")]
    Star,
    /// `?`
    #[token("?")]
    Question,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `=`
    #[token("=")]
    Equals,
    /// A run of spaces and tabs, however long.
    #[regex(r"[ \t]+")]
    Whitespace,
    /// Line break; terminates a statement.
    #[regex(r"\r?\n")]
    NewLine,
    /// Produced once the cursor reaches the end of the text.
    EndOfInput,
}

impl Token {
    /// Returns `true` for the operator tokens `+ - * ** +.* ?`.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self,
                 Self::Plus
                 | Self::Minus
                 | Self::Star
                 | Self::DoubleStar
                 | Self::PlusDotStar
                 | Self::Question)
    }

    /// Returns `true` for tokens that end an expression.
    #[must_use]
    pub const fn is_terminator(&self) -> bool {
        matches!(self,
                 Self::NewLine | Self::EndOfInput | Self::RParen | Self::RBracket | Self::Semicolon)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(text) | Self::Identifier(text) => write!(f, "{text}"),
            Self::PlusDotStar => write!(f, "+.*"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::DoubleStar => write!(f, "**"),
            Self::Star => write!(f, "*"),
            Self::Question => write!(f, "?"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::Semicolon => write!(f, ";"),
            Self::Equals => write!(f, "="),
            Self::Whitespace => write!(f, "<space>"),
            Self::NewLine => write!(f, "<newline>"),
            Self::EndOfInput => write!(f, "<end of input>"),
        }
    }
}

/// Scans the single token that starts at `cursor`.
///
/// Returns the token together with the cursor just past it. Once `cursor`
/// reaches the end of `source`, every call yields [`Token::EndOfInput`] and the
/// cursor stays clamped to the text length.
///
/// # Errors
/// Returns [`ParseError::UnrecognizedCharacter`] if no token starts at
/// `cursor`.
///
/// # Example
/// ```
/// use aplish::interpreter::lexer::{Token, scan};
///
/// let (token, next) = scan("2 ** 3", 2).unwrap();
/// assert_eq!(token, Token::DoubleStar);
/// assert_eq!(next, 4);
///
/// let (token, next) = scan("2 ** 3", 6).unwrap();
/// assert_eq!(token, Token::EndOfInput);
/// assert_eq!(next, 6);
/// ```
pub fn scan(source: &str, cursor: usize) -> LexResult<(Token, usize)> {
    let Some(rest) = source.get(cursor..).filter(|rest| !rest.is_empty()) else {
        return Ok((Token::EndOfInput, source.len()));
    };

    let mut lexer = Token::lexer(rest);
    match lexer.next() {
        Some(Ok(token)) => Ok((token, cursor + lexer.span().end)),
        Some(Err(())) => {
            let position = cursor + lexer.span().start;
            let character = source[position..].chars().next().unwrap_or_default();
            Err(ParseError::UnrecognizedCharacter { character, position })
        },
        None => Ok((Token::EndOfInput, source.len())),
    }
}

/// A cursor over one statement's text.
///
/// The scanner produces tokens lazily. Both read modes skip [`Token::Whitespace`]
/// transparently; [`Token::NewLine`] is returned like any other token.
#[derive(Debug, Clone)]
pub struct Scanner<'s> {
    source: &'s str,
    cursor: usize,
}

impl<'s> Scanner<'s> {
    /// Creates a scanner positioned at the start of `source`.
    #[must_use]
    pub const fn new(source: &'s str) -> Self {
        Self { source, cursor: 0 }
    }

    /// Returns the next significant token and the position it starts at,
    /// without consuming it.
    ///
    /// # Errors
    /// Propagates [`ParseError::UnrecognizedCharacter`] from [`scan`].
    pub fn peek(&self) -> LexResult<(Token, usize)> {
        let (token, start, _) = self.next_significant()?;
        Ok((token, start))
    }

    /// Consumes the next significant token and returns it together with the
    /// position it starts at.
    ///
    /// # Errors
    /// Propagates [`ParseError::UnrecognizedCharacter`] from [`scan`]. The
    /// cursor does not move on failure.
    ///
    /// # Example
    /// ```
    /// use aplish::interpreter::lexer::{Scanner, Token};
    ///
    /// let mut scanner = Scanner::new("x   = 12");
    /// assert_eq!(scanner.advance().unwrap(), (Token::Identifier("x".into()), 0));
    /// assert_eq!(scanner.peek().unwrap(), (Token::Equals, 4));
    /// assert_eq!(scanner.advance().unwrap(), (Token::Equals, 4));
    /// assert_eq!(scanner.advance().unwrap(), (Token::Number("12".into()), 6));
    /// assert_eq!(scanner.advance().unwrap().0, Token::EndOfInput);
    /// assert_eq!(scanner.advance().unwrap().0, Token::EndOfInput);
    /// ```
    pub fn advance(&mut self) -> LexResult<(Token, usize)> {
        let (token, start, end) = self.next_significant()?;
        self.cursor = end;
        Ok((token, start))
    }

    fn next_significant(&self) -> LexResult<(Token, usize, usize)> {
        let mut start = self.cursor;
        loop {
            let (token, end) = scan(self.source, start)?;
            if token != Token::Whitespace {
                return Ok((token, start.min(self.source.len()), end));
            }
            start = end;
        }
    }
}

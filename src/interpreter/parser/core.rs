use std::collections::HashMap;

use crate::{
    error::{EvalError, ParseError},
    interpreter::{
        evaluator::core::Session,
        lexer::{Scanner, Token},
        value::core::Value,
    },
};

/// Result type used by the parser.
///
/// Parsing evaluates as it goes, so a parse can fail with either a
/// [`ParseError`] or a runtime error.
pub type ParseResult<T> = Result<T, EvalError>;

/// A recursive-descent parser that evaluates one statement while it parses.
///
/// No syntax tree is built: each grammar rule returns the [`Value`] it
/// denotes. Assignments are staged in the parser and only reach the session
/// through [`Parser::into_staged`], so a statement that fails half way leaves
/// the session untouched.
pub struct Parser<'a> {
    pub(in crate::interpreter::parser) scanner: Scanner<'a>,
    pub(in crate::interpreter::parser) session: &'a mut Session,
    staged: HashMap<String, Value>,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `source` that reads variables from `session` and
    /// rolls with its random source.
    pub fn new(source: &'a str, session: &'a mut Session) -> Self {
        Self { scanner: Scanner::new(source),
               session,
               staged: HashMap::new() }
    }

    /// Parses and evaluates a whole statement.
    ///
    /// Grammar: `statement := expression NewLine? EndOfInput`
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` if the statement is empty.
    /// - `UnexpectedTrailingTokens` if anything but a final line break follows
    ///   the expression, including an unmatched `)` or `]` and `;`.
    /// - Propagates every error from the expression itself.
    pub fn parse_statement(&mut self) -> ParseResult<Value> {
        let (token, position) = self.scanner.advance()?;
        let value = self.parse_expression(token, position)?;

        let (mut next, mut at) = self.scanner.advance()?;
        if next == Token::NewLine {
            (next, at) = self.scanner.advance()?;
        }

        if next != Token::EndOfInput {
            return Err(ParseError::UnexpectedTrailingTokens { token:    next.to_string(),
                                                              position: at, }.into());
        }

        Ok(value)
    }

    /// Consumes the parser and returns the bindings the statement made.
    #[must_use]
    pub fn into_staged(self) -> HashMap<String, Value> {
        self.staged
    }

    /// Resolves a variable, preferring bindings made earlier in this
    /// statement.
    pub(in crate::interpreter::parser) fn lookup(&self, name: &str) -> Option<Value> {
        self.staged
            .get(name)
            .or_else(|| self.session.variable(name))
            .cloned()
    }

    pub(in crate::interpreter::parser) fn bind(&mut self, name: String, value: Value) {
        self.staged.insert(name, value);
    }
}

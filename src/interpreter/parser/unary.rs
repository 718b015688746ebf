use num::BigInt;

use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::core::Session,
        lexer::Token,
        parser::core::{ParseResult, Parser},
        value::core::Value,
    },
    operator::UnaryOperator,
};

impl Parser<'_> {
    /// Parses and evaluates an operand whose first token has already been
    /// consumed.
    ///
    /// A leading operator applies monadically to the whole expression that
    /// follows it. Every other operand may be followed by bracket indices.
    ///
    /// Grammar:
    /// ```text
    ///     operand := operator expression
    ///              | primary index*
    /// ```
    pub(crate) fn parse_operand(&mut self, token: Token, position: usize) -> ParseResult<Value> {
        if token.is_operator() {
            return self.parse_unary(&token, position);
        }

        let primary = self.parse_primary(token, position)?;
        self.parse_postfix(primary)
    }

    fn parse_unary(&mut self, token: &Token, position: usize) -> ParseResult<Value> {
        let Some(op) = UnaryOperator::from_token(token) else {
            return Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                     position }.into());
        };

        let (next, at) = self.scanner.advance()?;
        let operand = self.parse_expression(next, at)?;
        Ok(self.session.eval_unary(op, &operand, position)?)
    }

    /// Parses a primary operand.
    ///
    /// Grammar:
    /// ```text
    ///     primary := "(" expression ")"
    ///              | number+
    ///              | identifier ("=" expression)?
    /// ```
    ///
    /// # Errors
    /// - `ExpectedClosingParen` if a parenthesized expression is not closed.
    /// - `UnexpectedEndOfInput` if the statement ends here.
    /// - `UnexpectedToken` for any other token.
    /// - `UndefinedVariable` for an unbound identifier.
    fn parse_primary(&mut self, token: Token, position: usize) -> ParseResult<Value> {
        match token {
            Token::LParen => {
                let (next, at) = self.scanner.advance()?;
                let value = self.parse_expression(next, at)?;

                match self.scanner.advance()? {
                    (Token::RParen, _) => Ok(value),
                    (_, at) => Err(ParseError::ExpectedClosingParen { position: at }.into()),
                }
            },
            Token::Number(text) => self.parse_numbers(&text, position),
            Token::Identifier(name) => self.parse_identifier(name, position),
            Token::EndOfInput => Err(ParseError::UnexpectedEndOfInput { position }.into()),
            other => Err(ParseError::UnexpectedToken { token: other.to_string(),
                                                       position }.into()),
        }
    }

    /// Collects a maximal run of numbers. One number is a scalar, more form a
    /// vector in the order written.
    fn parse_numbers(&mut self, first: &str, position: usize) -> ParseResult<Value> {
        let mut elements = vec![parse_number(first, position)?];

        while let (Token::Number(text), at) = self.scanner.peek()? {
            self.scanner.advance()?;
            elements.push(parse_number(&text, at)?);
        }

        Ok(Value::from(elements).shrink())
    }

    /// Either assigns to or reads the identifier.
    ///
    /// An assignment yields the assigned value, so `1 + x = 2` is `3` and
    /// binds `x` to `2`.
    fn parse_identifier(&mut self, name: String, position: usize) -> ParseResult<Value> {
        if let (Token::Equals, _) = self.scanner.peek()? {
            self.scanner.advance()?;
            let (next, at) = self.scanner.advance()?;
            let value = self.parse_expression(next, at)?;
            self.bind(name, value.clone());
            return Ok(value);
        }

        self.lookup(&name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name, position }.into())
    }

    /// Applies any number of trailing `[index]` selections.
    ///
    /// Grammar: `index := "[" expression "]"`
    fn parse_postfix(&mut self, mut value: Value) -> ParseResult<Value> {
        while let (Token::LBracket, open) = self.scanner.peek()? {
            self.scanner.advance()?;
            let (next, at) = self.scanner.advance()?;
            let index = self.parse_expression(next, at)?;

            match self.scanner.advance()? {
                (Token::RBracket, _) => {},
                (_, at) => return Err(ParseError::ExpectedClosingBracket { position: at }.into()),
            }

            value = Session::eval_index(&value, &index, open)?;
        }

        Ok(value)
    }
}

fn parse_number(text: &str, position: usize) -> ParseResult<BigInt> {
    text.parse::<BigInt>()
        .map_err(|_| ParseError::UnexpectedToken { token: text.to_owned(),
                                                   position }.into())
}

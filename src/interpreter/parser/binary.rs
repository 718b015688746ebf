use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::Session,
        lexer::Token,
        parser::core::{ParseResult, Parser},
        value::core::Value,
    },
    operator::BinaryOperator,
};

impl Parser<'_> {
    /// Parses and evaluates an expression whose first token has already been
    /// consumed.
    ///
    /// There is a single precedence level. After the leftmost operand, an
    /// operator makes the *entire rest* of the expression its right operand,
    /// so `a - b - c` evaluates as `a - (b - c)`.
    ///
    /// Grammar: `expression := operand (operator expression)?`
    ///
    /// # Parameters
    /// - `token`: The first token of the expression.
    /// - `position`: Where that token starts.
    ///
    /// # Errors
    /// - `InvalidAssignmentTarget` if `=` follows an operand that is not a
    ///   bare identifier.
    /// - `UnexpectedToken` if the operand is followed by anything other than
    ///   an operator or a terminator.
    /// - Any error from the operands or from applying the operator.
    pub fn parse_expression(&mut self, token: Token, position: usize) -> ParseResult<Value> {
        let left = self.parse_operand(token, position)?;

        let (next, at) = self.scanner.peek()?;
        if next.is_terminator() {
            return Ok(left);
        }

        if let Some(op) = BinaryOperator::from_token(&next) {
            self.scanner.advance()?;
            let (token, position) = self.scanner.advance()?;
            let right = self.parse_expression(token, position)?;
            return Ok(Session::eval_binary(op, &left, &right, at)?);
        }

        match next {
            Token::Equals => Err(ParseError::InvalidAssignmentTarget { position: at }.into()),
            _ => Err(ParseError::UnexpectedToken { token:    next.to_string(),
                                                   position: at, }.into()),
        }
    }
}

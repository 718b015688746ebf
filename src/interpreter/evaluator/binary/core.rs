use crate::{
    interpreter::{
        evaluator::core::{EvalResult, Session},
        value::core::Value,
    },
    operator::BinaryOperator,
};

impl Session {
    /// Evaluates a binary operation between two values.
    ///
    /// Both operands are first promoted against each other, so a scalar
    /// meeting a vector takes part as a length-1 vector. `+.*` is routed to
    /// `eval_dot`; every other operator is applied elementwise with
    /// broadcasting through `map_vector_binary`. The result is shrunk, so a
    /// length-1 vector never escapes.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Where the operator was found, for error reporting.
    ///
    /// # Example
    /// ```
    /// use aplish::{Session, Value, operator::BinaryOperator};
    ///
    /// let left = Value::from(vec![1, 2, 3]);
    /// let right = Value::from(2);
    ///
    /// let result = Session::eval_binary(BinaryOperator::Mul, &left, &right, 0);
    /// assert_eq!(result.unwrap(), Value::from(vec![2, 4, 6]));
    ///
    /// let result = Session::eval_binary(BinaryOperator::Add, &Value::from(vec![3]), &Value::from(4), 0);
    /// assert_eq!(result.unwrap(), Value::from(7));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       position: usize)
                       -> EvalResult<Value> {
        let (left, right) = Value::same(left, right);

        let result = match op {
            BinaryOperator::Dot => Self::eval_dot(&left, &right, position)?,
            _ => Self::map_vector_binary(op, &left, &right, position, &|l, r| {
                     Self::eval_scalar_op(op, l, r, position)
                 })?,
        };

        Ok(result.shrink())
    }
}

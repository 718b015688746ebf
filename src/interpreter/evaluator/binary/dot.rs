use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Session},
        value::core::Value,
    },
    operator::BinaryOperator,
};

impl Session {
    /// Evaluates the inner product `+.*`.
    ///
    /// Both operands are taken as vectors (a scalar counts as a length-1
    /// vector) and must have exactly the same length; unlike the elementwise
    /// operators there is no broadcasting. Elements are multiplied pairwise and
    /// the products are summed.
    ///
    /// # Errors
    /// Returns [`RuntimeError::ShapeMismatch`] if the lengths differ.
    ///
    /// # Example
    /// ```
    /// use aplish::{Session, Value};
    ///
    /// let u = Value::from(vec![1, 2, 3]);
    /// let v = Value::from(vec![4, 5, 6]);
    ///
    /// assert_eq!(Session::eval_dot(&u, &v, 0).unwrap(), Value::from(32));
    /// assert!(Session::eval_dot(&u, &Value::from(2), 0).is_err());
    /// ```
    pub fn eval_dot(left: &Value, right: &Value, position: usize) -> EvalResult<Value> {
        if left.len() != right.len() {
            return Err(RuntimeError::ShapeMismatch { op: BinaryOperator::Dot,
                                                     left: left.len(),
                                                     right: right.len(),
                                                     position });
        }

        let products = Self::map_vector_binary(BinaryOperator::Dot, left, right, position, &|l, r| {
                           Ok(l * r)
                       })?;
        Ok(products.sum_reduce())
    }
}

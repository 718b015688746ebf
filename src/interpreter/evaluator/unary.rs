use num::{BigInt, One, bigint::RandBigInt};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Session},
        value::core::Value,
    },
    operator::UnaryOperator,
};

impl Session {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: negates every element.
    /// - `Roll`: replaces every element `n` with a uniformly random integer in
    ///   `1..=n`, drawn from the session's random source.
    ///
    /// Vector results are shrunk.
    ///
    /// # Errors
    /// `Roll` returns [`RuntimeError::RollBoundTooSmall`] as soon as it meets
    /// an element below 1.
    ///
    /// # Example
    /// ```
    /// use aplish::{Session, Value, operator::UnaryOperator};
    ///
    /// let mut session = Session::with_seed(7);
    ///
    /// let v = session.eval_unary(UnaryOperator::Negate, &Value::from(vec![1, -2]), 0).unwrap();
    /// assert_eq!(v, Value::from(vec![-1, 2]));
    ///
    /// let v = session.eval_unary(UnaryOperator::Roll, &Value::from(1), 0).unwrap();
    /// assert_eq!(v, Value::from(1));
    ///
    /// assert!(session.eval_unary(UnaryOperator::Roll, &Value::from(0), 0).is_err());
    /// ```
    pub fn eval_unary(&mut self,
                      op: UnaryOperator,
                      value: &Value,
                      position: usize)
                      -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => Ok(value.negate()),
            UnaryOperator::Roll => match value {
                Value::Scalar(bound) => self.roll(bound, position).map(Value::Scalar),
                Value::Vector(bounds) => {
                    let rolled = bounds.iter()
                                       .map(|bound| self.roll(bound, position))
                                       .collect::<EvalResult<Vec<_>>>()?;
                    Ok(Value::from(rolled).shrink())
                },
            },
        }
    }

    fn roll(&mut self, bound: &BigInt, position: usize) -> EvalResult<BigInt> {
        if *bound < BigInt::one() {
            return Err(RuntimeError::RollBoundTooSmall { bound: bound.to_string(),
                                                         position });
        }

        Ok(self.rng.gen_bigint_range(&BigInt::one(), &(bound + 1u32)))
    }
}

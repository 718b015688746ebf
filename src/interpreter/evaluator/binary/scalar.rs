use num::BigInt;

use crate::{
    interpreter::evaluator::core::{EvalResult, Session},
    operator::BinaryOperator,
};

impl Session {
    /// Evaluates an integer operation on two scalars.
    ///
    /// `+`, `-` and `*` cannot fail. `**` goes through `eval_pow`. For `+.*`
    /// this yields the product, which is also the dot product of two
    /// one-element vectors.
    ///
    /// # Example
    /// ```
    /// use aplish::{Session, operator::BinaryOperator};
    /// use num::BigInt;
    ///
    /// let x = BigInt::from(6);
    /// let y = BigInt::from(7);
    ///
    /// let result = Session::eval_scalar_op(BinaryOperator::Mul, &x, &y, 0).unwrap();
    /// assert_eq!(result, BigInt::from(42));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &BigInt,
                          right: &BigInt,
                          position: usize)
                          -> EvalResult<BigInt> {
        use BinaryOperator::{Add, Dot, Mul, Pow, Sub};

        Ok(match op {
            Add => left + right,
            Sub => left - right,
            Mul | Dot => left * right,
            Pow => Self::eval_pow(left, right, position)?,
        })
    }
}

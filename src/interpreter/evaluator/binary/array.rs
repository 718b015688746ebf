use num::BigInt;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Session},
        value::core::Value,
    },
    operator::BinaryOperator,
};

impl Session {
    /// Applies an elementwise binary operation to two values of the same
    /// variant.
    ///
    /// - Scalar with scalar: `f` is applied once.
    /// - Vector with vector: a length-1 side is broadcast against every
    ///   element of the other; otherwise the lengths must match and elements
    ///   are paired by index.
    ///
    /// Mixed operands are promoted first. The result is not shrunk; that is
    /// left to the caller.
    ///
    /// # Parameters
    /// - `op`: The operator being applied. Only needed for error messages.
    /// - `left`: Left-hand operand.
    /// - `right`: Right-hand operand.
    /// - `position`: Where the operator was found, for error reporting.
    /// - `f`: The scalar operation applied to each pair of elements.
    ///
    /// # Errors
    /// Returns [`RuntimeError::ShapeMismatch`] for two vectors of different
    /// lengths, neither of length 1, and propagates any error from `f`.
    ///
    /// # Example
    /// ```
    /// use aplish::{Session, Value, operator::BinaryOperator};
    ///
    /// let left = Value::from(vec![1, 2]);
    /// let right = Value::from(vec![10, 20]);
    ///
    /// let r = Session::map_vector_binary(BinaryOperator::Add, &left, &right, 0, &|l, r| Ok(l + r))
    ///     .unwrap();
    ///
    /// assert_eq!(r, Value::from(vec![11, 22]));
    /// ```
    pub fn map_vector_binary<F>(op: BinaryOperator,
                                left: &Value,
                                right: &Value,
                                position: usize,
                                f: &F)
                                -> EvalResult<Value>
        where F: Fn(&BigInt, &BigInt) -> EvalResult<BigInt>
    {
        match (left, right) {
            (Value::Scalar(l), Value::Scalar(r)) => f(l, r).map(Value::Scalar),

            (Value::Vector(larr), Value::Vector(rarr)) => {
                let out = match (larr.len(), rarr.len()) {
                    (1, _) => rarr.iter().map(|r| f(&larr[0], r)).collect::<EvalResult<Vec<_>>>()?,
                    (_, 1) => larr.iter().map(|l| f(l, &rarr[0])).collect::<EvalResult<Vec<_>>>()?,
                    (llen, rlen) if llen == rlen => {
                        larr.iter()
                            .zip(rarr.iter())
                            .map(|(l, r)| f(l, r))
                            .collect::<EvalResult<Vec<_>>>()?
                    },
                    (llen, rlen) => {
                        return Err(RuntimeError::ShapeMismatch { op,
                                                                 left: llen,
                                                                 right: rlen,
                                                                 position });
                    },
                };
                Ok(Value::from(out))
            },

            // Scalar with vector
            _ => {
                let (left, right) = Value::same(left, right);
                Self::map_vector_binary(op, &left, &right, position, f)
            },
        }
    }
}

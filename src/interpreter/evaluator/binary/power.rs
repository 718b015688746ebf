use num::{BigInt, Integer, One, Signed, Zero};

use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Session},
    util::num::bigint_to_u32_checked,
};

impl Session {
    /// Evaluates an exponentiation.
    ///
    /// Exponents must be non-negative. Exponents beyond `u32::MAX` are only
    /// computed for the bases `0`, `1` and `-1`, whose powers stay small.
    ///
    /// # Errors
    /// - [`RuntimeError::NegativeExponent`] for a negative exponent.
    /// - [`RuntimeError::ExponentTooLarge`] for a huge exponent on any other
    ///   base.
    ///
    /// # Example
    /// ```
    /// use aplish::Session;
    /// use num::BigInt;
    ///
    /// let b = BigInt::from(2);
    /// let e = BigInt::from(100);
    ///
    /// let result = Session::eval_pow(&b, &e, 0).unwrap();
    /// assert_eq!(result.to_string(), "1267650600228229401496703205376");
    /// assert!(Session::eval_pow(&b, &BigInt::from(-1), 0).is_err());
    /// ```
    pub fn eval_pow(base: &BigInt, exponent: &BigInt, position: usize) -> EvalResult<BigInt> {
        if exponent.is_negative() {
            return Err(RuntimeError::NegativeExponent { position });
        }

        if let Ok(e) = bigint_to_u32_checked(exponent, ()) {
            return Ok(base.pow(e));
        }

        if base.is_zero() || base.is_one() {
            Ok(base.clone())
        } else if *base == -BigInt::one() {
            Ok(if exponent.is_even() { BigInt::one() } else { -BigInt::one() })
        } else {
            Err(RuntimeError::ExponentTooLarge { position })
        }
    }
}

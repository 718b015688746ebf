use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Session},
        value::core::Value,
    },
    util::num::one_based_offset,
};

impl Session {
    /// Selects elements of `value` by 1-based position.
    ///
    /// A scalar index yields one element as a scalar; a vector index yields
    /// the selected elements in the order the indices were given. A scalar
    /// `value` behaves as a one-element vector.
    ///
    /// # Errors
    /// Returns [`RuntimeError::IndexOutOfBounds`] for an index below 1 or
    /// past the last element.
    ///
    /// # Example
    /// ```
    /// use aplish::{Session, Value};
    ///
    /// let v = Value::from(vec![10, 20, 30]);
    ///
    /// assert_eq!(Session::eval_index(&v, &Value::from(2), 0).unwrap(), Value::from(20));
    /// assert_eq!(Session::eval_index(&v, &Value::from(vec![3, 1]), 0).unwrap(),
    ///            Value::from(vec![30, 10]));
    /// assert!(Session::eval_index(&v, &Value::from(0), 0).is_err());
    /// ```
    pub fn eval_index(value: &Value, index: &Value, position: usize) -> EvalResult<Value> {
        let elements = value.elements();

        let selected = index.elements()
                            .iter()
                            .map(|i| -> EvalResult<_> {
                                let offset = one_based_offset(i, elements.len(), ()).map_err(|()| {
                                    RuntimeError::IndexOutOfBounds { max: elements.len(),
                                                                     found: i.to_string(),
                                                                     position }
                                })?;
                                Ok(elements[offset].clone())
                            })
                            .collect::<EvalResult<Vec<_>>>()?;

        Ok(Value::from(selected).shrink())
    }
}

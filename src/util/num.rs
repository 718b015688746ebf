use num::{BigInt, ToPrimitive};

/// Safely converts a `BigInt` to `u32` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value is negative or above `u32::MAX`.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Example
/// ```
/// use aplish::util::num::bigint_to_u32_checked;
/// use num::BigInt;
///
/// assert_eq!(bigint_to_u32_checked(&BigInt::from(42), "too big!"), Ok(42));
/// assert!(bigint_to_u32_checked(&BigInt::from(u64::MAX), "too big!").is_err());
/// assert!(bigint_to_u32_checked(&BigInt::from(-1), "too big!").is_err());
/// ```
pub fn bigint_to_u32_checked<E>(value: &BigInt, error: E) -> Result<u32, E> {
    value.to_u32().ok_or(error)
}

/// Converts a 1-based index into a 0-based offset into a sequence of length
/// `len`.
///
/// ## Errors
/// Returns `Err(error)` if the index is below 1 or above `len`.
///
/// ## Example
/// ```
/// use aplish::util::num::one_based_offset;
/// use num::BigInt;
///
/// assert_eq!(one_based_offset(&BigInt::from(1), 3, ()), Ok(0));
/// assert_eq!(one_based_offset(&BigInt::from(3), 3, ()), Ok(2));
/// assert!(one_based_offset(&BigInt::from(0), 3, ()).is_err());
/// assert!(one_based_offset(&BigInt::from(4), 3, ()).is_err());
/// ```
pub fn one_based_offset<E>(index: &BigInt, len: usize, error: E) -> Result<usize, E> {
    match index.to_usize() {
        Some(i) if (1..=len).contains(&i) => Ok(i - 1),
        _ => Err(error),
    }
}

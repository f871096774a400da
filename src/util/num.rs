use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Converts an `i64` to the nearest `f64`.
///
/// Integers beyond `2^53` lose their lowest bits, which matches how mixed
/// integer/real arithmetic behaves on a calculator display.
///
/// ## Example
/// ```
/// use commacalc::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(-42), -42.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Safely converts an `i64` exponent to `u32`.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the value is negative or larger than
/// `u32::MAX`; no integer power with such an exponent fits in an `i64`
/// anyway unless the base is `0`, `1` or `-1`.
///
/// ## Example
/// ```
/// use commacalc::{error::RuntimeError, util::num::i64_to_u32_checked};
///
/// assert_eq!(i64_to_u32_checked(10), Ok(10));
/// assert_eq!(i64_to_u32_checked(-1), Err(RuntimeError::Overflow));
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn i64_to_u32_checked(value: i64) -> EvalResult<u32> {
    if value < 0 || value > u32::MAX as i64 {
        return Err(RuntimeError::Overflow);
    }

    Ok(value as u32)
}

/// Raises an integer to a non-negative integer power with overflow checks.
///
/// Bases `0`, `1` and `-1` are answered directly so that huge exponents on
/// them do not overflow the exponent conversion.
///
/// ## Example
/// ```
/// use commacalc::util::num::checked_integer_pow;
///
/// assert_eq!(checked_integer_pow(2, 10), Ok(1024));
/// assert_eq!(checked_integer_pow(-1, 10_000_000_001), Ok(-1));
/// assert!(checked_integer_pow(10, 40).is_err());
/// ```
pub fn checked_integer_pow(base: i64, exponent: i64) -> EvalResult<i64> {
    debug_assert!(exponent >= 0);

    match base {
        0 if exponent == 0 => Ok(1),
        0 => Ok(0),
        1 => Ok(1),
        -1 if exponent % 2 == 0 => Ok(1),
        -1 => Ok(-1),
        _ => base.checked_pow(i64_to_u32_checked(exponent)?)
                 .ok_or(RuntimeError::Overflow),
    }
}

/// Integer remainder whose sign follows the divisor (floored modulo).
///
/// Returns `None` when the divisor is zero.
///
/// ## Example
/// ```
/// use commacalc::util::num::floored_rem;
///
/// assert_eq!(floored_rem(7, 3), Some(1));
/// assert_eq!(floored_rem(-7, 3), Some(2));
/// assert_eq!(floored_rem(7, -3), Some(-2));
/// assert_eq!(floored_rem(-7, -3), Some(-1));
/// assert_eq!(floored_rem(1, 0), None);
/// ```
#[must_use]
pub const fn floored_rem(dividend: i64, divisor: i64) -> Option<i64> {
    if divisor == 0 {
        return None;
    }

    // i64::MIN % -1 overflows in the checked form, its remainder is 0.
    let rem = dividend.wrapping_rem(divisor);
    if rem != 0 && (rem < 0) != (divisor < 0) {
        Some(rem + divisor)
    } else {
        Some(rem)
    }
}

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::{checked_integer_pow, i64_to_f64},
};

/// Evaluates an exponentiation operation.
///
/// - `0 ^ 0` is undefined.
/// - A non-negative integer exponent keeps an integer base exact, with
///   overflow checks; a real base gives a real.
/// - A negative integer exponent gives the real reciprocal power and fails
///   as a division by zero on a zero base.
/// - A real exponent needs a strictly positive base.
///
/// # Parameters
/// - `base`: The base value.
/// - `exponent`: The exponent value.
///
/// # Returns
/// An `EvalResult<Value>` containing the result of `base ^ exponent`.
///
/// # Example
/// ```
/// use commacalc::{
///     error::RuntimeError,
///     interpreter::{evaluator::binary::power::eval_pow, value::core::Value},
/// };
///
/// assert_eq!(eval_pow(Value::Integer(2), Value::Integer(10)), Ok(Value::Integer(1024)));
/// assert_eq!(eval_pow(Value::Integer(2), Value::Integer(-1)), Ok(Value::Real(0.5)));
/// assert_eq!(eval_pow(Value::Integer(0), Value::Integer(0)),
///            Err(RuntimeError::ZeroToZeroPower));
/// assert_eq!(eval_pow(Value::Integer(-8), Value::Real(0.5)),
///            Err(RuntimeError::NonIntegerPowerOfNonPositive));
/// ```
pub fn eval_pow(base: Value, exponent: Value) -> EvalResult<Value> {
    use Value::{Integer, Real};

    if base.is_zero() && exponent.is_zero() {
        return Err(RuntimeError::ZeroToZeroPower);
    }

    match (base, exponent) {
        (Integer(b), Integer(e)) if e >= 0 => checked_integer_pow(b, e).map(Integer),
        (Real(b), Integer(e)) if e >= 0 => Ok(Real(b.powf(i64_to_f64(e)))),
        (_, Integer(e)) => {
            if base.is_zero() {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(Real(base.as_real().powf(i64_to_f64(e))))
        },
        (_, Real(e)) => {
            if base.as_real() <= 0.0 {
                return Err(RuntimeError::NonIntegerPowerOfNonPositive);
            }
            Ok(Real(base.as_real().powf(e)))
        },
    }
}

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Computes the natural logarithm.
///
/// The argument must be strictly positive. The result is always real.
///
/// # Example
/// ```
/// use commacalc::{
///     error::RuntimeError,
///     interpreter::{evaluator::function::log::ln, value::core::Value},
/// };
///
/// assert_eq!(ln(Value::Integer(1)), Ok(Value::Real(0.0)));
/// assert_eq!(ln(Value::Integer(0)), Err(RuntimeError::NonPositiveLn));
/// ```
pub fn ln(argument: Value) -> EvalResult<Value> {
    let x = argument.as_real();
    if x <= 0.0 {
        return Err(RuntimeError::NonPositiveLn);
    }

    Ok(Value::Real(x.ln()))
}

/// Computes the logarithm of `value` taken in base `base`.
///
/// Only `value` is checked. A base of `1`, `0` or a negative base is passed
/// through to the floating-point division and yields `inf` or `nan`.
///
/// # Parameters
/// - `value`: The number whose logarithm is taken, the left operand.
/// - `base`: The logarithm base, the right operand.
///
/// # Returns
/// `Value::Real` containing `ln(value) / ln(base)`.
///
/// # Example
/// ```
/// use commacalc::interpreter::{evaluator::function::log::log_base, value::core::Value};
///
/// assert_eq!(log_base(Value::Integer(5), Value::Integer(25)), Ok(Value::Real(0.5)));
/// ```
pub fn log_base(value: Value, base: Value) -> EvalResult<Value> {
    let x = value.as_real();
    if x <= 0.0 {
        return Err(RuntimeError::NonPositiveLog);
    }

    Ok(Value::Real(x.ln() / base.as_real().ln()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_base_checks_only_the_value() {
        assert_eq!(log_base(Value::Integer(0), Value::Integer(10)),
                   Err(RuntimeError::NonPositiveLog));
        assert_eq!(log_base(Value::Integer(8), Value::Integer(1)),
                   Ok(Value::Real(f64::INFINITY)));
        let Ok(Value::Real(r)) = log_base(Value::Integer(8), Value::Integer(-2)) else {
            panic!("expected a real result");
        };
        assert!(r.is_nan());
    }

    #[test]
    fn ln_of_negative_fails() {
        assert_eq!(ln(Value::Real(-0.5)), Err(RuntimeError::NonPositiveLn));
    }
}

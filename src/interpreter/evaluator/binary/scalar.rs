use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates an arithmetic operation that keeps integers exact.
///
/// Two integers are combined with `integer`, a checked operation whose
/// `None` is reported as overflow. If either side is real, both are widened
/// and combined with `real`.
///
/// # Parameters
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `integer`: Checked integer form of the operation.
/// - `real`: Floating-point form of the operation.
///
/// # Example
/// ```
/// use commacalc::{
///     error::RuntimeError,
///     interpreter::{evaluator::binary::scalar::eval_arithmetic, value::core::Value},
/// };
///
/// let x = Value::Real(1.5);
/// let y = Value::Integer(2);
///
/// assert_eq!(eval_arithmetic(x, y, i64::checked_mul, |a, b| a * b),
///            Ok(Value::Real(3.0)));
/// assert_eq!(eval_arithmetic(Value::Integer(i64::MAX),
///                            Value::Integer(1),
///                            i64::checked_add,
///                            |a, b| a + b),
///            Err(RuntimeError::Overflow));
/// ```
pub fn eval_arithmetic(left: Value,
                       right: Value,
                       integer: fn(i64, i64) -> Option<i64>,
                       real: fn(f64, f64) -> f64)
                       -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => {
            integer(a, b).map(Value::Integer)
                         .ok_or(RuntimeError::Overflow)
        },
        _ => Ok(Value::Real(real(left.as_real(), right.as_real()))),
    }
}

/// Evaluates a division.
///
/// The result is always real. A divisor that is numerically zero fails,
/// whether it is tagged integer or real.
///
/// # Example
/// ```
/// use commacalc::{
///     error::RuntimeError,
///     interpreter::{evaluator::binary::scalar::eval_division, value::core::Value},
/// };
///
/// assert_eq!(eval_division(Value::Integer(6), Value::Integer(3)), Ok(Value::Real(2.0)));
/// assert_eq!(eval_division(Value::Integer(6), Value::Real(0.0)),
///            Err(RuntimeError::DivisionByZero));
/// ```
pub fn eval_division(left: Value, right: Value) -> EvalResult<Value> {
    if right.is_zero() {
        return Err(RuntimeError::DivisionByZero);
    }

    Ok(Value::Real(left.as_real() / right.as_real()))
}

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Computes the `root`-th root of `value`.
///
/// - An odd integer root accepts negative values and preserves the sign,
///   so `-8 yth_root 3` is `-2`.
/// - Any other root needs a non-negative value.
/// - A root of `2` uses `f64::sqrt`.
/// - A zero root, or a negative root of zero, is a division by zero.
///
/// The result is always real.
///
/// # Parameters
/// - `value`: The radicand, the left operand.
/// - `root`: The degree of the root, the right operand.
///
/// # Example
/// ```
/// use commacalc::{
///     error::RuntimeError,
///     interpreter::{evaluator::function::root::yth_root, value::core::Value},
/// };
///
/// assert_eq!(yth_root(Value::Integer(-8), Value::Integer(3)), Ok(Value::Real(-2.0)));
/// assert_eq!(yth_root(Value::Integer(9), Value::Integer(2)), Ok(Value::Real(3.0)));
/// assert_eq!(yth_root(Value::Integer(-4), Value::Integer(2)),
///            Err(RuntimeError::NegativeRoot));
/// ```
pub fn yth_root(value: Value, root: Value) -> EvalResult<Value> {
    let x = value.as_real();

    if x == 0.0 && root.as_real() < 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }

    if let Value::Integer(n) = root
       && n.rem_euclid(2) == 1
    {
        let magnitude = x.abs().powf(1.0 / root.as_real());
        return Ok(Value::Real(if x < 0.0 { -magnitude } else { magnitude }));
    }

    if x < 0.0 {
        return Err(RuntimeError::NegativeRoot);
    }

    if root.is_zero() {
        return Err(RuntimeError::DivisionByZero);
    }

    if matches!(root, Value::Integer(2)) {
        return Ok(Value::Real(x.sqrt()));
    }

    Ok(Value::Real(x.powf(1.0 / root.as_real())))
}

/// Computes the square root, `yth_root(value, 2)`.
///
/// # Example
/// ```
/// use commacalc::interpreter::{evaluator::function::root::sroot, value::core::Value};
///
/// assert_eq!(sroot(Value::Real(2.25)), Ok(Value::Real(1.5)));
/// ```
pub fn sroot(argument: Value) -> EvalResult<Value> {
    yth_root(argument, Value::Integer(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_negative_roots() {
        assert_eq!(yth_root(Value::Integer(5), Value::Integer(0)),
                   Err(RuntimeError::DivisionByZero));
        assert_eq!(yth_root(Value::Integer(0), Value::Integer(-3)),
                   Err(RuntimeError::DivisionByZero));
        assert_eq!(yth_root(Value::Integer(4), Value::Integer(-2)), Ok(Value::Real(0.5)));
    }

    #[test]
    fn real_root_needs_non_negative_value() {
        assert_eq!(yth_root(Value::Integer(-8), Value::Real(3.0)),
                   Err(RuntimeError::NegativeRoot));
        assert_eq!(sroot(Value::Integer(-1)), Err(RuntimeError::NegativeRoot));
    }

    #[test]
    fn negative_odd_root_preserves_sign() {
        assert_eq!(yth_root(Value::Integer(-32), Value::Integer(5)), Ok(Value::Real(-2.0)));
        let Ok(Value::Real(r)) = yth_root(Value::Integer(-8), Value::Integer(-3)) else {
            panic!("expected a real result");
        };
        assert!((r + 0.5).abs() < 1e-12);
    }
}

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies a trigonometric builtin to a numeric value.
///
/// The generated functions accept any number. Integers are widened before
/// the real function is applied and the result is always real. No domain is
/// trapped: `tan` at its poles returns whatever `f64::tan` produces.
///
/// # Example
/// ```
/// use commacalc::interpreter::{evaluator::function::builtin::sin, value::core::Value};
///
/// let x = Value::Real(std::f64::consts::PI / 2.0);
/// assert_eq!(sin(x), Ok(Value::Real(1.0)));
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(argument: Value) -> EvalResult<Value> {
            Ok(Value::Real(argument.as_real().$real_fn()))
        }
    };
}

real_builtin!(sin, sin);
real_builtin!(cos, cos);
real_builtin!(tan, tan);

/// Applies an inverse trigonometric builtin restricted to a closed interval.
///
/// Arguments outside `[-$bound, $bound]`, NaN included, fail with `$error`.
macro_rules! bounded_builtin {
    ($fname:ident, $real_fn:ident, $bound:expr, $error:ident) => {
        pub fn $fname(argument: Value) -> EvalResult<Value> {
            let x = argument.as_real();
            if !(-$bound..=$bound).contains(&x) {
                return Err(RuntimeError::$error);
            }
            Ok(Value::Real(x.$real_fn()))
        }
    };
}

bounded_builtin!(arcsin, asin, 1.0, AsinOutOfRange);
bounded_builtin!(arccos, acos, 1.0, AcosOutOfRange);
bounded_builtin!(arctan, atan, std::f64::consts::FRAC_PI_2, AtanOutOfRange);

/// Computes the absolute value, preserving the operand's tag.
///
/// `abs` of `i64::MIN` has no integer representation and reports an
/// overflow.
///
/// # Example
/// ```
/// use commacalc::interpreter::{evaluator::function::builtin::abs, value::core::Value};
///
/// assert_eq!(abs(Value::Integer(-3)), Ok(Value::Integer(3)));
/// assert_eq!(abs(Value::Real(-2.5)), Ok(Value::Real(2.5)));
/// ```
pub fn abs(argument: Value) -> EvalResult<Value> {
    match argument {
        Value::Integer(n) => n.checked_abs()
                              .map(Value::Integer)
                              .ok_or(RuntimeError::Overflow),
        Value::Real(r) => Ok(Value::Real(r.abs())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_trig_domains() {
        assert_eq!(arcsin(Value::Real(-2.5)), Err(RuntimeError::AsinOutOfRange));
        assert_eq!(arccos(Value::Integer(2)), Err(RuntimeError::AcosOutOfRange));
        assert_eq!(arcsin(Value::Integer(1)), Ok(Value::Real(std::f64::consts::FRAC_PI_2)));
        assert_eq!(arccos(Value::Integer(1)), Ok(Value::Real(0.0)));
    }

    #[test]
    fn arctan_rejects_beyond_half_pi() {
        assert_eq!(arctan(Value::Integer(2)), Err(RuntimeError::AtanOutOfRange));
        assert_eq!(arctan(Value::Integer(-2)), Err(RuntimeError::AtanOutOfRange));
        assert_eq!(arctan(Value::Integer(0)), Ok(Value::Real(0.0)));
        assert!(arctan(Value::Real(1.5)).is_ok());
    }

    #[test]
    fn trig_always_real() {
        assert_eq!(sin(Value::Integer(0)), Ok(Value::Real(0.0)));
        assert_eq!(cos(Value::Integer(0)), Ok(Value::Real(1.0)));
        assert!(tan(Value::Real(std::f64::consts::FRAC_PI_2)).is_ok());
    }

    #[test]
    fn abs_of_minimum_integer_overflows() {
        assert_eq!(abs(Value::Integer(i64::MIN)), Err(RuntimeError::Overflow));
    }
}

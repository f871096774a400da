use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{
                power::eval_pow,
                scalar::{eval_arithmetic, eval_division},
            },
            core::EvalResult,
            function::{log::log_base, root::yth_root},
        },
        value::core::Value,
    },
    util::num::floored_rem,
};

/// Evaluates a binary operation between two values.
///
/// `+ - *` go through `eval_arithmetic`, which keeps two integers exact and
/// widens anything else to real. Division always yields a real. Power calls
/// `eval_pow`. The named infix functions take `left` as their first
/// argument and `right` as their second.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// An `EvalResult<Value>` containing the evaluated result.
///
/// # Example
/// ```
/// use commacalc::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
/// };
///
/// let result = eval_binary(BinaryOperator::Add, Value::Integer(3), Value::Integer(4));
/// assert_eq!(result, Ok(Value::Integer(7)));
///
/// let result = eval_binary(BinaryOperator::Div, Value::Integer(3), Value::Integer(4));
/// assert_eq!(result, Ok(Value::Real(0.75)));
/// ```
pub fn eval_binary(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, LogBase, Mod, Mul, Pow, Sub, YthRoot};

    match op {
        Add => eval_arithmetic(left, right, i64::checked_add, |a, b| a + b),
        Sub => eval_arithmetic(left, right, i64::checked_sub, |a, b| a - b),
        Mul => eval_arithmetic(left, right, i64::checked_mul, |a, b| a * b),
        Div => eval_division(left, right),
        Pow => eval_pow(left, right),
        Mod => eval_mod(left, right),
        LogBase => log_base(left, right),
        YthRoot => yth_root(left, right),
    }
}

/// Evaluates `left mod right`.
///
/// Both operands must carry the integer tag. The remainder takes the sign
/// of the divisor, so `-7 mod 3` is `2` and `7 mod -3` is `-2`.
///
/// # Example
/// ```
/// use commacalc::{
///     error::RuntimeError,
///     interpreter::{evaluator::binary::core::eval_mod, value::core::Value},
/// };
///
/// assert_eq!(eval_mod(Value::Integer(-7), Value::Integer(3)), Ok(Value::Integer(2)));
/// assert_eq!(eval_mod(Value::Integer(7), Value::Integer(0)),
///            Err(RuntimeError::DivisionByZero));
/// assert_eq!(eval_mod(Value::Real(7.0), Value::Integer(2)),
///            Err(RuntimeError::ModulusWithNonInteger));
/// ```
pub fn eval_mod(left: Value, right: Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => {
            floored_rem(a, b).map(Value::Integer)
                             .ok_or(RuntimeError::DivisionByZero)
        },
        _ => Err(RuntimeError::ModulusWithNonInteger),
    }
}

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::core::eval_binary, function::core::eval_function},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree and returns the resulting value.
///
/// Evaluation is depth first, left child before right child, and stops at
/// the first error: when the left operand fails, the right one is never
/// evaluated.
///
/// # Example
/// ```
/// use commacalc::{
///     ast::{BinaryOperator, Expr},
///     error::RuntimeError,
///     interpreter::{evaluator::core::evaluate, value::core::Value},
/// };
///
/// let sum = Expr::binary(Expr::integer(2), BinaryOperator::Add, Expr::real(0.5));
/// assert_eq!(evaluate(&sum), Ok(Value::Real(2.5)));
///
/// let div = Expr::binary(Expr::integer(1), BinaryOperator::Div, Expr::integer(0));
/// assert_eq!(evaluate(&div), Err(RuntimeError::DivisionByZero));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<Value> {
    match expr {
        Expr::Literal { value } => Ok(Value::from(*value)),
        Expr::BinaryOp { left, op, right } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            eval_binary(*op, left, right)
        },
        Expr::FunctionCall { function, argument } => {
            let argument = evaluate(argument)?;
            eval_function(*function, argument)
        },
    }
}

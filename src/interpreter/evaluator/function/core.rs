use crate::{
    ast::PrefixFunction,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::{builtin, log, root},
        },
        value::core::Value,
    },
};

/// Type alias for prefix function handlers.
///
/// A handler receives its already evaluated argument.
type PrefixFn = fn(Value) -> EvalResult<Value>;

/// Looks up the handler implementing a prefix function.
///
/// # Example
/// ```
/// use commacalc::{ast::PrefixFunction, interpreter::evaluator::function::core::handler};
/// use commacalc::interpreter::value::core::Value;
///
/// let abs = handler(PrefixFunction::Abs);
/// assert_eq!(abs(Value::Integer(-4)), Ok(Value::Integer(4)));
/// ```
#[must_use]
pub fn handler(function: PrefixFunction) -> PrefixFn {
    match function {
        PrefixFunction::Sin => builtin::sin,
        PrefixFunction::Cos => builtin::cos,
        PrefixFunction::Tan => builtin::tan,
        PrefixFunction::Arcsin => builtin::arcsin,
        PrefixFunction::Arccos => builtin::arccos,
        PrefixFunction::Arctan => builtin::arctan,
        PrefixFunction::Sroot => root::sroot,
        PrefixFunction::Ln => log::ln,
        PrefixFunction::Abs => builtin::abs,
    }
}

/// Applies a prefix function to an evaluated argument.
///
/// # Example
/// ```
/// use commacalc::{
///     ast::PrefixFunction,
///     error::RuntimeError,
///     interpreter::{evaluator::function::core::eval_function, value::core::Value},
/// };
///
/// assert_eq!(eval_function(PrefixFunction::Sroot, Value::Integer(16)),
///            Ok(Value::Real(4.0)));
/// assert_eq!(eval_function(PrefixFunction::Ln, Value::Integer(-1)),
///            Err(RuntimeError::NonPositiveLn));
/// ```
pub fn eval_function(function: PrefixFunction, argument: Value) -> EvalResult<Value> {
    handler(function)(argument)
}

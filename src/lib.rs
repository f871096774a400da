//! # commacalc
//!
//! commacalc is the expression engine of a decimal-comma calculator.
//! It tokenizes, validates, parses and evaluates infix mathematical
//! expressions such as `sin (pi / 2) + (5 log_base 25 + 3 mod 2)`, where `,`
//! separates the integer and fractional digits of a number.
//!
//! The pipeline has four stages:
//! 1. [`interpreter::lexer::tokenize`] turns text into tokens.
//! 2. [`interpreter::validator::validate`] checks token adjacency.
//! 3. [`interpreter::parser::core::parse_expression`] climbs precedence into
//!    an [`ast::Expr`].
//! 4. [`interpreter::evaluator::core::evaluate`] computes a
//!    [`Value`](interpreter::value::core::Value).
//!
//! Every call is independent and holds no shared state, so the entry points
//! may be called from any number of threads at once. Tree building and
//! evaluation recurse once per nesting level; pathologically deep
//! parenthesization is bounded only by the calling thread's stack.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::{debug, trace};

use crate::{
    ast::Expr,
    error::CalcError,
    interpreter::{
        evaluator::core::evaluate,
        lexer::tokenize,
        parser::core::{ParseResult, parse_expression},
        validator::validate,
        value::core::Value,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that
/// represent an expression as a tree. The tree is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines numeric leaves, binary operators and prefix function calls.
/// - Assigns every operator its precedence and associativity.
/// - Prints trees fully parenthesized for inspection.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// validating, building or evaluating an expression, and the umbrella
/// `CalcError` whose message is what the calculator displays.
pub mod error;
/// Orchestrates the stages of expression evaluation.
///
/// This module ties together the lexer, validator, parser, evaluator, value
/// type and formatter.
pub mod interpreter;
/// General utilities for safe numeric conversion and helpers.
///
/// These include conversions between integer and floating-point types and
/// checked integer arithmetic shared by the evaluator.
pub mod util;

/// Parses an expression into its tree without evaluating it.
///
/// Runs the tokenizer, the validator and the builder in order and returns
/// the first failure.
///
/// # Errors
/// Returns the `ParseError` of the first stage that rejects the input.
///
/// # Example
/// ```
/// use commacalc::parse;
///
/// let tree = parse("4* sin (5) ^ 6^8*7").unwrap();
/// assert_eq!(tree.to_string(), "((4 * (sin(5) ^ (6 ^ 8))) * 7)");
///
/// assert!(parse("arcsin").is_err());
/// ```
pub fn parse(expression: &str) -> ParseResult<Expr> {
    let tokens = tokenize(expression)?;
    trace!(count = tokens.len(), "tokenized expression");

    validate(&tokens)?;

    let tree = parse_expression(&tokens)?;
    trace!(%tree, depth = tree.depth(), "built expression tree");

    Ok(tree)
}

/// Evaluates an expression and returns its typed value.
///
/// Blank input evaluates to the integer `0`. Otherwise the expression is
/// parsed with [`parse`] and its tree evaluated.
///
/// # Errors
/// - `CalcError::Parse` if the expression is not well formed.
/// - `CalcError::Runtime` if evaluation fails.
///
/// # Example
/// ```
/// use commacalc::{
///     error::{CalcError, RuntimeError},
///     interpreter::value::core::Value,
///     try_evaluate,
/// };
///
/// assert_eq!(try_evaluate("1 - (2 + 3)"), Ok(Value::Integer(-4)));
/// assert_eq!(try_evaluate(""), Ok(Value::Integer(0)));
/// assert_eq!(try_evaluate("1 / 0"),
///            Err(CalcError::Runtime(RuntimeError::DivisionByZero)));
/// ```
pub fn try_evaluate(expression: &str) -> Result<Value, CalcError> {
    if expression.trim().is_empty() {
        return Ok(Value::Integer(0));
    }

    let tree = parse(expression).inspect_err(|e| {
                                    debug!(expression, error = %e, "rejected expression");
                                })?;

    let value = evaluate(&tree).inspect_err(|e| {
                                   debug!(expression, error = %e, "evaluation failed");
                               })?;

    Ok(value)
}

/// Evaluates an expression and returns the text the calculator displays.
///
/// Successful results are formatted in decimal-comma notation. Malformed
/// input yields `invalid expression`; runtime failures yield their specific
/// message. Both outcomes share the returned string; use [`try_evaluate`]
/// to tell them apart.
///
/// # Example
/// ```
/// use commacalc::evaluate_expression;
///
/// assert_eq!(evaluate_expression("1 - (2 + 3)"), "-4");
/// assert_eq!(evaluate_expression("sin (pi / 2) + (5 log_base 25 + 3 mod 2)"), "2,5");
/// assert_eq!(evaluate_expression("arcsin (-2,5)"), "asin value out of [-1, 1]");
/// assert_eq!(evaluate_expression("1,"), "invalid expression");
/// ```
#[must_use]
pub fn evaluate_expression(expression: &str) -> String {
    match try_evaluate(expression) {
        Ok(value) => value.to_string(),
        Err(e) => e.to_string(),
    }
}

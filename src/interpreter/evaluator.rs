/// Binary operators and named infix functions.
pub mod binary;
/// Tree walking evaluation and the `EvalResult` alias.
///
/// Defines `evaluate`, the entry point of the evaluator.
pub mod core;
/// Prefix functions and the infix functions that share their code.
pub mod function;

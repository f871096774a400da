use thiserror::Error;

/// Lexical and structural errors.
///
/// Defines all error types that can occur while tokenizing, validating and
/// building the tree of an expression. The calculator reports every one of
/// them with the same generic message.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero, domain violations and integer overflow. Their messages
/// are shown to the user verbatim.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Message shown for any expression that fails before evaluation.
pub const INVALID_EXPRESSION: &str = "invalid expression";

/// Any failure of the whole pipeline.
///
/// `Display` yields exactly the string the calculator shows: the generic
/// [`INVALID_EXPRESSION`] for parse errors, the specific message for runtime
/// errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Tokenization, validation or tree building failed.
    #[error("invalid expression")]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

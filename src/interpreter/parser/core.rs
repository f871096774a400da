use crate::{
    ast::{Expr, Precedence},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_binary, unary::parse_operand},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full, validated token sequence into a tree.
///
/// This is the entry point for tree building. It starts at the lowest
/// precedence so that the whole sequence is consumed, and rejects anything
/// left over.
///
/// # Errors
/// - `UnexpectedTokenAt` for a token that cannot be placed or is left over.
/// - `UnexpectedEndOfInput` if an operand is missing.
///
/// # Example
/// ```
/// use commacalc::interpreter::{lexer::tokenize, parser::core::parse_expression};
///
/// let tokens = tokenize("2 ^ 3 ^ 2").unwrap();
/// let tree = parse_expression(&tokens).unwrap();
/// assert_eq!(tree.to_string(), "(2 ^ (3 ^ 2))");
/// ```
pub fn parse_expression(tokens: &[Token]) -> ParseResult<Expr> {
    let (expr, next) = build(tokens, 0, Precedence::Min)?;

    match tokens.get(next) {
        None => Ok(expr),
        Some(token) => Err(ParseError::UnexpectedTokenAt { token: token.to_string(),
                                                           index: next, }),
    }
}

/// Builds the tree for the tokens starting at `start`.
///
/// One operand is parsed, then operators are folded onto it for as long as
/// they bind tighter than `min_precedence`. An operator of exactly
/// `min_precedence` stops the call unless it is right associative (`^`), in
/// which case it is consumed here and chains to the right.
///
/// Recursion depth follows the nesting depth of the input, so extremely
/// deep nesting is bounded by the thread's stack.
///
/// # Parameters
/// - `tokens`: The validated token sequence.
/// - `start`: Index of the first token of the operand.
/// - `min_precedence`: The binding strength an operator must exceed to be
///   consumed by this call.
///
/// # Returns
/// The built node and the index of the first token it did not consume.
///
/// # Example
/// ```
/// use commacalc::{
///     ast::Precedence,
///     interpreter::{lexer::tokenize, parser::core::build},
/// };
///
/// let tokens = tokenize("1 * 2 + 3").unwrap();
///
/// let (tree, next) = build(&tokens, 0, Precedence::Term).unwrap();
/// assert_eq!(tree.to_string(), "(1 * 2)");
/// assert_eq!(next, 3);
/// ```
pub fn build(tokens: &[Token],
             start: usize,
             min_precedence: Precedence)
             -> ParseResult<(Expr, usize)> {
    let (root, next) = parse_operand(tokens, start)?;
    parse_binary(tokens, root, next, min_precedence)
}

use crate::{
    ast::{Expr, Precedence},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, build},
    },
};

/// Parses a single operand.
///
/// Operands are:
/// - numeric atoms: integer and decimal-comma literals, `pi` and `e`;
/// - parenthesized groups, which become one atomic operand;
/// - a prefix function with its argument;
/// - a unary minus, at the very start or right after `(`.
///
/// A prefix function's argument is built at [`Precedence::Func`], so it
/// stops at the first binary operator: `sin 5 ^ 2` is `(sin 5) ^ 2`.
///
/// A unary minus yields a synthesized `0` and leaves the `-` in place, so
/// the caller folds it as an ordinary subtraction: `-x` becomes `0 - x`.
///
/// # Parameters
/// - `tokens`: The validated token sequence.
/// - `index`: Index of the operand's first token.
///
/// # Returns
/// The operand and the index of the first token after it.
///
/// # Errors
/// - `UnexpectedTokenAt` if no operand can start here.
/// - `UnexpectedEndOfInput` if the sequence ends here.
pub(crate) fn parse_operand(tokens: &[Token], index: usize) -> ParseResult<(Expr, usize)> {
    let token = tokens.get(index)
                      .ok_or(ParseError::UnexpectedEndOfInput)?;

    match token {
        Token::Integer(n) => Ok((Expr::integer(*n), index + 1)),
        Token::Real(r) => Ok((Expr::real(*r), index + 1)),
        Token::LParen => parse_grouping(tokens, index),
        Token::Minus if opens_operand_position(tokens, index) => Ok((Expr::integer(0), index)),
        Token::Function(function) => {
            if let Some(value) = function.constant_value() {
                return Ok((Expr::real(value), index + 1));
            }
            if let Some(prefix) = function.as_prefix() {
                let (argument, next) = build(tokens, index + 1, Precedence::Func)?;
                return Ok((Expr::call(prefix, argument), next));
            }
            Err(unexpected(token, index))
        },
        _ => Err(unexpected(token, index)),
    }
}

/// Parses a parenthesized group starting at the `(` at `index`.
///
/// The contents are built as a complete expression and the matching `)` is
/// skipped.
fn parse_grouping(tokens: &[Token], index: usize) -> ParseResult<(Expr, usize)> {
    let (inner, next) = build(tokens, index + 1, Precedence::Min)?;

    match tokens.get(next) {
        Some(Token::RParen) => Ok((inner, next + 1)),
        Some(token) => Err(unexpected(token, next)),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// A `-` is unary when it is the first token or follows `(`.
fn opens_operand_position(tokens: &[Token], index: usize) -> bool {
    index == 0 || tokens.get(index - 1) == Some(&Token::LParen)
}

fn unexpected(token: &Token, index: usize) -> ParseError {
    ParseError::UnexpectedTokenAt { token: token.to_string(),
                                    index }
}

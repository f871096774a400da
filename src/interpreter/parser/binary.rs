use crate::{
    ast::{BinaryOperator, Expr, Precedence},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, build},
    },
};

/// Folds binary operators onto an already parsed operand.
///
/// Each operator takes the accumulated `root` as its left child and builds
/// its right child by recursing at its own precedence. The loop ends at
/// `)`, at the end of input, or at an operator that does not bind tighter
/// than `min_precedence`:
///
/// - `1 - 2 - 3` parses as `(1 - 2) - 3`;
/// - `2 ^ 3 ^ 2` parses as `2 ^ (3 ^ 2)`;
/// - `5 log_base 25 + 1` parses as `(5 log_base 25) + 1`.
///
/// # Parameters
/// - `tokens`: The validated token sequence.
/// - `root`: The left operand parsed so far.
/// - `index`: Index of the token after `root`.
/// - `min_precedence`: Binding strength an operator must exceed.
///
/// # Returns
/// The folded node and the index of the first unconsumed token.
pub fn parse_binary(tokens: &[Token],
                    mut root: Expr,
                    mut index: usize,
                    min_precedence: Precedence)
                    -> ParseResult<(Expr, usize)> {
    while let Some(token) = tokens.get(index)
          && let Some(op) = token_to_binary_operator(token)
    {
        let precedence = op.precedence();
        if precedence < min_precedence
           || (precedence == min_precedence && !op.is_right_associative())
        {
            break;
        }

        let (right, next) = build(tokens, index + 1, precedence)?;
        root = Expr::binary(root, op, right);
        index = next;
    }

    Ok((root, index))
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` for `+`, `-`, `*`, `/`, `^` and the named
/// infix functions `mod`, `log_base` and `yth_root`. Returns `None` for all
/// other tokens.
///
/// # Example
/// ```
/// use commacalc::{
///     ast::BinaryOperator,
///     interpreter::{
///         lexer::{Function, Token},
///         parser::binary::token_to_binary_operator,
///     },
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Function(Function::Mod)),
///            Some(BinaryOperator::Mod));
/// assert_eq!(token_to_binary_operator(&Token::Function(Function::Sin)), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        Token::Function(function) => function.as_infix(),
        _ => None,
    }
}

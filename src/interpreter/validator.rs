use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Checks a token sequence for balanced parentheses and legal adjacency.
///
/// One linear pass keeps an open-parenthesis counter and checks each token
/// against its neighbours:
///
/// | token | left neighbour | right neighbour |
/// |---|---|---|
/// | `(` | not an atom or `)` | any |
/// | `)` | not `(`, and a `(` is open | any |
/// | `-` | none, an atom, `(` or `)` | starts an operand |
/// | atom | not an atom or `)` | not an atom or `(` |
/// | `+ * / ^`, infix function | an atom or `)` | starts an operand |
/// | prefix function | not an atom or `)` | starts an operand |
///
/// Atoms are numbers, `pi` and `e`. Operands start with an atom, `(` or a
/// prefix function. Semantic problems such as division by zero are left to
/// evaluation.
///
/// The `(` row goes beyond the plain adjacency table: a group may not
/// directly follow a number, `pi`, `e` or another group, so `(1)(2)` and
/// `4(2)` are rejected like any implicit multiplication. A `-` is unary only
/// at the start or after `(`; after an operator or a function it is
/// rejected, so `2 * -3` must be written `2 * (-3)`.
///
/// # Errors
/// Returns the first violated rule as a [`ParseError`].
///
/// # Example
/// ```
/// use commacalc::interpreter::{lexer::tokenize, validator::validate};
///
/// assert!(validate(&tokenize("-sin (-6 - 3-(-4^2))").unwrap()).is_ok());
/// assert!(validate(&tokenize("sin cos + 5").unwrap()).is_err());
/// ```
pub fn validate(tokens: &[Token]) -> ParseResult<()> {
    let mut open_parens = 0usize;

    for (index, token) in tokens.iter().enumerate() {
        let previous = index.checked_sub(1).and_then(|i| tokens.get(i));
        let next = tokens.get(index + 1);

        let fits = match token {
            Token::LParen => {
                open_parens += 1;
                !previous.is_some_and(Token::ends_operand)
            },
            Token::RParen => {
                if previous == Some(&Token::LParen) {
                    return Err(ParseError::EmptyGroup { index });
                }
                if open_parens == 0 {
                    return Err(ParseError::UnmatchedClosingParen { index });
                }
                open_parens -= 1;
                true
            },
            Token::Minus => {
                previous.is_none_or(|p| p.ends_operand() || *p == Token::LParen)
                && next.is_some_and(Token::starts_operand)
            },
            t if t.is_atom() => {
                !previous.is_some_and(Token::ends_operand)
                && !next.is_some_and(|n| n.is_atom() || *n == Token::LParen)
            },
            t if t.is_prefix_function() => {
                !previous.is_some_and(Token::ends_operand) && next.is_some_and(Token::starts_operand)
            },
            _ => previous.is_some_and(Token::ends_operand) && next.is_some_and(Token::starts_operand),
        };

        if !fits {
            return Err(ParseError::MisplacedToken { token: token.to_string(),
                                                    index });
        }
    }

    if open_parens > 0 {
        return Err(ParseError::UnclosedParen { count: open_parens });
    }

    Ok(())
}

/// Returns whether [`validate`] accepts the sequence.
///
/// # Example
/// ```
/// use commacalc::interpreter::{lexer::tokenize, validator::is_valid};
///
/// assert!(is_valid(&tokenize("1 - (2 + 3)").unwrap()));
/// assert!(!is_valid(&tokenize("arcsin").unwrap()));
/// assert!(!is_valid(&tokenize("()").unwrap()));
/// ```
#[must_use]
pub fn is_valid(tokens: &[Token]) -> bool {
    validate(tokens).is_ok()
}

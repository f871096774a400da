use std::{f64::consts, fmt, ops::Range};

use logos::Logos;

use crate::{
    ast::{BinaryOperator, PrefixFunction},
    error::ParseError,
    interpreter::{formatter::format_real, parser::core::ParseResult},
};

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Numbers use `,` as the decimal separator. Every named word, whether a
/// constant, a prefix function or an infix function, is a
/// [`Token::Function`].
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Decimal-comma literal tokens, such as `3,14`.
    #[regex(r"[0-9]+,[0-9]+", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Named words: `pi`, `e`, `sin`, `mod`, `log_base`, ...
    ///
    /// A name runs until whitespace, a parenthesis or an operator.
    #[regex(r"[^\s0-9,+\-*/^()][^\s+\-*/^()]*", parse_function, allow_greedy = true)]
    Function(Function),
}

/// Declares the named words of the language.
///
/// The macro produces the `Function` enum, its name lookup in both
/// directions, and `FUNCTION_NAMES`, the public list of accepted words.
macro_rules! functions {
    (
        $(
            $name:literal => $variant:ident
        ),* $(,)?
    ) => {
        /// A named word of the language.
        ///
        /// Constants, prefix functions and infix functions share this kind;
        /// [`Function::is_constant`], [`Function::as_prefix`] and
        /// [`Function::as_infix`] tell them apart.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Function {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )*
        }

        impl Function {
            /// Looks a word up, returning `None` for unknown words.
            ///
            /// # Example
            /// ```
            /// use commacalc::interpreter::lexer::Function;
            ///
            /// assert_eq!(Function::from_name("log_base"), Some(Function::LogBase));
            /// assert_eq!(Function::from_name("log"), None);
            /// ```
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// The word as written in source.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }
        }

        /// Every word the lexer accepts.
        pub const FUNCTION_NAMES: &[&str] = &[
            $($name,)*
        ];
    };
}

functions! {
    "pi"       => Pi,
    "e"        => E,
    "sin"      => Sin,
    "cos"      => Cos,
    "tan"      => Tan,
    "arcsin"   => Arcsin,
    "arccos"   => Arccos,
    "arctan"   => Arctan,
    "mod"      => Mod,
    "sroot"    => Sroot,
    "yth_root" => YthRoot,
    "ln"       => Ln,
    "log_base" => LogBase,
    "abs"      => Abs,
}

impl Function {
    /// `pi` and `e` are atoms rather than callables.
    #[must_use]
    pub const fn is_constant(self) -> bool {
        matches!(self, Self::Pi | Self::E)
    }

    /// The value of a constant, `None` for functions.
    #[must_use]
    pub const fn constant_value(self) -> Option<f64> {
        match self {
            Self::Pi => Some(consts::PI),
            Self::E => Some(consts::E),
            _ => None,
        }
    }

    /// Maps a word to the prefix function it names, if any.
    #[must_use]
    pub const fn as_prefix(self) -> Option<PrefixFunction> {
        match self {
            Self::Sin => Some(PrefixFunction::Sin),
            Self::Cos => Some(PrefixFunction::Cos),
            Self::Tan => Some(PrefixFunction::Tan),
            Self::Arcsin => Some(PrefixFunction::Arcsin),
            Self::Arccos => Some(PrefixFunction::Arccos),
            Self::Arctan => Some(PrefixFunction::Arctan),
            Self::Sroot => Some(PrefixFunction::Sroot),
            Self::Ln => Some(PrefixFunction::Ln),
            Self::Abs => Some(PrefixFunction::Abs),
            Self::Pi | Self::E | Self::Mod | Self::YthRoot | Self::LogBase => None,
        }
    }

    /// Maps a word to the infix function it names, if any.
    #[must_use]
    pub const fn as_infix(self) -> Option<BinaryOperator> {
        match self {
            Self::Mod => Some(BinaryOperator::Mod),
            Self::LogBase => Some(BinaryOperator::LogBase),
            Self::YthRoot => Some(BinaryOperator::YthRoot),
            _ => None,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Token {
    /// Numbers, `pi` and `e`: tokens that are a complete operand by
    /// themselves.
    #[must_use]
    pub const fn is_atom(&self) -> bool {
        match self {
            Self::Integer(_) | Self::Real(_) => true,
            Self::Function(function) => function.is_constant(),
            _ => false,
        }
    }

    /// Whether the token names a prefix function such as `sin`.
    #[must_use]
    pub const fn is_prefix_function(&self) -> bool {
        matches!(self, Self::Function(function) if function.as_prefix().is_some())
    }

    /// Whether an operand can end with this token: an atom or `)`.
    #[must_use]
    pub const fn ends_operand(&self) -> bool {
        self.is_atom() || matches!(self, Self::RParen)
    }

    /// Whether an operand can start with this token: an atom, `(` or a
    /// prefix function.
    #[must_use]
    pub const fn starts_operand(&self) -> bool {
        self.is_atom() || self.is_prefix_function() || matches!(self, Self::LParen)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(r) => f.write_str(&format_real(*r)),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::Caret => f.write_str("^"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::Function(function) => write!(f, "{function}"),
        }
    }
}

/// Splits an expression into tokens.
///
/// Scanning is single pass and all-or-nothing: the first malformed piece
/// of text fails the whole call. Besides what the token patterns reject
/// (a second or trailing comma, a bare comma, unknown words), two
/// adjacency rules are checked on the source spans:
/// - a number may not touch a following word, as in `2pi`;
/// - `pi` and `e` may not touch a following `(`.
///
/// # Errors
/// Returns the [`ParseError`] describing the first malformed piece.
///
/// # Example
/// ```
/// use commacalc::interpreter::lexer::{Function, Token, tokenize};
///
/// let tokens = tokenize("sin (1,5)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Function(Function::Sin),
///                 Token::LParen,
///                 Token::Real(1.5),
///                 Token::RParen]);
///
/// assert!(tokenize("1,").is_err());
/// assert!(tokenize("pi(2)").is_err());
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut previous_span: Range<usize> = 0..0;
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let Ok(token) = result else {
            return Err(classify_error(lexer.slice(), span.start));
        };

        if let Some(previous) = tokens.last()
           && previous_span.end == span.start
        {
            check_adjacent(previous, &token, span.start)?;
        }

        tokens.push(token);
        previous_span = span;
    }

    Ok(tokens)
}

/// Rejects the token pairs that must be separated in source.
fn check_adjacent(previous: &Token, current: &Token, position: usize) -> ParseResult<()> {
    match (previous, current) {
        (Token::Integer(_) | Token::Real(_), Token::Function(_)) => {
            Err(ParseError::MissingSeparator { position })
        },
        (Token::Function(function), Token::LParen) if function.is_constant() => {
            Err(ParseError::ConstantCall { name:     function.name().to_string(),
                                           position: position - function.name().len(), })
        },
        _ => Ok(()),
    }
}

/// Names the reason a slice failed to lex.
fn classify_error(slice: &str, position: usize) -> ParseError {
    match slice.chars().next() {
        Some(c) if c.is_ascii_digit() && slice.chars().all(|c| c.is_ascii_digit()) => {
            ParseError::LiteralTooLarge { literal: slice.to_string() }
        },
        Some(c) if !c.is_ascii_digit() && !"+-*/^(),".contains(c) => {
            ParseError::UnknownName { name: slice.to_string(),
                                      position }
        },
        _ => ParseError::UnexpectedToken { token: slice.to_string(),
                                           position },
    }
}

/// Parses a decimal-comma literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid number.
fn parse_real(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().replace(',', ".").parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Resolves a word to a [`Function`].
///
/// # Returns
/// - `Some(Function)`: For the fixed set of known words.
/// - `None`: For anything else, which fails tokenization.
fn parse_function(lex: &logos::Lexer<Token>) -> Option<Function> {
    Function::from_name(lex.slice())
}

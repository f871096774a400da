use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during lexing, validation or tree
/// building.
///
/// Positions are byte offsets into the source for lexical errors and token
/// indices for structural errors.
pub enum ParseError {
    /// The lexer could not match the text at this position.
    #[error("Unexpected token '{token}' at byte {position}.")]
    UnexpectedToken {
        /// The offending slice of the source.
        token:    String,
        /// Byte offset of the slice.
        position: usize,
    },
    /// A name was read that is neither a constant nor a known function.
    #[error("Unknown name '{name}' at byte {position}.")]
    UnknownName {
        /// The name as written.
        name:     String,
        /// Byte offset of the name.
        position: usize,
    },
    /// A number was written directly against a name, as in `2pi`.
    #[error("Missing separator after number at byte {position}.")]
    MissingSeparator {
        /// Byte offset where the separator was expected.
        position: usize,
    },
    /// A constant was written directly against `(`, as in `pi(`.
    #[error("Constant '{name}' cannot be called at byte {position}.")]
    ConstantCall {
        /// The constant name.
        name:     String,
        /// Byte offset of the constant.
        position: usize,
    },
    /// An integer literal does not fit the integer type.
    #[error("Literal '{literal}' is too large.")]
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
    },
    /// A token has a neighbour it may not have.
    #[error("Token '{token}' at index {index} is misplaced.")]
    MisplacedToken {
        /// The token as written.
        token: String,
        /// Index of the token in the sequence.
        index: usize,
    },
    /// A `)` closes nothing.
    #[error("Unmatched ')' at index {index}.")]
    UnmatchedClosingParen {
        /// Index of the parenthesis.
        index: usize,
    },
    /// `()` with nothing inside.
    #[error("Empty parentheses at index {index}.")]
    EmptyGroup {
        /// Index of the closing parenthesis.
        index: usize,
    },
    /// Some `(` were never closed.
    #[error("{count} unclosed parenthesis(es).")]
    UnclosedParen {
        /// How many are still open at the end.
        count: usize,
    },
    /// The builder met a token it cannot place.
    #[error("Unexpected '{token}' at index {index}.")]
    UnexpectedTokenAt {
        /// The token as written.
        token: String,
        /// Index of the token in the sequence.
        index: usize,
    },
    /// The token sequence ended where an operand was required.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,
}

/// Binary operator parsing.
///
/// Implements the precedence-climbing loop that folds `+ - * / ^` and the
/// named infix functions onto their left operand, with right-to-left
/// chaining for `^` only.
pub mod binary;

/// Operand parsing.
///
/// Handles numeric atoms, parenthesized groups, prefix functions and the
/// rewriting of unary minus as a subtraction from zero.
pub mod unary;

/// Parser entry points.
///
/// Defines `build`, the recursive precedence-bounded builder, and
/// `parse_expression`, which builds a whole token sequence.
pub mod core;

/// The evaluator module computes the value of an expression tree.
///
/// The evaluator walks the AST depth first, applies operators and functions
/// to their evaluated operands, and stops at the first runtime failure.
///
/// # Responsibilities
/// - Applies the integer/real typing rules of every operator.
/// - Reports runtime errors such as division by zero or domain violations.
pub mod evaluator;
/// The formatter module renders numbers in decimal-comma notation.
pub mod formatter;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw expression and produces a sequence of tokens:
/// numbers, operators, parentheses and named words. This is the first stage
/// of evaluation.
///
/// # Responsibilities
/// - Converts decimal-comma literals into numeric tokens.
/// - Resolves named words against the fixed vocabulary.
/// - Reports lexical errors for unknown names or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser climbs operator precedence over a token sequence that the
/// validator has already accepted, producing a tree whose shape encodes
/// precedence and associativity.
pub mod parser;
/// The validator module checks token adjacency before the tree is built.
///
/// Each token is accepted or rejected from its immediate neighbors alone,
/// plus a running parenthesis balance.
pub mod validator;
/// The value module defines the runtime number type.
pub mod value;

use std::fmt;

use crate::interpreter::formatter::format_real;

/// Represents a literal value in the language.
///
/// Leaves of the tree hold exactly one of these. Integers come from
/// digit-only literals, reals from decimal-comma literals and the constants
/// `pi` and `e`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// Binding strength of an operator.
///
/// The builder compares these to decide how far a recursive call may
/// consume the token sequence. The order is total:
/// `Min < Term < Factor < Power < Func < Parens`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// Lower than every operator; a call at this level consumes everything.
    Min,
    /// `+` and `-`.
    Term,
    /// `*` and `/`.
    Factor,
    /// `^`.
    Power,
    /// Named prefix and infix functions.
    Func,
    /// Parenthesized groups.
    Parens,
}

/// An abstract syntax tree (AST) node.
///
/// A node is either a numeric leaf or an operator/function node owning its
/// children. Unary negation has no node of its own: `-x` is built as
/// `0 - x`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric leaf.
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// A binary operator or named infix function.
    BinaryOp {
        /// Left operand, the first argument of infix functions.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand, the second argument of infix functions.
        right: Box<Self>,
    },
    /// A prefix function applied to one operand, e.g. `sin x`.
    FunctionCall {
        /// The function.
        function: PrefixFunction,
        /// Its single argument.
        argument: Box<Self>,
    },
}

impl Expr {
    /// Creates an integer leaf.
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self::Literal { value: LiteralValue::Integer(value) }
    }

    /// Creates a real leaf.
    #[must_use]
    pub const fn real(value: f64) -> Self {
        Self::Literal { value: LiteralValue::Real(value) }
    }

    /// Creates a binary node from its two operands.
    ///
    /// # Example
    /// ```
    /// use commacalc::ast::{BinaryOperator, Expr};
    ///
    /// let e = Expr::binary(Expr::integer(1), BinaryOperator::Sub, Expr::integer(2));
    /// assert_eq!(e.to_string(), "(1 - 2)");
    /// ```
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Creates a prefix function node.
    #[must_use]
    pub fn call(function: PrefixFunction, argument: Self) -> Self {
        Self::FunctionCall { function,
                             argument: Box::new(argument) }
    }

    /// Returns the children of this node in evaluation order.
    ///
    /// Leaves have none, prefix functions one, binary nodes two.
    #[must_use]
    pub fn children(&self) -> Vec<&Self> {
        match self {
            Self::Literal { .. } => Vec::new(),
            Self::BinaryOp { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            Self::FunctionCall { argument, .. } => vec![argument.as_ref()],
        }
    }

    /// Returns the number of edges on the longest path to a leaf.
    ///
    /// Evaluation recurses once per level, so this is also the recursion
    /// depth needed to evaluate the tree.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.children()
            .into_iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for Expr {
    /// Renders the tree fully parenthesized, one pair per binary node.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value: LiteralValue::Integer(n) } => write!(f, "{n}"),
            Self::Literal { value: LiteralValue::Real(r) } => f.write_str(&format_real(*r)),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::FunctionCall { function, argument } => match argument.as_ref() {
                Self::BinaryOp { .. } => write!(f, "{function}{argument}"),
                _ => write!(f, "{function}({argument})"),
            },
        }
    }
}

/// Binary operators, including the named infix functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
    /// `x mod y`
    Mod,
    /// `x log_base y`, the logarithm of `x` in base `y`.
    LogBase,
    /// `x yth_root y`, the `y`-th root of `x`.
    YthRoot,
}

impl BinaryOperator {
    /// Returns the binding strength of the operator.
    ///
    /// # Example
    /// ```
    /// use commacalc::ast::{BinaryOperator, Precedence};
    ///
    /// assert_eq!(BinaryOperator::Sub.precedence(), Precedence::Term);
    /// assert_eq!(BinaryOperator::Mod.precedence(), Precedence::Func);
    /// ```
    #[must_use]
    pub const fn precedence(self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Term,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Pow => Precedence::Power,
            Self::Mod | Self::LogBase | Self::YthRoot => Precedence::Func,
        }
    }

    /// Only `^` chains right to left.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Mod => "mod",
            Self::LogBase => "log_base",
            Self::YthRoot => "yth_root",
        };
        f.write_str(symbol)
    }
}

/// Functions written before their single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixFunction {
    /// `sin`
    Sin,
    /// `cos`
    Cos,
    /// `tan`
    Tan,
    /// `arcsin`
    Arcsin,
    /// `arccos`
    Arccos,
    /// `arctan`
    Arctan,
    /// `sroot`, the square root.
    Sroot,
    /// `ln`
    Ln,
    /// `abs`
    Abs,
}

impl fmt::Display for PrefixFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Arcsin => "arcsin",
            Self::Arccos => "arccos",
            Self::Arctan => "arctan",
            Self::Sroot => "sroot",
            Self::Ln => "ln",
            Self::Abs => "abs",
        };
        f.write_str(name)
    }
}

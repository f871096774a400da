use std::fmt;

use crate::{ast::LiteralValue, interpreter::formatter::format_value, util::num::i64_to_f64};

/// Represents a runtime value in the interpreter.
///
/// Every value is a number tagged as integer or real. The tag decides how
/// operators behave: `+ - * ^` keep integers exact, while division and the
/// transcendental functions always produce reals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// A integer value (64 bit integer).
    Integer(i64),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<LiteralValue> for Value {
    fn from(value: LiteralValue) -> Self {
        match value {
            LiteralValue::Integer(n) => Self::Integer(n),
            LiteralValue::Real(r) => Self::Real(r),
        }
    }
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// # Example
    /// ```
    /// use commacalc::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real(), 10.0);
    /// assert_eq!(Value::Real(0.5).as_real(), 0.5);
    /// ```
    #[must_use]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Real(r) => r,
            Self::Integer(n) => i64_to_f64(n),
        }
    }

    /// Whether the value is numerically zero, whatever its tag.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Real(r) => r == 0.0,
            Self::Integer(n) => n == 0,
        }
    }

    /// Whether the value carries the integer tag.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_value(self))
    }
}

/// Binary operator dispatch.
///
/// Routes each operator to its handler and implements `mod`.
pub mod core;

/// Exponentiation.
///
/// Implements `^` with its zero, negative and real exponent rules.
pub mod power;

/// Scalar arithmetic.
///
/// Implements `+ - *` with integer/real widening, and division.
pub mod scalar;

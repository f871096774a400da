/// Numeric conversion helpers.
///
/// This module provides the integer/real conversions and checked integer
/// operations shared by the evaluator: lossy widening of integers to reals,
/// exponent narrowing, overflow-checked powers and floored remainders.
pub mod num;

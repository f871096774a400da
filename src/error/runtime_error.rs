use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during evaluation.
///
/// The `Display` text of each variant is what the calculator shows, so it is
/// kept short and lower case.
pub enum RuntimeError {
    /// Attempted division by zero, including `0 ^ -n` and `0 mod`-style cases.
    #[error("division by zero")]
    DivisionByZero,
    /// `0 ^ 0`.
    #[error("0 ^ 0 is undefined")]
    ZeroToZeroPower,
    /// A real exponent applied to a base that is not strictly positive.
    #[error("non-integer power of a non-positive number")]
    NonIntegerPowerOfNonPositive,
    /// `mod` with at least one real operand.
    #[error("modulus with non-integer arguments")]
    ModulusWithNonInteger,
    /// `log_base` of a number that is not strictly positive.
    #[error("non-positive number in log")]
    NonPositiveLog,
    /// An even or non-integer root of a negative number.
    #[error("negative number in a root")]
    NegativeRoot,
    /// `ln` of a number that is not strictly positive.
    #[error("non-positive number in ln")]
    NonPositiveLn,
    /// `arcsin` outside `[-1, 1]`.
    #[error("asin value out of [-1, 1]")]
    AsinOutOfRange,
    /// `arccos` outside `[-1, 1]`.
    #[error("acos value out of [-1, 1]")]
    AcosOutOfRange,
    /// `arctan` outside `[-pi/2, pi/2]`.
    #[error("atan value out of [-pi/2, pi/2]")]
    AtanOutOfRange,
    /// Integer arithmetic overflowed.
    #[error("integer overflow")]
    Overflow,
}

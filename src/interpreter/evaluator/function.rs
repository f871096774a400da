/// Trigonometric and absolute value builtins.
///
/// `sin`, `cos`, `tan`, the bounded inverse functions and `abs`.
pub mod builtin;
/// Prefix function dispatch.
pub mod core;
/// Logarithm function implementations.
///
/// The natural logarithm `ln` and the infix `log_base`.
pub mod log;
/// Root function implementations.
///
/// The prefix square root `sroot` and the infix `yth_root`.
pub mod root;

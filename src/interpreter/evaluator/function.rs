/// Named constants.
///
/// `pi`, `tau` and `e` with their upper-case and Greek spellings.
pub mod constants;
/// Trigonometric and hyperbolic functions and their inverses.
///
/// Computed in floating point and converted back to a decimal; arguments
/// outside a function's real domain are rejected up front.
pub mod trig;
/// Logarithm function implementations.
///
/// Natural, base-10 and arbitrary-base logarithms.
pub mod log;
/// The `sqrt` and `isqrt` function implementations.
pub mod sqrt;
/// `factorial` and `gamma`, sharing the rule of postfix `!`.
pub mod factorial;
/// `min`, `max`, `sums` and the range sum `sum`.
pub mod aggregate;

pub mod core;

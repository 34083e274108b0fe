/// Result value representation.
///
/// Defines [`core::Number`], the value handed back to callers of
/// [`crate::solve`]: an exact integer when the decimal result is integral,
/// otherwise a normalized decimal.
pub mod core;

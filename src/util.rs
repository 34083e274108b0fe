/// Numeric conversion helpers.
///
/// Checked conversions between `Decimal`, `f64` and machine integers. The
/// interpreter computes most things in decimal, but trigonometric, hyperbolic
/// and Gamma functions are only available in floating point; these helpers make
/// the round trip explicit and turn non-finite or out-of-range values into
/// domain errors instead of silently producing `NaN` or infinity.
pub mod num;

use rust_decimal::{
    Decimal,
    prelude::{FromPrimitive, ToPrimitive},
};

use crate::{error::DomainError, interpreter::evaluator::core::EvalResult};

/// Significant digits an `f64` carries reliably.
///
/// Results computed in floating point are cut to this many digits, so a
/// context precision above it never reports float noise as exact digits.
pub const FLOAT_DIGITS: u32 = 15;

/// Smallest magnitude the decimal representation can hold (`1e-28`).
///
/// Finite `f64` results below this are flushed to zero instead of being
/// reported as unrepresentable.
pub const DECIMAL_EPSILON: f64 = 1e-28;

/// Returns `true` if `value` has no fractional part.
///
/// ## Example
/// ```
/// use inline_calc::util::num::is_integral;
/// use rust_decimal::Decimal;
///
/// assert!(is_integral(Decimal::new(400, 2))); // 4.00
/// assert!(!is_integral(Decimal::new(35, 1))); // 3.5
/// ```
#[must_use]
pub fn is_integral(value: Decimal) -> bool {
    value.fract().is_zero()
}

/// Converts a decimal to `f64` for functions that are only available in
/// floating point.
///
/// ## Errors
/// Returns `DomainError::Overflow` if the conversion is not possible.
pub fn decimal_to_f64(value: Decimal, position: usize) -> EvalResult<f64> {
    value.to_f64().ok_or(DomainError::Overflow { position })
}

/// Converts an `f64` result back into a decimal.
///
/// Non-finite values (poles, `NaN` from out-of-domain inputs) are reported as
/// undefined for `function`; finite values too large for the decimal mantissa
/// overflow. The result is rounded to [`FLOAT_DIGITS`] significant digits.
///
/// ## Example
/// ```
/// use inline_calc::{error::DomainError, util::num::f64_to_decimal};
///
/// let v = f64_to_decimal(0.5, "sin", 0).unwrap();
/// assert_eq!(v.to_string(), "0.5");
///
/// let third = f64_to_decimal(1.0 / 3.0, "atan", 0).unwrap();
/// assert_eq!(third.to_string(), "0.333333333333333");
///
/// let err = f64_to_decimal(f64::NAN, "asin", 3).unwrap_err();
/// assert!(matches!(err, DomainError::Undefined { position: 3, .. }));
/// ```
pub fn f64_to_decimal(value: f64, function: &str, position: usize) -> EvalResult<Decimal> {
    if !value.is_finite() {
        return Err(DomainError::Undefined { function: function.to_string(),
                                            position });
    }
    if value.abs() < DECIMAL_EPSILON {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_f64(value).and_then(|v| v.round_sf(FLOAT_DIGITS))
                            .map(|v| v.normalize())
                            .ok_or(DomainError::Overflow { position })
}

/// Converts a non-negative integral decimal to `u64`.
///
/// ## Errors
/// - `DomainError::NotIntegral` if the value has a fractional part.
/// - `DomainError::Overflow` if the value is negative or too large.
pub fn decimal_to_u64(value: Decimal, function: &str, position: usize) -> EvalResult<u64> {
    if !is_integral(value) {
        return Err(DomainError::NotIntegral { function: function.to_string(),
                                              value,
                                              position });
    }
    value.to_u64().ok_or(DomainError::Overflow { position })
}

/// Converts a non-negative integral decimal to `u128`.
///
/// Every integral decimal fits, since the mantissa is 96 bits wide.
///
/// ## Errors
/// - `DomainError::NotIntegral` if the value has a fractional part.
/// - `DomainError::Overflow` if the value is negative.
pub fn decimal_to_u128(value: Decimal, function: &str, position: usize) -> EvalResult<u128> {
    if !is_integral(value) {
        return Err(DomainError::NotIntegral { function: function.to_string(),
                                              value,
                                              position });
    }
    value.to_u128().ok_or(DomainError::Overflow { position })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiny_floats_flush_to_zero() {
        assert_eq!(f64_to_decimal(1e-40, "sin", 0).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn huge_floats_overflow() {
        assert!(matches!(f64_to_decimal(1e40, "gamma", 7),
                         Err(DomainError::Overflow { position: 7 })));
    }

    #[test]
    fn float_results_keep_only_reliable_digits() {
        let root = f64_to_decimal(2.0_f64.sqrt(), "sqrt", 0).unwrap();
        assert_eq!(root, "1.41421356237310".parse::<Decimal>().unwrap());
        assert_eq!(f64_to_decimal(0.25, "sin", 0).unwrap().to_string(), "0.25");
    }

    #[test]
    fn fractional_values_are_not_integers() {
        assert!(matches!(decimal_to_u64(Decimal::new(25, 1), "isqrt", 0),
                         Err(DomainError::NotIntegral { .. })));
        assert_eq!(decimal_to_u128(Decimal::new(1200, 2), "isqrt", 0).unwrap(), 12);
    }
}

use rust_decimal::{Decimal, MathematicalOps};

use crate::{
    error::DomainError,
    interpreter::evaluator::{core::EvalResult, utils::check_arity},
    util::num::{decimal_to_f64, f64_to_decimal},
};

/// Defines a one-argument builtin evaluated in decimal through a checked
/// `rust_decimal` method.
///
/// A `None` from the method (a pole of `tan`, or an intermediate overflow)
/// is reported as undefined.
macro_rules! decimal_builtin {
    ($fname:ident, $checked_fn:ident) => {
        #[doc = concat!("`", stringify!($fname), "(x)`, computed in decimal to the full 28 digits.")]
        pub fn $fname(args: &[Decimal], position: usize) -> EvalResult<Decimal> {
            let [value] = check_arity(stringify!($fname), args, position)?;
            value.$checked_fn()
                 .ok_or_else(|| DomainError::Undefined { function: stringify!($fname).to_string(),
                                                         position })
        }
    };
}

/// Defines a one-argument builtin evaluated in floating point.
///
/// The generated function converts its argument to `f64`, applies the float
/// method and converts the result back, keeping at most
/// [`crate::util::num::FLOAT_DIGITS`] significant digits. An optional domain
/// predicate on the decimal argument rejects inputs outside the function's
/// real domain with `OutOfDomain` before any conversion happens.
///
/// # Example
/// ```
/// use inline_calc::interpreter::evaluator::function::trig::atan;
/// use rust_decimal::Decimal;
///
/// let r = atan(&[Decimal::ZERO], 0).unwrap();
/// assert_eq!(r, Decimal::ZERO);
/// ```
macro_rules! float_builtin {
    ($fname:ident, $float_fn:ident) => {
        float_builtin!($fname, $float_fn, |_| true);
    };
    ($fname:ident, $float_fn:ident, $in_domain:expr) => {
        #[doc = concat!("`", stringify!($fname), "(x)`, computed in floating point.")]
        pub fn $fname(args: &[Decimal], position: usize) -> EvalResult<Decimal> {
            let [value] = check_arity(stringify!($fname), args, position)?;
            let in_domain: fn(Decimal) -> bool = $in_domain;
            if !in_domain(value) {
                return Err(DomainError::OutOfDomain { function: stringify!($fname).to_string(),
                                                      value,
                                                      position });
            }
            let x = decimal_to_f64(value, position)?;
            f64_to_decimal(x.$float_fn(), stringify!($fname), position)
        }
    };
}

decimal_builtin!(sin, checked_sin);
decimal_builtin!(cos, checked_cos);
decimal_builtin!(tan, checked_tan);
float_builtin!(asin, asin, |x| x.abs() <= Decimal::ONE);
float_builtin!(acos, acos, |x| x.abs() <= Decimal::ONE);
float_builtin!(atan, atan);
float_builtin!(sinh, sinh);
float_builtin!(cosh, cosh);
float_builtin!(tanh, tanh);
float_builtin!(asinh, asinh);
float_builtin!(acosh, acosh, |x| x >= Decimal::ONE);
float_builtin!(atanh, atanh, |x| x.abs() < Decimal::ONE);

/// Computes the angle of the point `(x, y)`, given as `atan2(y, x)`.
///
/// # Example
/// ```
/// use inline_calc::interpreter::evaluator::function::trig::atan2;
/// use rust_decimal::Decimal;
///
/// let angle = atan2(&[Decimal::ONE, Decimal::ONE], 0).unwrap();
/// assert_eq!(angle.round_dp(6).to_string(), "0.785398");
/// ```
pub fn atan2(args: &[Decimal], position: usize) -> EvalResult<Decimal> {
    let [y, x] = check_arity("atan2", args, position)?;
    let y = decimal_to_f64(y, position)?;
    let x = decimal_to_f64(x, position)?;
    f64_to_decimal(y.atan2(x), "atan2", position)
}

/// Converts degrees to radians by multiplying with `π/180`.
///
/// # Example
/// ```
/// use inline_calc::interpreter::evaluator::function::trig::rad;
/// use rust_decimal::Decimal;
///
/// let r = rad(&[Decimal::from(180)], 0).unwrap();
/// assert_eq!(r.round_dp(20), Decimal::PI.round_dp(20));
/// ```
pub fn rad(args: &[Decimal], position: usize) -> EvalResult<Decimal> {
    let [degrees] = check_arity("rad", args, position)?;
    let factor = Decimal::PI / Decimal::from(180);
    degrees.checked_mul(factor).ok_or(DomainError::Overflow { position })
}

/// Converts radians to degrees by multiplying with `180/π`.
pub fn deg(args: &[Decimal], position: usize) -> EvalResult<Decimal> {
    let [radians] = check_arity("deg", args, position)?;
    let factor = Decimal::from(180) / Decimal::PI;
    radians.checked_mul(factor).ok_or(DomainError::Overflow { position })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn inverse_functions_check_their_domain() {
        assert!(matches!(asin(&[dec("1.5")], 0), Err(DomainError::OutOfDomain { .. })));
        assert!(matches!(acos(&[dec("-2")], 0), Err(DomainError::OutOfDomain { .. })));
        assert!(matches!(acosh(&[dec("0.5")], 0), Err(DomainError::OutOfDomain { .. })));
        assert!(matches!(atanh(&[Decimal::ONE], 0), Err(DomainError::OutOfDomain { .. })));
        assert!(asin(&[Decimal::ONE], 0).is_ok());
        assert_eq!(acosh(&[Decimal::ONE], 0), Ok(Decimal::ZERO));
    }

    #[test]
    fn out_of_range_results_overflow() {
        assert!(matches!(cosh(&[dec("100")], 0), Err(DomainError::Overflow { .. })));
    }

    #[test]
    fn degrees_round_trip_within_precision() {
        let radians = rad(&[dec("90")], 0).unwrap();
        assert_eq!(radians.round_dp(9), (Decimal::PI / Decimal::TWO).round_dp(9));
        assert_eq!(deg(&[Decimal::PI], 0).unwrap().round_dp(9), dec("180"));
    }

    #[test]
    fn sine_family_uses_every_decimal_digit() {
        let sine = sin(&[dec("0.5")], 0).unwrap();
        assert!((sine - dec("0.4794255386042030002732879352")).abs() < dec("0.00000000000000000001"));

        let cosine = cos(&[Decimal::ONE], 0).unwrap();
        assert!((cosine - dec("0.5403023058681397174009366074")).abs() < dec("0.00000000000000000001"));

        assert_eq!(tan(&[Decimal::ZERO], 0), Ok(Decimal::ZERO));
    }

    #[test]
    fn float_functions_stop_at_fifteen_digits() {
        let angle = atan(&[Decimal::ONE], 0).unwrap();
        assert_eq!(angle, dec("0.785398163397448"));
        assert_eq!(angle.round_sf(15), Some(angle));
    }

    #[test]
    fn wrong_argument_counts_are_errors() {
        assert!(matches!(sin(&[], 0),
                         Err(DomainError::ArgumentCountMismatch { found: 0, .. })));
        assert!(matches!(acosh(&[Decimal::ONE, Decimal::ONE], 0),
                         Err(DomainError::ArgumentCountMismatch { found: 2, .. })));
        assert!(matches!(atan2(&[Decimal::ONE], 0),
                         Err(DomainError::ArgumentCountMismatch { found: 1, .. })));
        assert!(rad(&[], 0).is_err());
        assert!(deg(&[], 0).is_err());
    }

    #[test]
    fn known_values() {
        assert_eq!(cos(&[Decimal::ZERO], 0), Ok(Decimal::ONE));
        assert_eq!(atan(&[Decimal::ONE], 0).unwrap().round_dp(9), dec("0.785398163"));
        assert_eq!(sin(&[dec("0.5")], 0).unwrap().round_dp(9), dec("0.479425539"));
    }
}

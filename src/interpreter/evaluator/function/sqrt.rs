use rust_decimal::{Decimal, MathematicalOps, prelude::FromPrimitive};

use crate::{
    error::DomainError,
    interpreter::evaluator::{core::EvalResult, utils::check_arity},
    util::num::decimal_to_u128,
};

/// Computes the square root in decimal arithmetic.
///
/// Negative inputs produce a `NegativeSquareRoot` error.
///
/// # Example
/// ```
/// use inline_calc::interpreter::evaluator::function::sqrt::sqrt;
/// use rust_decimal::Decimal;
///
/// let r = sqrt(&[Decimal::from(16)], 0).unwrap();
/// assert_eq!(r, Decimal::from(4));
///
/// assert!(sqrt(&[Decimal::from(-4)], 0).is_err());
/// ```
pub fn sqrt(args: &[Decimal], position: usize) -> EvalResult<Decimal> {
    let [value] = check_arity("sqrt", args, position)?;
    if value < Decimal::ZERO {
        return Err(DomainError::NegativeSquareRoot { value, position });
    }
    value.sqrt().ok_or(DomainError::Overflow { position })
}

/// Computes the integer square root: the largest integer whose square does not
/// exceed the argument.
///
/// The argument must be a non-negative integer.
///
/// # Example
/// ```
/// use inline_calc::interpreter::evaluator::function::sqrt::isqrt;
/// use rust_decimal::Decimal;
///
/// assert_eq!(isqrt(&[Decimal::from(17)], 0).unwrap(), Decimal::from(4));
/// assert!(isqrt(&[Decimal::new(25, 1)], 0).is_err());
/// ```
pub fn isqrt(args: &[Decimal], position: usize) -> EvalResult<Decimal> {
    let [value] = check_arity("isqrt", args, position)?;
    if value < Decimal::ZERO {
        return Err(DomainError::NegativeSquareRoot { value, position });
    }
    let root = decimal_to_u128(value.abs(), "isqrt", position)?.isqrt();
    Decimal::from_u128(root).ok_or(DomainError::Overflow { position })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isqrt_of_large_integers() {
        let value: Decimal = "79228162514264337593543950335".parse().unwrap();
        assert_eq!(isqrt(&[value], 0).unwrap(), Decimal::from(281_474_976_710_655_u64));
    }

    #[test]
    fn isqrt_rejects_negative_and_fractional_values() {
        assert!(matches!(isqrt(&[Decimal::from(-9)], 0),
                         Err(DomainError::NegativeSquareRoot { .. })));
        assert!(matches!(isqrt(&[Decimal::new(5, 1)], 3),
                         Err(DomainError::NotIntegral { position: 3, .. })));
    }

    #[test]
    fn missing_argument_is_an_error() {
        assert!(matches!(sqrt(&[], 0), Err(DomainError::ArgumentCountMismatch { found: 0, .. })));
        assert!(matches!(isqrt(&[Decimal::ONE, Decimal::TWO], 0),
                         Err(DomainError::ArgumentCountMismatch { found: 2, .. })));
    }

    #[test]
    fn sqrt_of_fraction() {
        let r = sqrt(&[Decimal::new(25, 2)], 0).unwrap();
        assert_eq!(r, Decimal::new(5, 1));
    }
}

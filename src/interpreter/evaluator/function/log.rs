use rust_decimal::{Decimal, MathematicalOps};

use crate::{
    error::DomainError,
    interpreter::evaluator::{core::EvalResult, utils::check_arity},
};

/// Computes the natural logarithm.
///
/// Non-positive arguments produce a `NonPositiveLogarithm` error.
///
/// # Example
/// ```
/// use inline_calc::interpreter::evaluator::function::log::ln;
/// use rust_decimal::Decimal;
///
/// assert_eq!(ln(&[Decimal::ONE], 0).unwrap().round_dp(9), Decimal::ZERO);
/// assert!(ln(&[Decimal::ZERO], 0).is_err());
/// ```
pub fn ln(args: &[Decimal], position: usize) -> EvalResult<Decimal> {
    let [value] = check_arity("ln", args, position)?;
    checked_ln(value, position)
}

/// Computes the base-10 logarithm.
pub fn log10(args: &[Decimal], position: usize) -> EvalResult<Decimal> {
    let [value] = check_arity("log10", args, position)?;
    let value = ensure_positive(value, position)?;
    value.checked_log10().ok_or(DomainError::Overflow { position })
}

/// Computes the logarithm of a value with respect to a given base.
///
/// Accepts one argument (base 10) or two arguments: `value` and `base`,
/// computed as `ln(value) / ln(base)`. The base must be positive and
/// different from one.
///
/// # Example
/// ```
/// use inline_calc::interpreter::evaluator::function::log::log;
/// use rust_decimal::Decimal;
///
/// let result = log(&[Decimal::from(8), Decimal::from(2)], 0).unwrap();
/// assert_eq!(result.round_dp(9), Decimal::from(3));
///
/// // base 1 is rejected
/// assert!(log(&[Decimal::from(8), Decimal::ONE], 0).is_err());
/// ```
pub fn log(args: &[Decimal], position: usize) -> EvalResult<Decimal> {
    let (value, base) = match *args {
        [_] => return log10(args, position),
        [value, base] => (value, base),
        _ => {
            return Err(DomainError::ArgumentCountMismatch { name: "log".to_string(),
                                                            expected: "1 or 2".to_string(),
                                                            found: args.len(),
                                                            position });
        },
    };

    if base <= Decimal::ZERO || base == Decimal::ONE {
        return Err(DomainError::InvalidLogBase { base, position });
    }
    let numerator = checked_ln(value, position)?;
    let denominator = checked_ln(base, position)?;
    numerator.checked_div(denominator)
             .ok_or(DomainError::Overflow { position })
}

fn ensure_positive(value: Decimal, position: usize) -> EvalResult<Decimal> {
    if value <= Decimal::ZERO {
        return Err(DomainError::NonPositiveLogarithm { value, position });
    }
    Ok(value)
}

fn checked_ln(value: Decimal, position: usize) -> EvalResult<Decimal> {
    ensure_positive(value, position)?.checked_ln()
                                     .ok_or(DomainError::Overflow { position })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn log_defaults_to_base_ten() {
        assert_eq!(log(&[dec("1000")], 0).unwrap().round_dp(9), dec("3"));
        assert_eq!(log10(&[dec("0.01")], 0).unwrap().round_dp(9), dec("-2"));
    }

    #[test]
    fn natural_logarithm() {
        assert_eq!(ln(&[Decimal::E], 0).unwrap().round_dp(9), Decimal::ONE);
        assert_eq!(ln(&[dec("2")], 0).unwrap().round_dp(9), dec("0.693147181"));
    }

    #[test]
    fn argument_counts_are_checked() {
        assert!(matches!(ln(&[], 0), Err(DomainError::ArgumentCountMismatch { .. })));
        assert!(matches!(log10(&[Decimal::ONE, Decimal::TEN], 0),
                         Err(DomainError::ArgumentCountMismatch { .. })));
        assert!(matches!(log(&[], 1),
                         Err(DomainError::ArgumentCountMismatch { ref expected, found: 0, .. }) if expected == "1 or 2"));
    }

    #[test]
    fn invalid_arguments() {
        assert_eq!(ln(&[dec("-1")], 5),
                   Err(DomainError::NonPositiveLogarithm { value:    dec("-1"),
                                                           position: 5, }));
        assert!(matches!(log10(&[Decimal::ZERO], 0),
                         Err(DomainError::NonPositiveLogarithm { .. })));
        assert!(matches!(log(&[dec("8"), dec("-2")], 0), Err(DomainError::InvalidLogBase { .. })));
        assert!(matches!(log(&[dec("8"), Decimal::ZERO], 0),
                         Err(DomainError::InvalidLogBase { .. })));
        assert!(matches!(log(&[dec("-8"), dec("2")], 0),
                         Err(DomainError::NonPositiveLogarithm { .. })));
    }
}

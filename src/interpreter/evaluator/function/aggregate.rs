use rust_decimal::Decimal;

use crate::{
    error::DomainError,
    interpreter::evaluator::{
        core::EvalResult,
        utils::{check_arity, range_sum},
    },
};

/// Returns the largest argument.
///
/// # Example
/// ```
/// use inline_calc::interpreter::evaluator::function::aggregate::max;
/// use rust_decimal::Decimal;
///
/// let r = max(&[Decimal::ONE, Decimal::from(-4), Decimal::TEN], 0).unwrap();
/// assert_eq!(r, Decimal::TEN);
/// ```
pub fn max(args: &[Decimal], position: usize) -> EvalResult<Decimal> {
    args.iter()
        .copied()
        .max()
        .ok_or_else(|| DomainError::ArgumentCountMismatch { name: "max".to_string(),
                                                            expected: "at least 1".to_string(),
                                                            found: 0,
                                                            position })
}

/// Returns the smallest argument.
pub fn min(args: &[Decimal], position: usize) -> EvalResult<Decimal> {
    args.iter()
        .copied()
        .min()
        .ok_or_else(|| DomainError::ArgumentCountMismatch { name: "min".to_string(),
                                                            expected: "at least 1".to_string(),
                                                            found: 0,
                                                            position })
}

/// Adds up all arguments.
///
/// # Example
/// ```
/// use inline_calc::interpreter::evaluator::function::aggregate::sums;
/// use rust_decimal::Decimal;
///
/// let r = sums(&[Decimal::ONE, Decimal::TWO, Decimal::new(5, 1)], 0).unwrap();
/// assert_eq!(r, Decimal::new(35, 1));
/// ```
pub fn sums(args: &[Decimal], position: usize) -> EvalResult<Decimal> {
    args.iter().try_fold(Decimal::ZERO, |total, value| {
                    total.checked_add(*value)
                         .ok_or(DomainError::Overflow { position })
                })
}

/// Sums the integer-step range `low + (low + 1) + ...` up to `high`, given as
/// `sum(low, high)`.
///
/// # Example
/// ```
/// use inline_calc::interpreter::evaluator::function::aggregate::sum;
/// use rust_decimal::Decimal;
///
/// assert_eq!(sum(&[Decimal::ONE, Decimal::from(5)], 0).unwrap(), Decimal::from(15));
/// assert!(sum(&[Decimal::from(5), Decimal::ONE], 0).is_err());
/// ```
pub fn sum(args: &[Decimal], position: usize) -> EvalResult<Decimal> {
    let [low, high] = check_arity("sum", args, position)?;
    range_sum(low, high, position)
}

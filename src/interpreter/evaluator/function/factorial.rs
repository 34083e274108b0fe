use rust_decimal::Decimal;

use crate::interpreter::evaluator::{
    core::EvalResult,
    utils::{check_arity, factorial_or_gamma},
};

/// The call form of postfix `!`, registered as `factorial`, `fact`, `gamma`
/// and `Γ`.
///
/// `name` is the spelling used at the call site, reported in errors.
///
/// # Example
/// ```
/// use inline_calc::interpreter::evaluator::function::factorial::factorial;
/// use rust_decimal::Decimal;
///
/// let r = factorial("fact", &[Decimal::from(5)], 0).unwrap();
/// assert_eq!(r, Decimal::from(120));
/// ```
pub fn factorial(name: &str, args: &[Decimal], position: usize) -> EvalResult<Decimal> {
    let [value] = check_arity(name, args, position)?;
    factorial_or_gamma(value, name, position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;

    #[test]
    fn each_spelling_reports_its_own_name() {
        assert!(matches!(factorial("Γ", &[], 6),
                         Err(DomainError::ArgumentCountMismatch { ref name, position: 6, .. }) if name == "Γ"));
        assert!(matches!(factorial("fact", &[Decimal::from(-2)], 0),
                         Err(DomainError::NegativeFactorial { .. })));
    }
}

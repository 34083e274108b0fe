use rust_decimal::Decimal;

use crate::{
    error::DomainError,
    interpreter::evaluator::core::EvalResult,
    util::num::{decimal_to_f64, decimal_to_u64, f64_to_decimal, is_integral},
};

/// Checks that a builtin received exactly `N` arguments and hands them back as
/// an array.
///
/// Builtins destructure their arguments through this, so calling one directly
/// with the wrong number of arguments is an error rather than a panic.
///
/// # Errors
/// Returns `ArgumentCountMismatch` naming `name` if `args.len() != N`.
///
/// ## Example
/// ```
/// use inline_calc::interpreter::evaluator::utils::check_arity;
/// use rust_decimal::Decimal;
///
/// let [low, high] = check_arity("sum", &[Decimal::ONE, Decimal::TEN], 0).unwrap();
/// assert_eq!((low, high), (Decimal::ONE, Decimal::TEN));
///
/// assert!(check_arity::<2>("sum", &[Decimal::ONE], 0).is_err());
/// ```
pub fn check_arity<const N: usize>(name: &str,
                                   args: &[Decimal],
                                   position: usize)
                                   -> EvalResult<[Decimal; N]> {
    <[Decimal; N]>::try_from(args).map_err(|_| DomainError::ArgumentCountMismatch { name: name.to_string(),
                                                                                 expected: N.to_string(),
                                                                                 found: args.len(),
                                                                                 position })
}

/// Computes `n!` exactly.
///
/// The product is accumulated with checked multiplication, so the loop stops
/// at the first factor that no longer fits (the largest representable
/// factorial is `27!`).
///
/// # Parameters
/// - `n`: The operand.
/// - `position`: Source position for error reporting.
///
/// # Returns
/// The factorial as a decimal.
///
/// # Errors
/// Returns `Overflow` if the result is too large.
///
/// # Example
/// ```
/// use inline_calc::interpreter::evaluator::utils::factorial;
/// use rust_decimal::Decimal;
///
/// assert_eq!(factorial(5, 0).unwrap(), Decimal::from(120));
/// assert_eq!(factorial(0, 0).unwrap(), Decimal::ONE);
/// assert!(factorial(28, 0).is_err());
/// ```
pub fn factorial(n: u64, position: usize) -> EvalResult<Decimal> {
    (2..=n).try_fold(Decimal::ONE, |acc, k| {
               acc.checked_mul(Decimal::from(k))
                  .ok_or(DomainError::Overflow { position })
           })
}

/// Computes the Gamma function Γ(z) using the Lanczos approximation.
///
/// Uses the reflection formula for `z < 0.5` and a 9-term Lanczos series
/// otherwise. The result is accurate to roughly 15 significant digits, well
/// beyond any decimal precision it is rounded to afterwards. At the poles
/// (zero and negative integers) the result is not finite.
///
/// # Example
/// ```
/// use inline_calc::interpreter::evaluator::utils::euler_gamma;
///
/// // Γ(5) = 4! = 24
/// let g = euler_gamma(5.0);
/// assert!((g - 24.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn euler_gamma(z: f64) -> f64 {
    // Lanczos coefficients, g = 7, n = 9.
    const COEFFS: [f64; 9] = [0.999_999_999_999_809_9,
                              676.520_368_121_885_1,
                              -1_259.139_216_722_402_8,
                              771.323_428_777_653_1,
                              -176.615_029_162_140_6,
                              12.507_343_278_686_905,
                              -0.138_571_095_265_720_12,
                              9.984_369_578_019_572e-6,
                              1.505_632_735_149_311_6e-7];
    const G: f64 = 7.0;

    if z < 0.5 {
        return std::f64::consts::PI / ((std::f64::consts::PI * z).sin() * euler_gamma(1.0 - z));
    }

    let z_minus_1 = z - 1.0;
    let mut x = COEFFS[0];
    let mut offset = 1.0;
    for &c in &COEFFS[1..] {
        x += c / (z_minus_1 + offset);
        offset += 1.0;
    }

    let t = z_minus_1 + G + 0.5;
    std::f64::consts::TAU.sqrt() * t.powf(z_minus_1 + 0.5) * (-t).exp() * x
}

/// Applies the factorial rule shared by postfix `!` and the `factorial`
/// builtins.
///
/// Non-negative integers get the exact factorial; fractional values get
/// `Γ(value + 1)`; negative integers are rejected.
///
/// # Parameters
/// - `value`: The operand.
/// - `function`: Name reported in errors (`"!"` for the postfix operator).
/// - `position`: Source position for error reporting.
///
/// # Errors
/// - `NegativeFactorial` for a negative integer.
/// - `Overflow` if the result is too large.
/// - `Undefined` at a pole of the Gamma function.
///
/// Fractional results come from a floating point Gamma and carry at most
/// [`crate::util::num::FLOAT_DIGITS`] significant digits, whatever the context
/// precision.
pub fn factorial_or_gamma(value: Decimal, function: &str, position: usize) -> EvalResult<Decimal> {
    if is_integral(value) {
        if value < Decimal::ZERO {
            return Err(DomainError::NegativeFactorial { value, position });
        }
        return factorial(decimal_to_u64(value.abs(), function, position)?, position);
    }

    let x = decimal_to_f64(value, position)?;
    let gamma = euler_gamma(x + 1.0);
    if !gamma.is_finite() && x > 0.0 {
        return Err(DomainError::Overflow { position });
    }
    f64_to_decimal(gamma, function, position)
}

/// Sums `low + (low + 1) + ...` for every term not greater than `high`.
///
/// Uses closed forms instead of iterating: for `low` of `0` or `1` the sum is
/// the triangular number of `⌊high⌋`; otherwise, with `n = ⌊high - low⌋ + 1`
/// terms, it is `n * low + n(n - 1)/2`.
///
/// # Parameters
/// - `low`: First term.
/// - `high`: Inclusive upper bound.
/// - `position`: Source position for error reporting.
///
/// # Errors
/// - `InvertedRange` if `low > high`.
/// - `Overflow` if the sum is too large.
///
/// # Example
/// ```
/// use inline_calc::interpreter::evaluator::utils::range_sum;
/// use rust_decimal::Decimal;
///
/// let sum = range_sum(Decimal::from(1), Decimal::from(100), 0).unwrap();
/// assert_eq!(sum, Decimal::from(5050));
/// ```
pub fn range_sum(low: Decimal, high: Decimal, position: usize) -> EvalResult<Decimal> {
    if low > high {
        return Err(DomainError::InvertedRange { low,
                                                high,
                                                position });
    }
    if low.is_zero() || low == Decimal::ONE {
        return triangular(high.floor(), position);
    }

    let overflow = || DomainError::Overflow { position };
    let count = high.checked_sub(low)
                    .ok_or_else(overflow)?
                    .floor()
                    .checked_add(Decimal::ONE)
                    .ok_or_else(overflow)?;
    let start = count.checked_mul(low).ok_or_else(overflow)?;
    start.checked_add(triangular(count - Decimal::ONE, position)?)
         .ok_or_else(overflow)
}

/// `n(n + 1)/2` for a non-negative integral `n`.
fn triangular(n: Decimal, position: usize) -> EvalResult<Decimal> {
    n.checked_add(Decimal::ONE)
     .and_then(|next| n.checked_mul(next))
     .map(|product| product / Decimal::TWO)
     .ok_or(DomainError::Overflow { position })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn naive_sum(low: Decimal, high: Decimal) -> Decimal {
        let mut total = Decimal::ZERO;
        let mut term = low;
        while term <= high {
            total += term;
            term += Decimal::ONE;
        }
        total
    }

    #[test]
    fn closed_form_matches_iteration() {
        for (low, high) in [("2", "10"),
                            ("1", "5"),
                            ("0", "7.5"),
                            ("1", "1"),
                            ("-3", "4"),
                            ("1.5", "6.2"),
                            ("-2.5", "-0.5"),
                            ("5", "5"),
                            ("0.25", "0.5")]
        {
            let (low, high) = (dec(low), dec(high));
            assert_eq!(range_sum(low, high, 0).unwrap(),
                       naive_sum(low, high),
                       "sum({low}, {high})");
        }
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert_eq!(range_sum(dec("5"), dec("1"), 9),
                   Err(DomainError::InvertedRange { low:      dec("5"),
                                                    high:     dec("1"),
                                                    position: 9, }));
    }

    #[test]
    fn factorial_limits() {
        assert_eq!(factorial(20, 0).unwrap(), dec("2432902008176640000"));
        assert!(factorial(27, 0).is_ok());
        assert_eq!(factorial(28, 1), Err(DomainError::Overflow { position: 1 }));
        assert_eq!(factorial(u64::MAX, 1), Err(DomainError::Overflow { position: 1 }));
    }

    #[test]
    fn negative_integers_have_no_factorial() {
        assert!(matches!(factorial_or_gamma(dec("-3"), "!", 0),
                         Err(DomainError::NegativeFactorial { .. })));
        assert_eq!(factorial_or_gamma(-Decimal::ZERO, "!", 0), Ok(Decimal::ONE));
    }

    #[test]
    fn fractional_values_use_gamma() {
        // 3.5! = Γ(4.5)
        let value = factorial_or_gamma(dec("3.5"), "!", 0).unwrap();
        assert_eq!(value.round_dp(6), dec("11.631728"));

        // (-0.5)! = Γ(0.5) = √π
        let value = factorial_or_gamma(dec("-0.5"), "!", 0).unwrap();
        assert_eq!(value.round_dp(6), dec("1.772454"));

        // (-1.5)! = Γ(-0.5) = -2√π
        let value = factorial_or_gamma(dec("-1.5"), "!", 0).unwrap();
        assert_eq!(value.round_dp(6), dec("-3.544908"));
    }

    #[test]
    fn huge_fractional_factorials_overflow() {
        assert_eq!(factorial_or_gamma(dec("30.5"), "!", 2),
                   Err(DomainError::Overflow { position: 2 }));
        assert_eq!(factorial_or_gamma(dec("170.5"), "!", 2),
                   Err(DomainError::Overflow { position: 2 }));
        assert_eq!(factorial_or_gamma(dec("200.5"), "gamma", 2),
                   Err(DomainError::Overflow { position: 2 }));
    }

    #[test]
    fn builtin_arguments_are_counted() {
        assert_eq!(check_arity::<1>("sqrt", &[], 4),
                   Err(DomainError::ArgumentCountMismatch { name:     "sqrt".to_string(),
                                                            expected: "1".to_string(),
                                                            found:    0,
                                                            position: 4, }));
        assert!(check_arity::<2>("atan2", &[Decimal::ONE; 3], 0).is_err());
        assert_eq!(check_arity::<1>("ln", &[Decimal::TEN], 0), Ok([Decimal::TEN]));
    }

    #[test]
    fn gamma_matches_integer_factorials() {
        for n in 1..10_u32 {
            let exact = factorial(u64::from(n - 1), 0).unwrap();
            let approx = euler_gamma(f64::from(n));
            assert!((approx - exact.to_string().parse::<f64>().unwrap()).abs() < 1e-9);
        }
    }
}

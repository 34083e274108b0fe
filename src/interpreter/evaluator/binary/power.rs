use rust_decimal::{Decimal, MathematicalOps, prelude::ToPrimitive};

use crate::{
    error::DomainError,
    interpreter::evaluator::core::{EvalResult, Interpreter},
    util::num::is_integral,
};

impl Interpreter {
    /// Evaluates an exponentiation operation.
    ///
    /// Integral exponents use repeated squaring with checked multiplication.
    /// Fractional exponents go through the decimal `exp(y * ln(x))` routine,
    /// which only exists for non-negative bases.
    ///
    /// `0 ^ 0` is `1`; `0` raised to a negative power is a division by zero.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    /// - `position`: Source position for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Decimal>` containing the unrounded result of
    /// `base ^ exponent`.
    ///
    /// # Errors
    /// - `DivisionByZero` for a zero base with a negative exponent.
    /// - `OutOfDomain` for a negative base with a fractional exponent.
    /// - `Overflow` if the result does not fit.
    ///
    /// # Example
    /// ```
    /// use inline_calc::interpreter::evaluator::core::Interpreter;
    /// use rust_decimal::Decimal;
    ///
    /// let result = Interpreter::eval_pow(Decimal::from(2), Decimal::from(10), 0);
    /// assert_eq!(result.unwrap(), Decimal::from(1024));
    /// ```
    pub fn eval_pow(base: Decimal, exponent: Decimal, position: usize) -> EvalResult<Decimal> {
        if base.is_zero() {
            return match exponent {
                e if e.is_zero() => Ok(Decimal::ONE),
                e if e.is_sign_negative() => Err(DomainError::DivisionByZero { position }),
                _ => Ok(Decimal::ZERO),
            };
        }
        if base == Decimal::ONE {
            return Ok(Decimal::ONE);
        }

        if is_integral(exponent) {
            return exponent.to_i64()
                           .and_then(|n| base.checked_powi(n))
                           .ok_or(DomainError::Overflow { position });
        }

        if base.is_sign_negative() {
            return Err(DomainError::OutOfDomain { function: "^".to_string(),
                                                  value: base,
                                                  position });
        }
        base.checked_powd(exponent).ok_or(DomainError::Overflow { position })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn integral_exponents_are_exact() {
        assert_eq!(Interpreter::eval_pow(dec("-2"), dec("3"), 0), Ok(dec("-8")));
        assert_eq!(Interpreter::eval_pow(dec("2"), dec("-2"), 0), Ok(dec("0.25")));
        assert_eq!(Interpreter::eval_pow(dec("1.5"), dec("2"), 0), Ok(dec("2.25")));
    }

    #[test]
    fn zero_base() {
        assert_eq!(Interpreter::eval_pow(Decimal::ZERO, Decimal::ZERO, 0), Ok(Decimal::ONE));
        assert_eq!(Interpreter::eval_pow(Decimal::ZERO, dec("2.5"), 0), Ok(Decimal::ZERO));
        assert_eq!(Interpreter::eval_pow(Decimal::ZERO, dec("-1"), 4),
                   Err(DomainError::DivisionByZero { position: 4 }));
    }

    #[test]
    fn negative_base_with_fractional_exponent() {
        assert!(matches!(Interpreter::eval_pow(dec("-8"), dec("0.5"), 0),
                         Err(DomainError::OutOfDomain { .. })));
    }

    #[test]
    fn fractional_exponent() {
        let root = Interpreter::eval_pow(dec("2"), dec("0.5"), 0).unwrap();
        assert_eq!(root.round_dp(8), dec("1.41421356"));
    }

    #[test]
    fn huge_power_overflows() {
        assert_eq!(Interpreter::eval_pow(dec("10"), dec("40"), 2),
                   Err(DomainError::Overflow { position: 2 }));
    }
}

use rust_decimal::Decimal;

use crate::{
    ast::BinaryOperator,
    error::DomainError,
    interpreter::evaluator::core::{EvalResult, Interpreter},
};

impl Interpreter {
    /// Evaluates a binary operation between two decimals.
    ///
    /// Addition, subtraction and multiplication use checked arithmetic.
    /// Division and remainder reject a zero divisor; the remainder carries the
    /// sign of the dividend. Power delegates to [`Interpreter::eval_pow`].
    /// The result is rounded to the context precision.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Source position for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Decimal>` containing the rounded result.
    ///
    /// # Example
    /// ```
    /// use inline_calc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{context::Context, evaluator::core::Interpreter},
    /// };
    /// use rust_decimal::Decimal;
    ///
    /// let interpreter = Interpreter::new(Context::default());
    ///
    /// let third = interpreter.eval_binary(BinaryOperator::Div, Decimal::ONE, Decimal::from(3), 0);
    /// assert_eq!(third.unwrap().to_string(), "0.333333333");
    ///
    /// let rem = interpreter.eval_binary(BinaryOperator::Mod, Decimal::from(-7), Decimal::from(3), 0);
    /// assert_eq!(rem.unwrap(), Decimal::from(-1));
    /// ```
    pub fn eval_binary(&self,
                       op: BinaryOperator,
                       left: Decimal,
                       right: Decimal,
                       position: usize)
                       -> EvalResult<Decimal> {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

        let overflow = || DomainError::Overflow { position };

        let value = match op {
            Add => left.checked_add(right).ok_or_else(overflow)?,
            Sub => left.checked_sub(right).ok_or_else(overflow)?,
            Mul => left.checked_mul(right).ok_or_else(overflow)?,
            Div => {
                if right.is_zero() {
                    return Err(DomainError::DivisionByZero { position });
                }
                left.checked_div(right).ok_or_else(overflow)?
            },
            Mod => {
                if right.is_zero() {
                    return Err(DomainError::DivisionByZero { position });
                }
                left.checked_rem(right).ok_or_else(overflow)?
            },
            Pow => Self::eval_pow(left, right, position)?,
        };

        self.context().round(value, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::context::{Context, Rounding};

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn division_by_zero_is_an_error() {
        let interpreter = Interpreter::new(Context::default());
        for op in [BinaryOperator::Div, BinaryOperator::Mod] {
            assert_eq!(interpreter.eval_binary(op, Decimal::ONE, Decimal::ZERO, 7),
                       Err(DomainError::DivisionByZero { position: 7 }));
        }
    }

    #[test]
    fn remainder_keeps_sign_of_dividend() {
        let interpreter = Interpreter::new(Context::default());
        assert_eq!(interpreter.eval_binary(BinaryOperator::Mod, dec("7"), dec("-3"), 0),
                   Ok(dec("1")));
        assert_eq!(interpreter.eval_binary(BinaryOperator::Mod, dec("5.5"), dec("2"), 0),
                   Ok(dec("1.5")));
    }

    #[test]
    fn every_result_is_rounded() {
        let interpreter = Interpreter::new(Context::new(4, Rounding::HalfEven).unwrap());
        assert_eq!(interpreter.eval_binary(BinaryOperator::Add, dec("1.23449"), dec("0"), 0),
                   Ok(dec("1.234")));
        assert_eq!(interpreter.eval_binary(BinaryOperator::Mul, dec("12345"), dec("1"), 0),
                   Ok(dec("12340")));
    }

    #[test]
    fn overflow_is_reported() {
        let interpreter = Interpreter::new(Context::default());
        assert_eq!(interpreter.eval_binary(BinaryOperator::Mul, Decimal::MAX, dec("2"), 3),
                   Err(DomainError::Overflow { position: 3 }));
    }
}

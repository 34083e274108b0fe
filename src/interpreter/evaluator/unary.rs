use rust_decimal::Decimal;

use crate::{
    ast::UnaryOperator,
    interpreter::evaluator::{
        core::{EvalResult, Interpreter},
        utils::factorial_or_gamma,
    },
};

impl Interpreter {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Plus`: identity.
    /// - `Negate`: negation.
    /// - `Factorial`: exact factorial for non-negative integers, `Γ(x + 1)` for
    ///   fractional values. Negative integers are rejected.
    ///
    /// The result is rounded to the context precision.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `position`: Source position for error reporting.
    ///
    /// # Returns
    /// The computed decimal wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use inline_calc::{
    ///     ast::UnaryOperator,
    ///     interpreter::{context::Context, evaluator::core::Interpreter},
    /// };
    /// use rust_decimal::Decimal;
    ///
    /// let interpreter = Interpreter::new(Context::default());
    ///
    /// let v = interpreter.eval_unary(UnaryOperator::Negate, Decimal::from(5), 0).unwrap();
    /// assert_eq!(v, Decimal::from(-5));
    ///
    /// // 4! = 24
    /// let v = interpreter.eval_unary(UnaryOperator::Factorial, Decimal::from(4), 0).unwrap();
    /// assert_eq!(v, Decimal::from(24));
    /// ```
    pub fn eval_unary(&self,
                      op: UnaryOperator,
                      value: Decimal,
                      position: usize)
                      -> EvalResult<Decimal> {
        let result = match op {
            UnaryOperator::Plus => value,
            UnaryOperator::Negate => -value,
            UnaryOperator::Factorial => factorial_or_gamma(value, "!", position)?,
        };
        self.context().round(result, position)
    }
}

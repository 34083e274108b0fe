use rust_decimal::{Decimal, RoundingStrategy};

use crate::{error::{ContextError, DomainError}, interpreter::evaluator::core::EvalResult};

/// Default number of significant digits.
pub const DEFAULT_PRECISION: u32 = 9;
/// Largest supported number of significant digits (the decimal mantissa holds
/// 28 to 29 digits).
pub const MAX_PRECISION: u32 = 28;
/// Default limit on the depth of an expression: nested factors (parentheses,
/// prefix signs, call arguments) and chained binary operators both count.
pub const DEFAULT_MAX_DEPTH: usize = 256;
/// Default limit on input length, in bytes.
pub const DEFAULT_MAX_INPUT_LEN: usize = 1024;

/// Rounding mode applied when a result has more significant digits than the
/// context precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Rounding {
    /// Round to nearest, ties to even (banker's rounding).
    #[default]
    HalfEven,
    /// Round to nearest, ties away from zero.
    HalfUp,
    /// Round to nearest, ties toward zero.
    HalfDown,
    /// Truncate toward zero.
    Down,
    /// Round away from zero.
    Up,
    /// Round toward positive infinity.
    Ceiling,
    /// Round toward negative infinity.
    Floor,
}

impl From<Rounding> for RoundingStrategy {
    fn from(value: Rounding) -> Self {
        match value {
            Rounding::HalfEven => Self::MidpointNearestEven,
            Rounding::HalfUp => Self::MidpointAwayFromZero,
            Rounding::HalfDown => Self::MidpointTowardZero,
            Rounding::Down => Self::ToZero,
            Rounding::Up => Self::AwayFromZero,
            Rounding::Ceiling => Self::ToPositiveInfinity,
            Rounding::Floor => Self::ToNegativeInfinity,
        }
    }
}

/// The decimal context shared by every operation of an evaluation.
///
/// Holds the number of significant digits, the rounding mode, and the guards
/// that bound how much work a single input may cause. A context is a small
/// `Copy` value: hosts build one at startup and hand it to
/// [`crate::solve_with`] or install it globally with [`crate::configure`].
///
/// ## Example
/// ```
/// use inline_calc::interpreter::context::{Context, Rounding};
///
/// let context = Context::new(12, Rounding::HalfUp).unwrap().with_max_depth(32);
/// assert_eq!(context.precision(), 12);
/// assert_eq!(context.max_depth(), 32);
///
/// assert!(Context::new(0, Rounding::HalfEven).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    precision:     u32,
    rounding:      Rounding,
    max_depth:     usize,
    max_input_len: usize,
}

impl Default for Context {
    fn default() -> Self {
        Self { precision:     DEFAULT_PRECISION,
               rounding:      Rounding::default(),
               max_depth:     DEFAULT_MAX_DEPTH,
               max_input_len: DEFAULT_MAX_INPUT_LEN, }
    }
}

impl Context {
    /// Creates a context with the given precision and rounding mode and the
    /// default resource limits.
    ///
    /// # Errors
    /// Returns `ContextError::PrecisionOutOfRange` unless
    /// `1 <= precision <= MAX_PRECISION`.
    pub const fn new(precision: u32, rounding: Rounding) -> Result<Self, ContextError> {
        if precision == 0 || precision > MAX_PRECISION {
            return Err(ContextError::PrecisionOutOfRange { precision,
                                                           max: MAX_PRECISION });
        }
        Ok(Self { precision,
                  rounding,
                  max_depth: DEFAULT_MAX_DEPTH,
                  max_input_len: DEFAULT_MAX_INPUT_LEN })
    }

    /// Sets the maximum expression depth accepted by the parser.
    ///
    /// The depth also bounds the recursion of evaluation, so hosts raising
    /// [`Context::with_max_input_len`] need not raise this limit as well.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the maximum input length in bytes.
    #[must_use]
    pub const fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    #[must_use]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    #[must_use]
    pub const fn rounding(&self) -> Rounding {
        self.rounding
    }

    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[must_use]
    pub const fn max_input_len(&self) -> usize {
        self.max_input_len
    }

    /// Rounds `value` to the context precision.
    ///
    /// Values that already fit are returned unchanged, including their scale.
    ///
    /// # Errors
    /// Returns `DomainError::Overflow` if rounding away from zero leaves the
    /// representable range.
    ///
    /// # Example
    /// ```
    /// use inline_calc::interpreter::context::Context;
    /// use rust_decimal::Decimal;
    ///
    /// let context = Context::default();
    /// let third = Decimal::ONE / Decimal::from(3);
    /// assert_eq!(context.round(third, 0).unwrap().to_string(), "0.333333333");
    /// ```
    pub fn round(&self, value: Decimal, position: usize) -> EvalResult<Decimal> {
        let rounded = value.round_sf_with_strategy(self.precision, self.rounding.into())
                           .ok_or(DomainError::Overflow { position })?;
        // `round_sf` pads short values with trailing zeros.
        Ok(if rounded == value { value } else { rounded })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn half_even_rounds_ties_to_even() {
        let context = Context::default();
        assert_eq!(context.round(dec("15.70796325"), 0).unwrap(), dec("15.7079632"));
        assert_eq!(context.round(dec("15.70796335"), 0).unwrap(), dec("15.7079634"));
    }

    #[test]
    fn rounding_mode_is_honoured() {
        let up = Context::new(2, Rounding::Up).unwrap();
        let floor = Context::new(2, Rounding::Floor).unwrap();
        assert_eq!(up.round(dec("1.21"), 0).unwrap(), dec("1.3"));
        assert_eq!(floor.round(dec("-1.21"), 0).unwrap(), dec("-1.3"));
    }

    #[test]
    fn short_values_keep_their_scale() {
        let context = Context::new(28, Rounding::HalfEven).unwrap();
        assert_eq!(context.round(dec("14"), 0).unwrap().to_string(), "14");
        assert_eq!(context.round(dec("2.50"), 0).unwrap().to_string(), "2.50");
    }

    #[test]
    fn large_integers_lose_low_digits() {
        let context = Context::default();
        assert_eq!(context.round(dec("2432902008176640000"), 0).unwrap(),
                   dec("2432902010000000000"));
    }

    #[test]
    fn precision_bounds_are_checked() {
        assert!(Context::new(MAX_PRECISION, Rounding::HalfEven).is_ok());
        assert_eq!(Context::new(MAX_PRECISION + 1, Rounding::HalfEven),
                   Err(ContextError::PrecisionOutOfRange { precision: MAX_PRECISION + 1,
                                                           max:       MAX_PRECISION, }));
    }
}

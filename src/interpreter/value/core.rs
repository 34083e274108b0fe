use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::util::num::is_integral;

/// The result of solving an expression.
///
/// The interpreter computes in decimals; a result that is mathematically
/// integral is reported as `Integer`, anything else as a normalized `Real`
/// (no trailing zeros in the fraction).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Number {
    /// An integral result.
    Integer(i128),
    /// A fractional result.
    Real(Decimal),
}

impl Number {
    /// Classifies a decimal result.
    ///
    /// ## Example
    /// ```
    /// use inline_calc::interpreter::value::core::Number;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(Number::from_decimal(Decimal::new(400, 2)), Number::Integer(4));
    /// assert_eq!(Number::from_decimal(Decimal::new(250, 2)).to_string(), "2.5");
    /// ```
    #[must_use]
    pub fn from_decimal(value: Decimal) -> Self {
        if is_integral(value) {
            return value.to_i128()
                        .map_or_else(|| Self::Real(value.normalize()), Self::Integer);
        }
        Self::Real(value.normalize())
    }

    /// Returns the value as a decimal.
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        match self {
            Self::Integer(n) => Decimal::from_i128_with_scale(n, 0),
            Self::Real(r) => r,
        }
    }

    /// Returns `true` for integral results.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }
}

impl From<Decimal> for Number {
    fn from(value: Decimal) -> Self {
        Self::from_decimal(value)
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}

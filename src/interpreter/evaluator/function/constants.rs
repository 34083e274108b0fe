#![allow(clippy::unnecessary_wraps)]

use rust_decimal::Decimal;

use crate::interpreter::evaluator::core::EvalResult;

/// π, to the full 28 digits of the decimal type.
pub fn pi(_args: &[Decimal], _position: usize) -> EvalResult<Decimal> {
    Ok(Decimal::PI)
}

/// τ = 2π.
pub fn tau(_args: &[Decimal], _position: usize) -> EvalResult<Decimal> {
    Ok(Decimal::TWO_PI)
}

/// Euler's number.
pub fn e(_args: &[Decimal], _position: usize) -> EvalResult<Decimal> {
    Ok(Decimal::E)
}

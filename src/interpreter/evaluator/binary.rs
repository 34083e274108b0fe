/// Operator dispatch and the checked arithmetic operators.
pub mod core;

/// Decimal exponentiation.
pub mod power;

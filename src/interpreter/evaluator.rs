/// Binary operator evaluation logic.
///
/// Handles the arithmetic operators, including the checks for division by
/// zero and the domain of exponentiation.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements prefix identity and negation and postfix factorial.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the interpreter, which walks a syntax tree under a decimal context
/// and propagates domain errors.
pub mod core;

/// Utility functions for evaluation.
///
/// Factorial, the Gamma function and closed-form range sums shared by the
/// operators and the builtins.
pub mod utils;

/// Function evaluation.
///
/// Resolves calls and constants against the builtin table, checks arity and
/// executes the builtin.
pub mod function;

//! # inline-calc
//!
//! inline-calc is an expression calculator for inline use in text editors and
//! scripts. It lexes, parses and evaluates arithmetic and function-call
//! expressions over fixed-precision decimals, and reports every failure as a
//! typed error instead of a value.
//!
//! ```
//! use inline_calc::{interpreter::value::core::Number, solve};
//!
//! assert_eq!(solve("2+3*4").unwrap(), Number::Integer(14));
//! assert_eq!(solve("5pi").unwrap().to_string(), "15.7079633");
//! assert!(solve("1/0").is_err());
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use once_cell::sync::OnceCell;

use crate::{
    ast::Expr,
    error::{ContextError, EvalError, ParseError},
    interpreter::{
        context::Context,
        evaluator::core::Interpreter,
        lexer::Lexer,
        parser::core::Parser,
        value::core::Number,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// an expression as a tree. The AST is built by the parser and traversed by
/// the evaluator.
///
/// # Responsibilities
/// - Defines one node kind per language construct.
/// - Attaches source positions to nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while solving an
/// expression or configuring the decimal context. Each carries the byte offset
/// at which it occurred.
///
/// # Responsibilities
/// - Defines one error enum per phase and the `EvalError` that wraps them.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Annotates lines of text with their results, the way an editor plugin does.
pub mod inline;
/// Orchestrates lexing, parsing and evaluation.
///
/// This module ties together the decimal context, the lexer, the parser, the
/// evaluator and the result type.
pub mod interpreter;
/// General utilities for numeric conversion.
///
/// # Responsibilities
/// - Convert between decimals, floats and integers without silent data loss.
pub mod util;

/// The process-wide context used by [`solve`], installed by [`configure`].
static GLOBAL_CONTEXT: OnceCell<Context> = OnceCell::new();

/// Installs the context used by [`solve`] for the rest of the process.
///
/// The context can be set once; later calls fail and leave the installed
/// context untouched. Hosts that need several contexts use [`solve_with`].
///
/// # Errors
/// Returns `ContextError::AlreadyConfigured` on every call after the first.
///
/// # Examples
/// ```
/// use inline_calc::{
///     configure,
///     interpreter::context::{Context, Rounding},
/// };
///
/// let context = Context::new(12, Rounding::HalfUp).unwrap();
/// assert!(configure(context).is_ok());
/// assert!(configure(Context::default()).is_err());
/// ```
pub fn configure(context: Context) -> Result<(), ContextError> {
    GLOBAL_CONTEXT.set(context)
                  .map_err(|_| ContextError::AlreadyConfigured)?;
    tracing::debug!(?context, "configured global context");
    Ok(())
}

/// Returns the context used by [`solve`]: the configured one, or the default
/// if [`configure`] was never called.
#[must_use]
pub fn context() -> Context {
    GLOBAL_CONTEXT.get().copied().unwrap_or_default()
}

/// Parses `text` into an expression tree without evaluating it.
///
/// # Errors
/// - `ParseError::InputTooLong` if `text` exceeds the context's input limit.
/// - Any lexing or parse error.
///
/// # Examples
/// ```
/// use inline_calc::{interpreter::context::Context, parse};
///
/// let expr = parse("-3!", &Context::default()).unwrap();
/// assert_eq!(expr.to_string(), "(-(3!))");
/// ```
pub fn parse(text: &str, context: &Context) -> Result<Expr, EvalError> {
    if text.len() > context.max_input_len() {
        return Err(ParseError::InputTooLong { length: text.len(),
                                              limit:  context.max_input_len(), }.into());
    }

    let expr = Parser::new(Lexer::new(text), context.max_depth())?.parse()?;
    tracing::trace!(%expr, "parsed");
    Ok(expr)
}

/// Evaluates `text` under an explicit context.
///
/// Every operation is rounded to the context precision, and the final result
/// once more. An integral result is returned as `Number::Integer`.
///
/// # Errors
/// Returns the first lexing, parse or domain error encountered.
///
/// # Examples
/// ```
/// use inline_calc::{
///     interpreter::context::{Context, Rounding},
///     solve_with,
/// };
///
/// let precise = Context::new(28, Rounding::HalfEven).unwrap();
/// let result = solve_with("1/3", &precise).unwrap();
/// assert_eq!(result.to_string(), "0.3333333333333333333333333333");
/// ```
pub fn solve_with(text: &str, context: &Context) -> Result<Number, EvalError> {
    let result = parse(text, context).and_then(|expr| {
                                          let interpreter = Interpreter::new(*context);
                                          let value = interpreter.evaluate(&expr)?;
                                          let value = context.round(value, expr.position())?;
                                          Ok(Number::from_decimal(value))
                                      });

    match &result {
        Ok(number) => tracing::debug!(input = text, %number, "solved"),
        Err(error) => tracing::debug!(input = text, %error, "failed to solve"),
    }
    result
}

/// Evaluates `text` under the global context.
///
/// # Errors
/// Returns the first lexing, parse or domain error encountered. Nothing is
/// ever coerced to zero.
///
/// # Examples
/// ```
/// use inline_calc::{interpreter::value::core::Number, solve};
///
/// assert_eq!(solve("sum(1, 5)").unwrap(), Number::Integer(15));
/// assert!(solve("foo(1)").is_err());
/// ```
pub fn solve(text: &str) -> Result<Number, EvalError> {
    solve_with(text, &context())
}

/// Lexing errors.
///
/// Raised while turning raw text into tokens: characters the language does not
/// know and numeric literals that cannot be represented as a decimal.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree:
/// unexpected tokens, missing parentheses, leftover input and the resource
/// guards on input size and nesting depth.
pub mod parse_error;
/// Domain errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero, values outside a function's domain, unknown functions and
/// argument count mismatches.
pub mod domain_error;
/// Configuration errors for the decimal context.
pub mod context_error;

pub use context_error::ContextError;
pub use domain_error::DomainError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any failure produced while solving an expression.
///
/// Each phase reports its own error type; this enum lets `?` carry them up to
/// the caller of [`crate::solve`] unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The input contained an illegal character or an unrepresentable number.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token stream did not match the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed on a mathematical or lookup error.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

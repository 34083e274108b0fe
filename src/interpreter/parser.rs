/// The parser state and the entry points for parsing.
///
/// Holds the lexer, the single lookahead token and the nesting guard, and
/// exposes [`core::Parser::parse`], which requires the whole input to be
/// consumed.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two left-associative tiers: `+`/`-` and `*`/`/`/`^`/`%`.
pub mod binary;

/// Factor parsing.
///
/// Numbers, parentheses, prefix signs, identifiers and calls, postfix
/// factorials and implicit multiplication.
pub mod unary;

/// Shared helpers for the parser.
pub mod utils;

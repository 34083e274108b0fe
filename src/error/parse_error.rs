/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Error at position {position}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error at position {position}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at position {position}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// Byte offset of the opening parenthesis.
        position: usize,
    },
    /// Found extra tokens after the expression was complete.
    #[error("Error at position {position}: Extra tokens after expression. Check your input: {token}")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// Parentheses, prefix operators or calls nested deeper than allowed.
    #[error("Error at position {position}: Expression nests deeper than {limit} levels.")]
    NestingTooDeep {
        /// The configured nesting limit.
        limit:    usize,
        /// Byte offset where the limit was exceeded.
        position: usize,
    },
    /// The input is longer than the configured maximum.
    #[error("Input of {length} bytes exceeds the limit of {limit} bytes.")]
    InputTooLong {
        /// Length of the rejected input in bytes.
        length: usize,
        /// The configured maximum length.
        limit:  usize,
    },
}

/// Represents all errors that can occur during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character that does not start any token.
    #[error("Error at position {position}: Illegal character '{character}'.")]
    IllegalCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position:  usize,
    },
    /// A numeric literal that does not fit the decimal representation.
    #[error("Error at position {position}: Invalid number literal '{literal}'.")]
    InvalidNumber {
        /// The literal as written.
        literal:  String,
        /// Byte offset of the literal in the input.
        position: usize,
    },
}

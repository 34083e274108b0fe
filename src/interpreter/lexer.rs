use std::str::FromStr;

use logos::Logos;
use rust_decimal::Decimal;

use crate::error::LexError;

/// Why logos refused a slice of input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// No token starts with this character.
    #[default]
    IllegalCharacter,
    /// A number literal that does not fit a decimal.
    InvalidNumber,
}

/// The kind of a lexical token.
///
/// Numbers carry their decimal value; every other kind is identified by the
/// token's literal text alone.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(error = LexErrorKind)]
pub enum TokenKind {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5`, `5.` or `2e10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][0-9]+)?", parse_number)]
    Number(Decimal),
    /// Function or constant names such as `sin` or `π`, and the radical `√`.
    #[regex(r"\p{L}[\p{L}0-9]*")]
    #[token("√")]
    Identifier,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `!`
    #[token("!")]
    Bang,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Whitespace between tokens.
    #[regex(r"\s+", logos::skip)]
    Ignored,
    /// Returned once the input is exhausted.
    EndOfInput,
}

/// A token together with the text it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    /// What was recognized.
    pub kind:     TokenKind,
    /// The exact slice of input; empty for end-of-input.
    pub literal:  &'src str,
    /// Byte offset of the literal in the input.
    pub position: usize,
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "end of input"),
            _ => write!(f, "'{}'", self.literal),
        }
    }
}

/// A pull-based tokenizer over a single line of input.
///
/// Whitespace is skipped. Once the input is exhausted every further call to
/// [`Lexer::next_token`] returns an end-of-input token.
///
/// ## Example
/// ```
/// use inline_calc::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("5 pi!");
///
/// assert!(matches!(lexer.next_token().unwrap().kind, TokenKind::Number(_)));
/// assert_eq!(lexer.next_token().unwrap().literal, "pi");
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Bang);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfInput);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfInput);
/// ```
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
}

impl<'src> Lexer<'src> {
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: TokenKind::lexer(source) }
    }

    /// Returns the next token.
    ///
    /// # Errors
    /// - `LexError::IllegalCharacter` for a character that starts no token.
    /// - `LexError::InvalidNumber` for a number literal too large for a
    ///   decimal.
    pub fn next_token(&mut self) -> Result<Token<'src>, LexError> {
        let Some(result) = self.inner.next() else {
            let end = self.inner.source().len();
            return Ok(Token { kind:     TokenKind::EndOfInput,
                              literal:  "",
                              position: end, });
        };

        let literal = self.inner.slice();
        let position = self.inner.span().start;

        match result {
            Ok(kind) => {
                tracing::trace!(?kind, literal, position, "token");
                Ok(Token { kind,
                           literal,
                           position })
            },
            Err(LexErrorKind::IllegalCharacter) => {
                Err(LexError::IllegalCharacter { character: literal.chars()
                                                                   .next()
                                                                   .unwrap_or_default(),
                                                 position })
            },
            Err(LexErrorKind::InvalidNumber) => {
                Err(LexError::InvalidNumber { literal: literal.to_string(),
                                              position })
            },
        }
    }
}

/// Converts a number slice to a decimal.
///
/// A bare leading or trailing `.` is padded with `0` first, and exponent
/// notation goes through `Decimal::from_scientific`.
///
/// # Returns
/// - `Ok(Decimal)`: The exact value of the literal.
/// - `Err(LexErrorKind::InvalidNumber)`: If the value does not fit.
fn parse_number(lex: &logos::Lexer<TokenKind>) -> Result<Decimal, LexErrorKind> {
    let slice = lex.slice();
    let (mantissa, exponent) = match slice.find(['e', 'E']) {
        Some(index) => (&slice[..index], Some(&slice[index + 1..])),
        None => (slice, None),
    };

    let mut text = String::with_capacity(slice.len() + 2);
    if mantissa.starts_with('.') {
        text.push('0');
    }
    text.push_str(mantissa);
    if mantissa.ends_with('.') {
        text.push('0');
    }

    let parsed = match exponent {
        Some(exponent) => Decimal::from_scientific(&format!("{text}e{exponent}")),
        None => Decimal::from_str(&text),
    };
    parsed.map_err(|_| LexErrorKind::InvalidNumber)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(source);
        let mut kinds = Vec::new();
        loop {
            let token = lexer.next_token().unwrap();
            if token.kind == TokenKind::EndOfInput {
                return kinds;
            }
            kinds.push(token.kind);
        }
    }

    fn number(source: &str) -> Decimal {
        match Lexer::new(source).next_token().unwrap().kind {
            TokenKind::Number(value) => value,
            other => panic!("expected a number, found {other:?}"),
        }
    }

    #[test]
    fn numbers_in_all_forms() {
        assert_eq!(number("42"), Decimal::from(42));
        assert_eq!(number("3.25"), Decimal::new(325, 2));
        assert_eq!(number(".5"), Decimal::new(5, 1));
        assert_eq!(number("5."), Decimal::from(5));
        assert_eq!(number("2e3"), Decimal::from(2000));
        assert_eq!(number("1.5E2"), Decimal::from(150));
    }

    #[test]
    fn exponent_marker_needs_a_digit() {
        assert_eq!(kinds("2e"), vec![TokenKind::Number(Decimal::from(2)), TokenKind::Identifier]);
    }

    #[test]
    fn no_sign_after_exponent_marker() {
        assert_eq!(kinds("1e-5"),
                   vec![TokenKind::Number(Decimal::ONE),
                        TokenKind::Identifier,
                        TokenKind::Minus,
                        TokenKind::Number(Decimal::from(5))]);
    }

    #[test]
    fn operators_and_punctuation() {
        assert_eq!(kinds("+-*/^!%(),"),
                   vec![TokenKind::Plus,
                        TokenKind::Minus,
                        TokenKind::Star,
                        TokenKind::Slash,
                        TokenKind::Caret,
                        TokenKind::Bang,
                        TokenKind::Percent,
                        TokenKind::LParen,
                        TokenKind::RParen,
                        TokenKind::Comma]);
    }

    #[test]
    fn identifiers_include_greek_letters_and_radical() {
        let mut lexer = Lexer::new("π τ Γ log10 √");
        for expected in ["π", "τ", "Γ", "log10", "√"] {
            let token = lexer.next_token().unwrap();
            assert_eq!(token.kind, TokenKind::Identifier);
            assert_eq!(token.literal, expected);
        }
    }

    #[test]
    fn radical_is_a_single_character_token() {
        let mut lexer = Lexer::new("√x");
        assert_eq!(lexer.next_token().unwrap().literal, "√");
        assert_eq!(lexer.next_token().unwrap().literal, "x");
    }

    #[test]
    fn illegal_character_reports_position() {
        let mut lexer = Lexer::new("1 + $");
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();
        assert_eq!(lexer.next_token(),
                   Err(LexError::IllegalCharacter { character: '$',
                                                    position:  4, }));
    }

    #[test]
    fn oversized_number_is_invalid() {
        assert!(matches!(Lexer::new("1e40").next_token(), Err(LexError::InvalidNumber { .. })));
    }
}

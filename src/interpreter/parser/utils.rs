use crate::{
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a comma-separated list of items up to a closing `)`.
    ///
    /// Used for function argument lists. The opening `(` must already have
    /// been consumed. It repeatedly calls `parse_item` to parse one element,
    /// expecting either:
    ///
    /// - a comma, to continue the list, or
    /// - `)`, to end it.
    ///
    /// An immediately encountered `)` produces an empty list.
    ///
    /// Grammar (simplified): `list := (item ("," item)*)? ")"`
    ///
    /// # Parameters
    /// - `parse_item`: Function used to parse each list element.
    ///
    /// # Returns
    /// A vector of parsed items.
    ///
    /// # Errors
    /// Returns a `ParseError` if:
    /// - an item fails to parse,
    /// - an unexpected token is encountered,
    /// - the input ends before the closing `)`.
    pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
        &mut self,
        parse_item: impl Fn(&mut Self) -> ParseResult<T>)
        -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        if self.current().kind == TokenKind::RParen {
            self.advance()?;
            return Ok(items);
        }
        loop {
            items.push(parse_item(self)?);
            match self.current().kind {
                TokenKind::Comma => {
                    self.advance()?;
                },
                TokenKind::RParen => {
                    self.advance()?;
                    break;
                },
                TokenKind::EndOfInput => {
                    return Err(ParseError::UnexpectedEndOfInput { position: self.current()
                                                                                .position }.into());
                },
                _ => {
                    let token = self.current();
                    return Err(ParseError::UnexpectedToken { token:    format!("expected ',' or ')', found {token}"),
                                                             position: token.position, }.into());
                },
            }
        }
        Ok(items)
    }
}

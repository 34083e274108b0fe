use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    ///
    /// Every operator deepens the left-leaning tree by one level, so each link
    /// of the chain counts against the depth limit until the chain ends.
    ///
    /// # Returns
    /// An `Expr::BinaryOp` tree representing the parsed expression.
    pub(in crate::interpreter::parser) fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_multiplicative()?;
        let mut links = 0;
        while let Some(op) = token_to_binary_operator(&self.current().kind)
              && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            self.enter()?;
            links += 1;
            let position = self.advance()?.position;
            let right = self.parse_multiplicative()?;
            left = Expr::BinaryOp { op,
                                    left: Box::new(left),
                                    right: Box::new(right),
                                    position };
        }
        self.release(links);
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles the left-associative operators `*`, `/`, `^` and `%`, which all
    /// share this tier, so `2^3^2` parses as `(2^3)^2`.
    ///
    /// The rule is: `multiplicative := factor (("*" | "/" | "^" | "%") factor)*`
    ///
    /// # Returns
    /// A binary expression tree combining factor-level nodes.
    pub(in crate::interpreter::parser) fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_factor()?;
        let mut links = 0;
        while let Some(op) = token_to_binary_operator(&self.current().kind)
              && matches!(op,
                          BinaryOperator::Mul
                          | BinaryOperator::Div
                          | BinaryOperator::Pow
                          | BinaryOperator::Mod)
        {
            self.enter()?;
            links += 1;
            let position = self.advance()?.position;
            let right = self.parse_factor()?;
            left = Expr::BinaryOp { op,
                                    left: Box::new(left),
                                    right: Box::new(right),
                                    position };
        }
        self.release(links);
        Ok(left)
    }
}

/// Converts a token into its corresponding `BinaryOperator`, if applicable.
///
/// # Parameters
/// - `kind`: The token kind to inspect.
///
/// # Returns
/// `Some(BinaryOperator)` if the token is a binary operator, otherwise `None`.
pub(in crate::interpreter::parser) const fn token_to_binary_operator(kind: &TokenKind)
                                                                     -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Caret => Some(BinaryOperator::Pow),
        TokenKind::Percent => Some(BinaryOperator::Mod),
        _ => None,
    }
}

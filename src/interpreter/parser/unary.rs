use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a factor: the operand of the binary operators.
    ///
    /// Every factor counts as one level of nesting, so deeply parenthesized
    /// input, long runs of prefix signs and nested calls are all bounded by
    /// the parser's depth limit.
    ///
    /// Grammar:
    /// ```text
    ///     factor := ("+" | "-") factor
    ///             | "(" ")" factor
    ///             | primary "!"* IDENT?
    /// ```
    ///
    /// # Errors
    /// - `NestingTooDeep` when the depth limit is exceeded.
    /// - Any error from [`Parser::parse_primary`].
    pub(in crate::interpreter::parser) fn parse_factor(&mut self) -> ParseResult<Expr> {
        self.enter()?;
        let factor = self.parse_factor_inner();
        self.leave();
        factor
    }

    fn parse_factor_inner(&mut self) -> ParseResult<Expr> {
        let op = match self.current().kind {
            TokenKind::Plus => Some(UnaryOperator::Plus),
            TokenKind::Minus => Some(UnaryOperator::Negate),
            _ => None,
        };
        if let Some(op) = op {
            let position = self.advance()?.position;
            let operand = self.parse_factor()?;
            return Ok(Expr::UnaryOp { op,
                                      operand: Box::new(operand),
                                      position });
        }

        if self.current().kind == TokenKind::LParen {
            let open = self.advance()?;
            if self.current().kind == TokenKind::RParen {
                self.advance()?;
                return self.parse_factor();
            }
            let inner = self.parse_expression()?;
            if self.current().kind != TokenKind::RParen {
                return Err(ParseError::ExpectedClosingParen { position: open.position }.into());
            }
            self.advance()?;
            return self.parse_postfix(inner);
        }

        let primary = self.parse_primary()?;
        self.parse_postfix(primary)
    }

    /// Parses a primary expression: a number literal, a bare identifier, or a
    /// call with a parenthesized argument list.
    ///
    /// A bare identifier becomes a call without arguments, which is how named
    /// constants such as `pi` are represented.
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` if the input ends here.
    /// - `UnexpectedToken` for any token that cannot start a factor.
    fn parse_primary(&mut self) -> ParseResult<Expr> {
        match self.current().kind {
            TokenKind::Number(value) => {
                let position = self.advance()?.position;
                Ok(Expr::Number { value, position })
            },
            TokenKind::Identifier => {
                let token = self.advance()?;
                let arguments = if self.current().kind == TokenKind::LParen {
                    self.advance()?;
                    self.parse_comma_separated(Self::parse_expression)?
                } else {
                    Vec::new()
                };
                Ok(Expr::FunctionCall { name: token.literal.to_string(),
                                        arguments,
                                        position: token.position })
            },
            TokenKind::EndOfInput => {
                Err(ParseError::UnexpectedEndOfInput { position: self.current().position }.into())
            },
            _ => Err(ParseError::UnexpectedToken { token:    self.current().to_string(),
                                                   position: self.current().position, }.into()),
        }
    }

    /// Applies postfix operators to an already parsed expression.
    ///
    /// Each `!` wraps the expression in its own factorial node, so `3!!` is
    /// `(3!)!`. After the factorials, a single bare identifier multiplies the
    /// result implicitly: `5pi` is `5 * pi` and `3!e` is `(3!) * e`.
    ///
    /// # Parameters
    /// - `expr`: The expression to which postfix operators are applied.
    ///
    /// # Returns
    /// The expression with postfix operations applied.
    fn parse_postfix(&mut self, mut expr: Expr) -> ParseResult<Expr> {
        while self.current().kind == TokenKind::Bang {
            let position = self.advance()?.position;
            expr = Expr::UnaryOp { op: UnaryOperator::Factorial,
                                   operand: Box::new(expr),
                                   position };
        }

        if self.current().kind == TokenKind::Identifier {
            let token = self.advance()?;
            let constant = Expr::FunctionCall { name:      token.literal.to_string(),
                                                arguments: Vec::new(),
                                                position:  token.position, };
            expr = Expr::BinaryOp { op:       BinaryOperator::Mul,
                                    left:     Box::new(expr),
                                    right:    Box::new(constant),
                                    position: token.position, };
        }

        Ok(expr)
    }
}

use crate::{
    ast::Expr,
    error::{EvalError, ParseError},
    interpreter::lexer::{Lexer, Token, TokenKind},
};

/// Parsing can fail in the lexer as well as in the grammar, so both surface
/// through [`EvalError`].
pub type ParseResult<T> = Result<T, EvalError>;

/// A recursive-descent parser with one token of lookahead.
///
/// Tokens are pulled from the lexer on demand; the parser never holds more
/// than the current token. Nested factors (parentheses, prefix signs, call
/// arguments) and each link of a binary operator chain add one level to the
/// depth of the tree; the depth is limited to `max_depth`.
///
/// ## Example
/// ```
/// use inline_calc::interpreter::{lexer::Lexer, parser::core::Parser};
///
/// let expr = Parser::new(Lexer::new("2^3^2"), 64).unwrap().parse().unwrap();
/// assert_eq!(expr.to_string(), "((2 ^ 3) ^ 2)");
/// ```
pub struct Parser<'src> {
    lexer:     Lexer<'src>,
    current:   Token<'src>,
    depth:     usize,
    max_depth: usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser and reads the first token.
    ///
    /// # Errors
    /// Returns a lexing error if the first token is illegal.
    pub fn new(mut lexer: Lexer<'src>, max_depth: usize) -> ParseResult<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer,
                  current,
                  depth: 0,
                  max_depth })
    }

    /// Parses a complete expression.
    ///
    /// Grammar: `input := expression END`
    ///
    /// # Errors
    /// - Any lexing or grammar error from the expression itself.
    /// - `UnexpectedTrailingTokens` if input remains after the expression.
    pub fn parse(mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;
        match self.current.kind {
            TokenKind::EndOfInput => Ok(expr),
            _ => Err(ParseError::UnexpectedTrailingTokens { token:    self.current.to_string(),
                                                            position: self.current.position, }.into()),
        }
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing; it begins at the
    /// lowest-precedence level.
    ///
    /// Grammar: `expression := additive`
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_additive()
    }

    /// The lookahead token.
    pub(in crate::interpreter::parser) const fn current(&self) -> &Token<'src> {
        &self.current
    }

    /// Consumes the lookahead token, pulls the next one from the lexer and
    /// returns the consumed token.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> ParseResult<Token<'src>> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Records one more level of nesting.
    ///
    /// # Errors
    /// Returns `NestingTooDeep` once the depth exceeds the configured limit.
    pub(in crate::interpreter::parser) fn enter(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ParseError::NestingTooDeep { limit:    self.max_depth,
                                                    position: self.current.position, }.into());
        }
        Ok(())
    }

    pub(in crate::interpreter::parser) const fn leave(&mut self) {
        self.release(1);
    }

    /// Gives back `levels` levels recorded by [`Parser::enter`].
    pub(in crate::interpreter::parser) const fn release(&mut self, levels: usize) {
        self.depth -= levels;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> ParseResult<Expr> {
        Parser::new(Lexer::new(source), 16)?.parse()
    }

    fn render(source: &str) -> String {
        parse(source).unwrap().to_string()
    }

    #[test]
    fn precedence_and_associativity() {
        assert_eq!(render("2+3*4"), "(2 + (3 * 4))");
        assert_eq!(render("(2+3)*4"), "((2 + 3) * 4)");
        assert_eq!(render("2^3^2"), "((2 ^ 3) ^ 2)");
        assert_eq!(render("8/4*2%3"), "(((8 / 4) * 2) % 3)");
        assert_eq!(render("1-2-3"), "((1 - 2) - 3)");
    }

    #[test]
    fn prefix_and_postfix_operators() {
        assert_eq!(render("-3!"), "(-(3!))");
        assert_eq!(render("--2"), "(-(-2))");
        assert_eq!(render("+2"), "(+2)");
        assert_eq!(render("5!!"), "((5!)!)");
    }

    #[test]
    fn implicit_multiplication_follows_factorials() {
        assert_eq!(render("5pi"), "(5 * pi)");
        assert_eq!(render("3!e"), "((3!) * e)");
        assert_eq!(render("(1+1)tau"), "((1 + 1) * tau)");
    }

    #[test]
    fn calls_and_constants() {
        assert_eq!(render("max(1, 2+3, min(4, 5))"), "max(1, (2 + 3), min(4, 5))");
        assert_eq!(render("pi"), "pi");
        assert_eq!(render("f()"), "f");
        assert_eq!(render("√(16)"), "√(16)");
    }

    #[test]
    fn empty_parentheses_reenter_factor() {
        assert_eq!(render("()5"), "5");
        assert_eq!(render("2*()()3"), "(2 * 3)");
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        assert!(matches!(parse("2 3"),
                         Err(EvalError::Parse(ParseError::UnexpectedTrailingTokens { position: 2,
                                                                                     .. }))));
        assert!(matches!(parse("1)"),
                         Err(EvalError::Parse(ParseError::UnexpectedTrailingTokens { .. }))));
        assert!(matches!(parse("2pi(3)"),
                         Err(EvalError::Parse(ParseError::UnexpectedTrailingTokens { .. }))));
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert!(matches!(parse(""),
                         Err(EvalError::Parse(ParseError::UnexpectedEndOfInput { position: 0 }))));
        assert!(matches!(parse("1 +"),
                         Err(EvalError::Parse(ParseError::UnexpectedEndOfInput { .. }))));
        assert!(matches!(parse("(1 + 2"),
                         Err(EvalError::Parse(ParseError::ExpectedClosingParen { position: 0 }))));
        assert!(matches!(parse("max(1,)"),
                         Err(EvalError::Parse(ParseError::UnexpectedToken { .. }))));
        assert!(matches!(parse("max(1 2)"),
                         Err(EvalError::Parse(ParseError::UnexpectedToken { .. }))));
        assert!(matches!(parse("*2"), Err(EvalError::Parse(ParseError::UnexpectedToken { .. }))));
        assert!(matches!(parse("2 # 3"), Err(EvalError::Lex(_))));
    }

    #[test]
    fn nesting_is_limited() {
        assert!(parse(&format!("{}1{}", "(".repeat(15), ")".repeat(15))).is_ok());
        assert!(matches!(parse(&format!("{}1{}", "(".repeat(17), ")".repeat(17))),
                         Err(EvalError::Parse(ParseError::NestingTooDeep { limit: 16, .. }))));
        assert!(matches!(parse(&format!("{}1", "-".repeat(40))),
                         Err(EvalError::Parse(ParseError::NestingTooDeep { .. }))));
    }

    #[test]
    fn operator_chains_count_towards_depth() {
        assert!(parse(&format!("{}1", "1+".repeat(15))).is_ok());
        assert!(parse(&format!("{}1", "2*".repeat(15))).is_ok());
        assert!(matches!(parse(&format!("{}1", "1+".repeat(17))),
                         Err(EvalError::Parse(ParseError::NestingTooDeep { limit: 16, .. }))));
        assert!(matches!(parse(&format!("{}1", "2^".repeat(17))),
                         Err(EvalError::Parse(ParseError::NestingTooDeep { limit: 16, .. }))));
    }

    #[test]
    fn depth_is_released_after_each_chain() {
        let chains = ["(1+1+1+1+1+1+1+1)"; 8].join("*");
        assert!(parse(&chains).is_ok());
    }
}

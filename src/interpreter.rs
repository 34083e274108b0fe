/// The context module holds the decimal settings shared by an evaluation.
///
/// A context fixes the number of significant digits, the rounding mode, and the
/// limits on input length and nesting depth. It is passed explicitly to the
/// parser and the evaluator.
pub mod context;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, applies operators and builtin functions
/// under the decimal context, and produces a single decimal.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Resolves function and constant names against the builtin table.
/// - Reports domain errors such as division by zero or arguments outside a
///   function's domain.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw text and produces tokens on demand, each
/// corresponding to a number, an identifier, an operator or a delimiter. This
/// is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their byte offset.
/// - Converts numeric literals to exact decimals.
/// - Reports lexical errors for illegal characters and unrepresentable
///   numbers.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer and constructs an AST that
/// represents the structure of the expression.
///
/// # Responsibilities
/// - Converts tokens into AST nodes, honouring precedence and associativity.
/// - Validates the grammar, reporting errors with their position.
/// - Rejects leftover input and nesting beyond the configured depth.
pub mod parser;
/// The value module defines the result type handed back to callers.
pub mod value;

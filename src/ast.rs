use rust_decimal::Decimal;

/// An abstract syntax tree (AST) node representing an expression.
///
/// The tree is built once by the parser and never mutated afterwards; the
/// interpreter only borrows it, so evaluating the same tree twice yields the
/// same result. Every node records the byte offset of the token that introduced
/// it, which evaluation errors report back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A numeric literal, already converted to a decimal.
    Number {
        /// The literal value.
        value:    Decimal,
        /// Byte offset in the source text.
        position: usize,
    },
    /// A prefix (`+`, `-`) or postfix (`!`) operation.
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        operand:  Box<Self>,
        /// Byte offset in the source text.
        position: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// The operator.
        op:       BinaryOperator,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset in the source text.
        position: usize,
    },
    /// A call such as `max(1, 2)`, or a named constant such as `pi` when
    /// `arguments` is empty.
    FunctionCall {
        /// Name of the function or constant.
        name:      String,
        /// Arguments in source order.
        arguments: Vec<Self>,
        /// Byte offset in the source text.
        position:  usize,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use inline_calc::ast::Expr;
    ///
    /// let expr = Expr::FunctionCall { name:      "pi".to_string(),
    ///                                 arguments: Vec::new(),
    ///                                 position:  5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::FunctionCall { position, .. } => *position,
        }
    }
}

/// Represents a binary operator.
///
/// `*`, `/`, `^` and `%` share one precedence tier; `+` and `-` share the
/// lower one. All of them are left-associative.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`), also produced by implicit multiplication (`5pi`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Remainder (`%`)
    Mod,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Prefix identity (`+x`).
    Plus,
    /// Prefix negation (`-x`).
    Negate,
    /// Postfix factorial (`x!`); chained factorials nest.
    Factorial,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Mod => "%",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Factorial => "!",
        };
        write!(f, "{operator}")
    }
}

/// Renders the tree fully parenthesized, e.g. `((2 ^ 3) ^ 2)`.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::UnaryOp { op: UnaryOperator::Factorial,
                            operand,
                            .. } => write!(f, "({operand}!)"),
            Self::UnaryOp { op, operand, .. } => write!(f, "({op}{operand})"),
            Self::BinaryOp { op, left, right, .. } => write!(f, "({left} {op} {right})"),
            Self::FunctionCall { name, arguments, .. } if arguments.is_empty() => {
                write!(f, "{name}")
            },
            Self::FunctionCall { name, arguments, .. } => {
                write!(f, "{name}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
        }
    }
}

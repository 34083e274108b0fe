use rust_decimal::Decimal;

use crate::{ast::Expr, error::DomainError, interpreter::context::Context};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `DomainError` describing the failure.
pub type EvalResult<T> = Result<T, DomainError>;

/// Evaluates syntax trees under a fixed decimal context.
///
/// The interpreter holds no state besides its context: evaluation only borrows
/// the tree, so the same tree may be evaluated any number of times and always
/// yields the same result.
///
/// ## Usage
///
/// Build one per context and reuse it. Every operator result and every call
/// with arguments is rounded to the context precision as it is produced;
/// literals and named constants enter the computation exactly.
///
/// ## Example
/// ```
/// use inline_calc::{
///     interpreter::{context::Context, evaluator::core::Interpreter},
///     parse,
/// };
///
/// let context = Context::default();
/// let expr = parse("2 + 3 * 4", &context).unwrap();
///
/// let value = Interpreter::new(context).evaluate(&expr).unwrap();
/// assert_eq!(value.to_string(), "14");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Interpreter {
    context: Context,
}

impl Interpreter {
    #[must_use]
    pub const fn new(context: Context) -> Self {
        Self { context }
    }

    /// The decimal context this interpreter rounds with.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Evaluates an expression and returns the resulting decimal.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the node kind; operands and call arguments are evaluated
    /// eagerly, left to right, before the operator or function is applied.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression, rounded per operation. The caller applies
    /// the final rounding.
    ///
    /// # Errors
    /// Any `DomainError` raised by an operator or builtin. Errors are never
    /// coerced into a value.
    pub fn evaluate(&self, expr: &Expr) -> EvalResult<Decimal> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::UnaryOp { op,
                            operand,
                            position, } => {
                let value = self.evaluate(operand)?;
                self.eval_unary(*op, value, *position)
            },
            Expr::BinaryOp { op,
                             left,
                             right,
                             position, } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                self.eval_binary(*op, left, right, *position)
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 position, } => {
                let values = arguments.iter()
                                      .map(|argument| self.evaluate(argument))
                                      .collect::<EvalResult<Vec<_>>>()?;
                self.eval_function(name, &values, *position)
            },
        }
    }
}

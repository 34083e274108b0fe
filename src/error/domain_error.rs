use rust_decimal::Decimal;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Attempted division (or remainder) by zero.
    #[error("Error at position {position}: Division by zero.")]
    DivisionByZero {
        /// Byte offset of the operation.
        position: usize,
    },
    /// Factorial of a negative integer.
    #[error("Error at position {position}: Factorial not defined for negative integer {value}.")]
    NegativeFactorial {
        /// The rejected operand.
        value:    Decimal,
        /// Byte offset of the operation.
        position: usize,
    },
    /// Square root of a negative number.
    #[error("Error at position {position}: Square root of negative number {value}.")]
    NegativeSquareRoot {
        /// The rejected operand.
        value:    Decimal,
        /// Byte offset of the call.
        position: usize,
    },
    /// Logarithm of zero or a negative number.
    #[error("Error at position {position}: Logarithm of non-positive number {value}.")]
    NonPositiveLogarithm {
        /// The rejected operand.
        value:    Decimal,
        /// Byte offset of the call.
        position: usize,
    },
    /// Logarithm base that is not positive or equals one.
    #[error("Error at position {position}: Invalid logarithm base {base}.")]
    InvalidLogBase {
        /// The rejected base.
        base:     Decimal,
        /// Byte offset of the call.
        position: usize,
    },
    /// An argument outside the domain of a function or operator.
    #[error("Error at position {position}: {value} is outside the domain of '{function}'.")]
    OutOfDomain {
        /// The function or operator name.
        function: String,
        /// The rejected argument.
        value:    Decimal,
        /// Byte offset of the call.
        position: usize,
    },
    /// A fractional value where an integer was required.
    #[error("Error at position {position}: '{function}' requires an integer, but found {value}.")]
    NotIntegral {
        /// The function name.
        function: String,
        /// The rejected argument.
        value:    Decimal,
        /// Byte offset of the call.
        position: usize,
    },
    /// A result that is undefined (e.g. a pole) or not a finite number.
    #[error("Error at position {position}: '{function}' is undefined for the given arguments.")]
    Undefined {
        /// The function name.
        function: String,
        /// Byte offset of the call.
        position: usize,
    },
    /// Called an unknown function or constant.
    #[error("Error at position {position}: Unknown function '{name}'.")]
    UnknownFunction {
        /// The name as written.
        name:     String,
        /// Byte offset of the call.
        position: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error at position {position}: '{name}' expects {expected} argument(s), but found {found}.")]
    ArgumentCountMismatch {
        /// The function name.
        name:     String,
        /// Human readable list of accepted arities.
        expected: String,
        /// Number of arguments supplied.
        found:    usize,
        /// Byte offset of the call.
        position: usize,
    },
    /// `sum(l, r)` with `l > r`.
    #[error("Error at position {position}: Range start {low} is greater than range end {high}.")]
    InvertedRange {
        /// Start of the range.
        low:      Decimal,
        /// End of the range.
        high:     Decimal,
        /// Byte offset of the call.
        position: usize,
    },
    /// A result too large for the decimal representation.
    #[error("Error at position {position}: Overflow while trying to compute result.")]
    Overflow {
        /// Byte offset of the operation.
        position: usize,
    },
}

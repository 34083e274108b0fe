/// Errors raised while building or installing a decimal context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    /// Precision must be at least one digit and at most `max`.
    #[error("Precision {precision} is out of range, expected 1 to {max} significant digits.")]
    PrecisionOutOfRange {
        /// The requested precision.
        precision: u32,
        /// The largest supported precision.
        max:       u32,
    },
    /// The global context was already installed.
    #[error("The decimal context has already been configured.")]
    AlreadyConfigured,
}

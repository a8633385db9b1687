use thiserror::Error;

/// Message for [`EvaluationError::DivideByZero`].
pub const DIVISION_BY_ZERO: &str = "division by zero";
/// Message for [`EvaluationError::ModuloByZero`].
pub const MODULO_BY_ZERO: &str = "modulo by zero";
/// Message for [`EvaluationError::ZeroToNegativePower`].
pub const ZERO_TO_NEGATIVE_POWER: &str = "zero to negative power";
/// Message for [`EvaluationError::NegativeSquareRoot`].
pub const NEGATIVE_SQUARE_ROOT: &str = "negative value passed to square root";
/// Message for [`EvaluationError::NonPositiveLogarithm`].
pub const NON_POSITIVE_LOGARITHM: &str = "zero or negative value passed to logarithm";

/// Represents the numeric domain violations detected while evaluating a tree.
///
/// Every variant is fatal to the evaluation that raised it. The displayed
/// message wraps the variant's short description in a uniform envelope:
/// `Evaluation error encountered in the mathematical expression: <message>!`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvaluationError {
    /// The right operand of `/` evaluated to zero.
    #[error("Evaluation error encountered in the mathematical expression: {}!", DIVISION_BY_ZERO)]
    DivideByZero,
    /// The right operand of `%` evaluated to zero.
    #[error("Evaluation error encountered in the mathematical expression: {}!", MODULO_BY_ZERO)]
    ModuloByZero,
    /// `0 ^ x` with a negative exponent.
    #[error("Evaluation error encountered in the mathematical expression: {}!",
            ZERO_TO_NEGATIVE_POWER)]
    ZeroToNegativePower,
    /// `sqrt` of a negative value.
    #[error("Evaluation error encountered in the mathematical expression: {}!",
            NEGATIVE_SQUARE_ROOT)]
    NegativeSquareRoot,
    /// `log`, `log2` or `log10` of a value that is zero or negative.
    #[error("Evaluation error encountered in the mathematical expression: {}!",
            NON_POSITIVE_LOGARITHM)]
    NonPositiveLogarithm,
}

impl EvaluationError {
    /// Returns the short description without the envelope.
    ///
    /// # Example
    /// ```
    /// use exprtree::error::EvaluationError;
    ///
    /// assert_eq!(EvaluationError::DivideByZero.message(), "division by zero");
    /// ```
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::DivideByZero => DIVISION_BY_ZERO,
            Self::ModuloByZero => MODULO_BY_ZERO,
            Self::ZeroToNegativePower => ZERO_TO_NEGATIVE_POWER,
            Self::NegativeSquareRoot => NEGATIVE_SQUARE_ROOT,
            Self::NonPositiveLogarithm => NON_POSITIVE_LOGARITHM,
        }
    }
}

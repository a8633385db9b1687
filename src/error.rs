use thiserror::Error;

/// Tokenizing and tree-building errors.
///
/// Defines the single, generic syntax error raised for any lexical or
/// structural malformation found before evaluation.
pub mod syntax_error;
/// Evaluation errors.
///
/// Contains the numeric domain violations that can be raised while walking a
/// tree: division or modulo by zero, zero to a negative power, negative square
/// roots and non-positive logarithms.
pub mod evaluation_error;

pub use evaluation_error::EvaluationError;
pub use syntax_error::SyntaxError;

/// Any error produced by [`crate::calculate`].
///
/// Both kinds abort the whole operation; the message of the wrapped error is
/// displayed unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The expression could not be parsed.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The expression parsed but could not be evaluated.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

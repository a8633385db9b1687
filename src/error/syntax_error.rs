use thiserror::Error;

/// Raised when an expression cannot be tokenized or assembled into a tree.
///
/// There is a single, generic kind: unknown tokens, operators or closing
/// parentheses in leading position, unmatched parentheses, functions not
/// followed by `(`, missing operands and adjacent operands all produce the same
/// error. The message carries no position information.
///
/// # Example
/// ```
/// use exprtree::{error::SyntaxError, parse};
///
/// assert_eq!(parse("2a - 3").unwrap_err(), SyntaxError);
/// assert_eq!(SyntaxError.to_string(),
///            "Syntax error encountered in the mathematical expression!");
/// ```
#[derive(Error, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[error("Syntax error encountered in the mathematical expression!")]
pub struct SyntaxError;

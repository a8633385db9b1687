//! # exprtree
//!
//! exprtree parses whitespace-delimited mathematical expressions into
//! expression trees, evaluates them and renders them back to canonical text.
//!
//! ```
//! let tree = exprtree::parse("10 + 20 - 2 ^ 2 ^ 3").unwrap();
//! assert_eq!(exprtree::render(&tree), "10.0 + 20.0 - 2.0 ^ 2.0 ^ 3.0");
//! assert_eq!(exprtree::evaluate(&tree), Ok(-226.0));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::fmt;

use crate::{
    ast::ExpressionTree,
    error::{Error, EvaluationError, SyntaxError},
    interpreter::{evaluator, parser::TreeBuilder, printer},
    util::num::format_real,
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Node` enum and the `ExpressionTree` wrapper that
/// represent an expression as a binary tree. Trees are built by the parser and
/// traversed by the evaluator and the printer.
///
/// # Responsibilities
/// - Defines one node variant per kind of token, with owned children.
/// - Keeps parenthesis nodes so that rendering reproduces the input.
/// - Exposes read-only access to the root, the child slots and the height.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// Parsing fails with a single generic syntax error. Evaluation fails with one
/// of a small set of numeric domain errors, each with a fixed message.
///
/// # Responsibilities
/// - Defines `SyntaxError` and `EvaluationError` and their messages.
/// - Combines both into `Error` for callers that run the whole pipeline.
pub mod error;
/// Orchestrates tokenizing, tree building, evaluation and printing.
///
/// This module ties together the phases of the pipeline. The free functions at
/// the crate root are thin wrappers around it.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and printer.
/// - Exposes each phase for callers that need finer control.
pub mod interpreter;
/// General utilities.
///
/// This module holds helpers shared by more than one phase, such as the
/// canonical formatting of real numbers.
pub mod util;

/// Parses an expression into a tree using the default depth limit.
///
/// # Errors
/// Returns [`SyntaxError`] if the text is not a well-formed expression.
///
/// # Examples
/// ```
/// assert!(exprtree::parse("10 * ( 10 + 20 - 5.5 ) - 50").is_ok());
/// assert!(exprtree::parse("10 + * 20").is_err());
/// assert!(exprtree::parse("").is_err());
/// ```
pub fn parse(source: &str) -> Result<ExpressionTree, SyntaxError> {
    TreeBuilder::new().parse(source)
}

/// Parses an expression, rejecting input nested deeper than `max_depth`.
///
/// # Errors
/// Returns [`SyntaxError`] if the text is malformed or nests too deeply.
///
/// # Examples
/// ```
/// assert!(exprtree::parse_with_max_depth("( 1 ) + 2 + 3", 1).is_ok());
/// assert!(exprtree::parse_with_max_depth("( ( 1 ) )", 1).is_err());
/// ```
pub fn parse_with_max_depth(source: &str, max_depth: usize) -> Result<ExpressionTree, SyntaxError> {
    TreeBuilder::with_max_depth(max_depth).parse(source)
}

/// Evaluates a tree.
///
/// # Errors
/// Returns an [`EvaluationError`] on a numeric domain violation.
///
/// # Examples
/// ```
/// use exprtree::error::EvaluationError;
///
/// let tree = exprtree::parse("10 + 20 % ( 30 - 30 )").unwrap();
/// assert_eq!(exprtree::evaluate(&tree), Err(EvaluationError::ModuloByZero));
/// ```
pub fn evaluate(tree: &ExpressionTree) -> Result<f64, EvaluationError> {
    evaluator::core::evaluate(tree)
}

/// Renders a tree as canonical text.
///
/// # Examples
/// ```
/// let tree = exprtree::parse("log ( e )").unwrap();
/// assert_eq!(exprtree::render(&tree), "log ( e )");
/// ```
#[must_use]
pub fn render(tree: &ExpressionTree) -> String {
    printer::render(tree)
}

/// Parses, renders and evaluates an expression in one go.
///
/// # Errors
/// Returns [`Error::Syntax`] or [`Error::Evaluation`], whichever phase fails
/// first.
///
/// # Examples
/// ```
/// let calculation = exprtree::calculate("10 + round ( 1.7 - 1 )").unwrap();
/// assert_eq!(calculation.expression, "10.0 + round ( 1.7 - 1.0 )");
/// assert_eq!(calculation.value, 11.0);
///
/// assert!(exprtree::calculate("2 + sine ( PI )").is_err());
/// ```
pub fn calculate(source: &str) -> Result<Calculation, Error> {
    calculate_with(&TreeBuilder::new(), source)
}

/// Like [`calculate`], with a configured builder.
///
/// # Errors
/// See [`calculate`].
pub fn calculate_with(builder: &TreeBuilder, source: &str) -> Result<Calculation, Error> {
    let tree = builder.parse(source)?;
    let expression = render(&tree);
    let value = evaluate(&tree)?;
    Ok(Calculation { expression, value })
}

/// The outcome of [`calculate`]: the rendered expression and its value.
///
/// Displays as a two-line report:
///
/// ```text
/// Expression:  5.0 ^ 2.0
/// Result:      25.0
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    /// Canonical text of the parsed expression.
    pub expression: String,
    /// Value of the expression.
    pub value:      f64,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Expression:  {}", self.expression)?;
        write!(f, "Result:      {}", format_real(self.value))
    }
}

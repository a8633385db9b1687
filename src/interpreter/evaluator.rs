/// Core evaluation logic.
///
/// Contains the recursive walk over the tree and the result type shared by
/// the evaluator modules.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the arithmetic operators together with their operand order and
/// zero checks.
pub mod binary;

/// Function evaluation.
///
/// Applies the built-in unary functions, rejecting arguments outside the
/// domains of `sqrt` and the logarithms.
pub mod function;

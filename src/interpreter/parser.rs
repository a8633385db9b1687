/// Core tree-building entry points.
///
/// Defines [`core::TreeBuilder`], its depth limit and the result type shared
/// by the parser modules.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence-climbing loop that combines operands with
/// binary operators, honoring precedence and associativity.
pub mod binary;

/// Operand parsing.
///
/// Handles literals, constants, parenthesized groups and function
/// applications.
pub mod primary;

pub use self::core::{DEFAULT_MAX_DEPTH, ParseResult, TreeBuilder};

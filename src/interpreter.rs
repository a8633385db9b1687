/// The token module defines the lexical vocabulary of expressions.
///
/// It declares the closed set of tokens (number literals, named constants,
/// parentheses, binary operators and unary functions) together with their
/// categories, precedence ranks, associativity and canonical spelling.
pub mod token;
/// The lexer module turns raw text into tokens.
///
/// Input is split on whitespace and every piece must be exactly one token.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Splits the input on runs of whitespace.
/// - Classifies each piece, rejecting unknown or glued pieces.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// The parser applies precedence climbing to the token sequence and produces
/// an [`crate::ast::ExpressionTree`], keeping parenthesis nodes so the tree can
/// be rendered back to its input form.
///
/// # Responsibilities
/// - Resolves precedence and associativity of binary operators.
/// - Validates parentheses and function applications.
/// - Bounds the nesting depth of groups and right-hand operands.
pub mod parser;
/// The evaluator module computes the value of a tree.
///
/// It walks the tree recursively, applies operators and functions, and reports
/// numeric domain violations such as division by zero.
pub mod evaluator;
/// The printer module renders trees back to text.
pub mod printer;

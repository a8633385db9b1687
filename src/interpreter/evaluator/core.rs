use tracing::debug;

use crate::{
    ast::{ExpressionTree, Node},
    error::EvaluationError,
    interpreter::evaluator::{binary::eval_binary_chain, function::eval_function},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluationError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// Evaluates a whole tree.
///
/// # Errors
/// Returns the first [`EvaluationError`] raised while walking the tree.
///
/// # Example
/// ```
/// use exprtree::interpreter::evaluator::core::evaluate;
///
/// let tree = exprtree::parse("10 * ( 10 + 20 - 5.5 ) - 50").unwrap();
/// assert_eq!(evaluate(&tree), Ok(195.0));
/// ```
pub fn evaluate(tree: &ExpressionTree) -> EvalResult<f64> {
    let result = evaluate_node(tree.root());
    debug!(height = tree.height(), ?result, "evaluated expression tree");
    result
}

/// Evaluates the subtree rooted at `node`.
///
/// Operands yield their value. Parenthesis nodes pass through the value of
/// the child they hold, functions apply to their evaluated argument, and
/// binary nodes combine both sides.
///
/// # Parameters
/// - `node`: Root of the subtree to evaluate.
///
/// # Returns
/// The numeric value of the subtree. Non-finite results such as `NaN` are
/// values, not errors.
///
/// # Errors
/// Returns an [`EvaluationError`] on a numeric domain violation anywhere in
/// the subtree.
pub fn evaluate_node(node: &Node) -> EvalResult<f64> {
    match node {
        Node::Number(value) => Ok(*value),
        Node::Constant(constant) => Ok(constant.value()),
        Node::LeftParen { close } => evaluate_node(close),
        Node::RightParen { inner } => evaluate_node(inner),
        Node::Function { function, argument } => eval_function(*function, evaluate_node(argument)?),
        Node::Binary { .. } => eval_binary_chain(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::token::{BinaryOperator, Constant, Function};

    #[test]
    fn parenthesis_nodes_are_transparent() {
        let node = Node::parenthesized(Node::parenthesized(Node::Constant(Constant::NegativeE)));
        assert_eq!(evaluate_node(&node), Ok(-2.718_281));
    }

    #[test]
    fn hand_built_tree() {
        let group = Node::parenthesized(Node::Number(-4.0));
        let node = Node::Binary { op:    BinaryOperator::Mul,
                                  left:  Box::new(Node::Number(3.0)),
                                  right: Box::new(Node::Function { function: Function::Abs,
                                                                   argument: Box::new(group) }) };
        assert_eq!(evaluate_node(&node), Ok(12.0));
    }
}

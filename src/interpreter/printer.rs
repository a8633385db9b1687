use std::fmt;

use crate::ast::{ExpressionTree, Node};

/// Renders a tree back to its canonical text.
///
/// Tokens are written in their canonical form and separated by single spaces.
/// Parentheses appear exactly where the input had them, so the text parses
/// back to an identical tree.
///
/// # Example
/// ```
/// use exprtree::interpreter::printer::render;
///
/// let tree = exprtree::parse("10   + round ( 1.7 - 1 )").unwrap();
/// assert_eq!(render(&tree), "10.0 + round ( 1.7 - 1.0 )");
/// ```
#[must_use]
pub fn render(tree: &ExpressionTree) -> String {
    render_node(tree.root())
}

/// Renders the subtree rooted at `node`.
#[must_use]
pub fn render_node(node: &Node) -> String {
    node.to_string()
}

/// Writes the node in-order: left slot, own token, right slot.
///
/// A function writes its name before its argument, and a closing parenthesis
/// writes its contents before itself. The left side of a chain of binary nodes
/// is walked in a loop, so long chains do not recurse.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(_) | Self::Constant(_) => fmt::Display::fmt(&self.token(), f),
            Self::Function { function, argument } => write!(f, "{function} {argument}"),
            Self::LeftParen { close } => write!(f, "( {close}"),
            Self::RightParen { inner } => write!(f, "{inner} )"),
            Self::Binary { .. } => {
                let mut pending = Vec::new();
                let mut current = self;
                while let Self::Binary { op, left, right } = current {
                    pending.push((op, right));
                    current = left.as_ref();
                }

                fmt::Display::fmt(current, f)?;
                for (op, right) in pending.into_iter().rev() {
                    write!(f, " {op} {right}")?;
                }
                Ok(())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::token::{BinaryOperator, Constant, Function};

    #[test]
    fn hand_built_nodes() {
        let group = Node::parenthesized(Node::Number(0.5));
        let node = Node::Binary { op:    BinaryOperator::Div,
                                  left:  Box::new(Node::Constant(Constant::NegativePi)),
                                  right: Box::new(Node::Function { function: Function::Ceil,
                                                                   argument: Box::new(group) }) };
        assert_eq!(render_node(&node), "-PI / ceil ( 0.5 )");
    }

    #[test]
    fn mixed_chain_keeps_operand_order() {
        let tree = crate::parse("1 - 2 * 3 / 4 + 5 ^ 6 ^ 7 % 8").unwrap();
        assert_eq!(render_node(tree.root()), "1.0 - 2.0 * 3.0 / 4.0 + 5.0 ^ 6.0 ^ 7.0 % 8.0");
    }

    #[test]
    fn nested_groups() {
        let node = Node::parenthesized(Node::parenthesized(Node::Number(-1.0)));
        assert_eq!(render_node(&node), "( ( -1.0 ) )");
    }
}

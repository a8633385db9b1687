use std::{fmt, mem};

use crate::{
    error::EvaluationError,
    interpreter::{
        evaluator::core::evaluate_node,
        token::{BinaryOperator, Constant, Function, Token},
    },
};

/// A node of an expression tree.
///
/// Every node holds exactly one [`Token`] (see [`Node::token`]) and up to two
/// children, exposed through the [`Node::left`] and [`Node::right`] slots. The
/// variant fixes which slots are used:
///
/// | variant      | token          | left      | right        |
/// |--------------|----------------|-----------|--------------|
/// | `Number`     | number literal | -         | -            |
/// | `Constant`   | named constant | -         | -            |
/// | `Function`   | function       | argument  | -            |
/// | `LeftParen`  | `(`            | -         | `RightParen` |
/// | `RightParen` | `)`            | contents  | -            |
/// | `Binary`     | operator       | left side | right side   |
///
/// Parenthesis nodes are kept rather than collapsed so that rendering
/// reproduces the parentheses of the input. Children are owned, so a tree
/// cannot share nodes or contain cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A number literal.
    Number(f64),
    /// A named constant.
    Constant(Constant),
    /// A function applied to a parenthesized argument.
    Function {
        /// The applied function.
        function: Function,
        /// The argument, always a [`Node::LeftParen`] as built by the parser.
        argument: Box<Self>,
    },
    /// An opening parenthesis wrapping its matching [`Node::RightParen`].
    LeftParen {
        /// The matching closing parenthesis node.
        close: Box<Self>,
    },
    /// A closing parenthesis wrapping the root of the enclosed expression.
    RightParen {
        /// The enclosed expression.
        inner: Box<Self>,
    },
    /// A binary operation.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Node {
    /// Wraps `inner` in a matched pair of parenthesis nodes.
    ///
    /// ## Example
    /// ```
    /// use exprtree::ast::Node;
    ///
    /// let group = Node::parenthesized(Node::Number(1.0));
    /// assert_eq!(group.to_string(), "( 1.0 )");
    /// ```
    #[must_use]
    pub fn parenthesized(inner: Self) -> Self {
        Self::LeftParen { close: Box::new(Self::RightParen { inner: Box::new(inner) }) }
    }

    /// Returns the token held by this node.
    #[must_use]
    pub const fn token(&self) -> Token {
        match self {
            Self::Number(value) => Token::Number(*value),
            Self::Constant(constant) => Token::Constant(*constant),
            Self::Function { function, .. } => Token::Function(*function),
            Self::LeftParen { .. } => Token::LeftParen,
            Self::RightParen { .. } => Token::RightParen,
            Self::Binary { op, .. } => Token::Operator(*op),
        }
    }

    /// Returns the child in the left slot, if the node uses it.
    #[must_use]
    pub fn left(&self) -> Option<&Self> {
        match self {
            Self::Function { argument: child, .. }
            | Self::RightParen { inner: child }
            | Self::Binary { left: child, .. } => Some(child.as_ref()),
            Self::Number(_) | Self::Constant(_) | Self::LeftParen { .. } => None,
        }
    }

    /// Returns the child in the right slot, if the node uses it.
    #[must_use]
    pub fn right(&self) -> Option<&Self> {
        match self {
            Self::LeftParen { close: child } | Self::Binary { right: child, .. } => {
                Some(child.as_ref())
            },
            Self::Number(_)
            | Self::Constant(_)
            | Self::Function { .. }
            | Self::RightParen { .. } => None,
        }
    }

    /// Returns `true` for operand nodes, which have no children.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Constant(_))
    }
}

/// Drops the subtree without recursing, so arbitrarily long chains of binary
/// nodes can be released.
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.detach_children(&mut stack);
        while let Some(mut node) = stack.pop() {
            node.detach_children(&mut stack);
        }
    }
}

impl Node {
    /// Moves every non-leaf child onto `stack`, leaving a leaf in its place.
    fn detach_children(&mut self, stack: &mut Vec<Box<Self>>) {
        let mut detach = |child: &mut Box<Self>| {
            if !child.is_leaf() {
                stack.push(mem::replace(child, Box::new(Self::Number(0.0))));
            }
        };

        match self {
            Self::Function { argument: child, .. }
            | Self::LeftParen { close: child }
            | Self::RightParen { inner: child } => detach(child),
            Self::Binary { left, right, .. } => {
                detach(left);
                detach(right);
            },
            Self::Number(_) | Self::Constant(_) => {},
        }
    }
}

/// A parsed expression, read-only after construction.
///
/// Trees are produced by [`crate::parse`] or
/// [`crate::interpreter::parser::core::TreeBuilder`]. The builder's depth limit
/// bounds how deeply groups, function arguments and right-hand operands nest.
/// Chains down the left side of binary nodes are unbounded; evaluation,
/// rendering and dropping walk them in a loop.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionTree {
    root:   Node,
    height: usize,
}

impl ExpressionTree {
    pub(crate) const fn new(root: Node, height: usize) -> Self {
        Self { root, height }
    }

    /// Returns the root node.
    #[must_use]
    pub const fn root(&self) -> &Node {
        &self.root
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// ## Example
    /// ```
    /// let tree = exprtree::parse("1 + 2").unwrap();
    /// assert_eq!(tree.height(), 2);
    /// ```
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Evaluates the tree. Equivalent to [`crate::evaluate`].
    ///
    /// # Errors
    /// Returns an [`EvaluationError`] on a numeric domain violation.
    pub fn evaluate(&self) -> Result<f64, EvaluationError> {
        evaluate_node(&self.root)
    }
}

impl fmt::Display for ExpressionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

use tracing::debug;

use crate::{
    ast::{ExpressionTree, Node},
    error::SyntaxError,
    interpreter::{lexer::tokenize, token::Token},
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Default limit for the builder's nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Builds expression trees from token sequences by precedence climbing.
///
/// The builder is stateless apart from its configuration and may be shared
/// freely. `max_depth` bounds how deeply the builder recurses: every group,
/// function argument and right-hand operand opens one level. Chains of
/// left-associative operators do not nest, however long they are. Input
/// exceeding the limit is rejected with the same [`SyntaxError`] as any other
/// malformed expression.
///
/// ## Example
/// ```
/// use exprtree::interpreter::parser::core::TreeBuilder;
///
/// let builder = TreeBuilder::with_max_depth(2);
/// assert!(builder.parse("1 + 2 + 3 + 4 + 5").is_ok());
/// assert!(builder.parse("( ( 1 ) )").is_ok());
/// assert!(builder.parse("( ( ( 1 ) ) )").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeBuilder {
    /// Maximum nesting depth.
    pub max_depth: usize,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    /// Creates a builder with [`DEFAULT_MAX_DEPTH`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Creates a builder with a custom depth limit.
    #[must_use]
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Tokenizes `source` and builds its tree.
    ///
    /// # Errors
    /// Returns [`SyntaxError`] if tokenizing or building fails.
    pub fn parse(&self, source: &str) -> ParseResult<ExpressionTree> {
        let tokens = tokenize(source)?;
        self.build(&tokens)
    }

    /// Builds the expression tree for a whole token sequence.
    ///
    /// This is the entry point of precedence climbing: the sequence is parsed
    /// at minimum precedence `0`, which consumes every token or fails.
    ///
    /// # Errors
    /// Returns [`SyntaxError`] when the sequence is empty, starts with a binary
    /// operator or `)`, has unmatched parentheses, contains a function not
    /// followed by `(`, has two adjacent operands, misses an operand, or
    /// exceeds the depth limit.
    ///
    /// ## Example
    /// ```
    /// use exprtree::interpreter::{lexer::tokenize, parser::core::TreeBuilder};
    ///
    /// let tokens = tokenize("10 + 20 * 30").unwrap();
    /// let tree = TreeBuilder::new().build(&tokens).unwrap();
    /// assert_eq!(tree.evaluate(), Ok(610.0));
    /// ```
    pub fn build(&self, tokens: &[Token]) -> ParseResult<ExpressionTree> {
        let mut stream = tokens.iter().peekable();
        let subtree = self.build_expression(&mut stream, 0, 0)?;

        if stream.next().is_some() {
            return Err(SyntaxError);
        }

        debug!(tokens = tokens.len(), height = subtree.height, "built expression tree");
        Ok(ExpressionTree::new(subtree.node, subtree.height))
    }

    /// Fails once the recursion has gone deeper than the configured limit.
    pub(in crate::interpreter::parser) const fn enter(&self, depth: usize) -> ParseResult<()> {
        if depth > self.max_depth {
            return Err(SyntaxError);
        }
        Ok(())
    }

    /// Makes the node built by `shape` the parent of `child`.
    pub(in crate::interpreter::parser) fn wrap(child: Subtree,
                                               shape: impl FnOnce(Box<Node>) -> Node)
                                               -> Subtree {
        Subtree { node:   shape(Box::new(child.node)),
                  height: child.height + 1, }
    }
}

/// A node under construction together with its height.
#[derive(Debug)]
pub(in crate::interpreter::parser) struct Subtree {
    pub node:   Node,
    pub height: usize,
}

impl Subtree {
    pub(in crate::interpreter::parser) const fn leaf(node: Node) -> Self {
        Self { node, height: 1 }
    }
}

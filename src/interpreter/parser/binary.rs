use std::iter::Peekable;

use crate::{
    ast::Node,
    error::SyntaxError,
    interpreter::{
        parser::core::{ParseResult, Subtree, TreeBuilder},
        token::Token,
    },
};

impl TreeBuilder {
    /// Parses an operand followed by any run of binary operators binding at
    /// least as tightly as `min_precedence`.
    ///
    /// This is the precedence-climbing loop. After the first operand, every
    /// remaining token at this level must be a binary operator or a `)`; the
    /// loop stops at a `)` or at the first operator whose precedence is below
    /// `min_precedence`, and leaves that token for the caller.
    ///
    /// The right-hand side of `^` is parsed at the operator's own precedence so
    /// that it associates to the right; every other operator raises the floor
    /// by one and associates to the left. Left-associative chains are built in
    /// this loop without recursing, so only the right-hand sides count toward
    /// the depth limit.
    ///
    /// # Parameters
    /// - `tokens`: Token stream, positioned at the start of an operand.
    /// - `min_precedence`: Weakest operator this call may consume.
    /// - `depth`: Current recursion depth, checked against the builder's limit.
    ///
    /// # Returns
    /// The subtree for the longest expression starting at the current token.
    pub(in crate::interpreter::parser) fn build_expression<'a, I>(&self,
                                                                   tokens: &mut Peekable<I>,
                                                                   min_precedence: u8,
                                                                   depth: usize)
                                                                   -> ParseResult<Subtree>
        where I: Iterator<Item = &'a Token>
    {
        self.enter(depth)?;
        let mut left = self.build_primary(tokens, depth)?;

        while let Some(token) = tokens.peek() {
            let op = match token {
                Token::Operator(op) => *op,
                Token::RightParen => break,
                _ => return Err(SyntaxError),
            };

            let precedence = op.precedence();
            if precedence < min_precedence {
                break;
            }
            tokens.next();

            let next_min = if op.is_right_associative() { precedence } else { precedence + 1 };
            let right = self.build_expression(tokens, next_min, depth + 1)?;

            let height = left.height.max(right.height) + 1;
            left = Subtree { node: Node::Binary { op,
                                                  left: Box::new(left.node),
                                                  right: Box::new(right.node) },
                             height };
        }

        Ok(left)
    }
}

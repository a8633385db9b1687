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
    /// Parses a single operand: a literal, a constant, a parenthesized group or
    /// a function application.
    ///
    /// A function must be followed directly by `(`; its argument is the whole
    /// group, parenthesis nodes included.
    ///
    /// # Errors
    /// Returns [`SyntaxError`] at the end of input, on a binary operator or
    /// `)`, or when a function is not followed by a group.
    pub(in crate::interpreter::parser) fn build_primary<'a, I>(&self,
                                                                tokens: &mut Peekable<I>,
                                                                depth: usize)
                                                                -> ParseResult<Subtree>
        where I: Iterator<Item = &'a Token>
    {
        match tokens.next() {
            Some(Token::Number(value)) => Ok(Subtree::leaf(Node::Number(*value))),
            Some(Token::Constant(constant)) => Ok(Subtree::leaf(Node::Constant(*constant))),
            Some(Token::LeftParen) => self.build_group(tokens, depth),
            Some(Token::Function(function)) => {
                let function = *function;
                if tokens.next() != Some(&Token::LeftParen) {
                    return Err(SyntaxError);
                }
                let group = self.build_group(tokens, depth)?;
                Ok(Self::wrap(group, |argument| Node::Function { function, argument }))
            },
            Some(Token::Operator(_) | Token::RightParen) | None => Err(SyntaxError),
        }
    }

    /// Parses the rest of a group whose `(` has just been consumed.
    ///
    /// The contents are parsed as a separate expression at minimum precedence
    /// `0`, which must stop exactly at the matching `)`.
    fn build_group<'a, I>(&self, tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Subtree>
        where I: Iterator<Item = &'a Token>
    {
        let contents = self.build_expression(tokens, 0, depth + 1)?;
        if tokens.next() != Some(&Token::RightParen) {
            return Err(SyntaxError);
        }

        let close = Self::wrap(contents, |inner| Node::RightParen { inner });
        Ok(Self::wrap(close, |close| Node::LeftParen { close }))
    }
}

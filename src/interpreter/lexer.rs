use logos::Logos;
use tracing::trace;

use crate::{
    error::SyntaxError,
    interpreter::{parser::core::ParseResult, token::Token},
};

/// Splits an expression on whitespace and classifies every piece.
///
/// Pieces keep their input order. The whole call fails on the first piece
/// that is not exactly one token; tokens are never split out of a piece, so
/// `(10` or `2a` are errors even though `(`, `10` and `2` are valid on their
/// own.
///
/// # Errors
/// Returns [`SyntaxError`] if any piece is not a recognised token.
///
/// # Example
/// ```
/// use exprtree::interpreter::{
///     lexer::tokenize,
///     token::{BinaryOperator, Token},
/// };
///
/// let tokens = tokenize("10 +\t20").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(10.0),
///                 Token::Operator(BinaryOperator::Add),
///                 Token::Number(20.0)]);
///
/// assert!(tokenize("2a - 3").is_err());
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    let tokens = source.split_whitespace()
                       .map(classify)
                       .collect::<ParseResult<Vec<_>>>()?;

    trace!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}

/// Classifies a single whitespace-free piece of input.
///
/// The piece is accepted only if the lexer produces exactly one token for it,
/// which then necessarily spans the whole piece.
///
/// # Errors
/// Returns [`SyntaxError`] if the piece is empty, unrecognised, or made of
/// more than one token.
pub fn classify(piece: &str) -> ParseResult<Token> {
    let mut lexer = Token::lexer(piece);

    match (lexer.next(), lexer.next()) {
        (Some(Ok(token)), None) => Ok(token),
        _ => {
            trace!(piece, "unrecognised token");
            Err(SyntaxError)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::token::{BinaryOperator, Constant, Function};

    #[test]
    fn number_forms() {
        assert_eq!(classify("10"), Ok(Token::Number(10.0)));
        assert_eq!(classify("-5"), Ok(Token::Number(-5.0)));
        assert_eq!(classify("+2.5"), Ok(Token::Number(2.5)));
        assert_eq!(classify(".5"), Ok(Token::Number(0.5)));
        assert_eq!(classify("5."), Ok(Token::Number(5.0)));
        assert_eq!(classify("2.1e-10"), Ok(Token::Number(2.1e-10)));
        assert_eq!(classify("1E3"), Ok(Token::Number(1000.0)));
    }

    #[test]
    fn longest_match_wins() {
        assert_eq!(classify("log10"), Ok(Token::Function(Function::Log10)));
        assert_eq!(classify("log2"), Ok(Token::Function(Function::Log2)));
        assert_eq!(classify("log"), Ok(Token::Function(Function::Log)));
        assert_eq!(classify("-PI"), Ok(Token::Constant(Constant::NegativePi)));
        assert_eq!(classify("-e"), Ok(Token::Constant(Constant::NegativeE)));
        assert_eq!(classify("-"), Ok(Token::Operator(BinaryOperator::Sub)));
    }

    #[test]
    fn rejects_malformed_pieces() {
        for piece in ["2a", "sine", "pi", "E", "(10", "10)", "--5", "1e", "1.2.3", "x", "**",
                      "1e400"]
        {
            assert_eq!(classify(piece), Err(SyntaxError), "piece {piece:?}");
        }
    }

    #[test]
    fn splits_on_any_whitespace_run() {
        let tokens = tokenize("  (\n1\r\n+   e )  ").unwrap();
        assert_eq!(tokens,
                   vec![Token::LeftParen,
                        Token::Number(1.0),
                        Token::Operator(BinaryOperator::Add),
                        Token::Constant(Constant::E),
                        Token::RightParen]);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert_eq!(tokenize("   "), Ok(Vec::new()));
    }
}

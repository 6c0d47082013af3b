//! Tokenizer for invoice expressions.
//!
//! The lexer turns raw text into a flat sequence of [`Token`]s: operators
//! (`+`, `-`) and number texts (digit runs or Roman-letter runs). It never
//! looks at the structure of the expression; grammar checks live in the
//! evaluator.

mod lexer;
mod token;

pub use lexer::{tokenize, tokenize_with_limits};
pub use token::{NumberText, NumeralKind, Operator, Span, Token, TokenKind};

use crate::{String, Vec};

/// Render a token sequence in canonical form: token texts separated by a
/// single space, Roman runs uppercased.
pub fn normalize(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::text)
        .collect::<Vec<_>>()
        .join(" ")
}

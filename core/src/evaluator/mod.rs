//! Grammar checking and evaluation of invoice expressions.
//!
//! The evaluator consumes the token sequence produced by the lexer and
//! enforces the grammar `number ((+|-) number)*`, folding the numbers
//! left to right into a single integer.
//!
//! ## Design Principles
//!
//! - **Closed grammar**: Only the two operators the lexer emits exist; there
//!   is no dispatch on operator text and no way to reach dynamic code.
//! - **Never panic**: Malformed sequences and overflow are reported as
//!   [`InvoiceFormatError`]s.
//!
//! ## Example
//!
//! ```
//! use invoice_calc_core::{evaluator, lexer};
//!
//! let tokens = lexer::tokenize("X + V + 3").unwrap();
//! assert_eq!(evaluator::evaluate(&tokens), Ok(18));
//! ```

mod eval;
mod operators;


use crate::errors::InvoiceFormatError;
use crate::lexer::Token;

/// Check the grammar of `tokens` and compute the total.
pub fn evaluate(tokens: &[Token]) -> Result<i64, InvoiceFormatError> {
    eval::Evaluator::new(tokens).eval()
}

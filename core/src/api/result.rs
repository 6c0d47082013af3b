use core::fmt;

use crate::String;

/// The outcome of evaluating an invoice expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceResult {
    /// The expression exactly as submitted.
    pub original: String,
    /// Tokens separated by single spaces, Roman numerals uppercased.
    pub normalized: String,
    pub total: i64,
}

impl fmt::Display for InvoiceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.normalized, self.total)
    }
}

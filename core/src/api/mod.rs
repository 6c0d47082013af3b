//! Public API for evaluating invoice expressions.
//!
//! The [`Engine`] owns the configuration ([`EngineOptions`]) and runs the
//! lexer → evaluator pipeline. The free functions in this module use an
//! engine with default limits.
//!
//! # Example
//!
//! ```
//! use invoice_calc_core::api::{Engine, EngineOptions, Limits, compute_invoice_total};
//!
//! assert_eq!(compute_invoice_total("X + V + 3"), Ok(18));
//!
//! let engine = Engine::new(EngineOptions {
//!     limits: Limits {
//!         max_length: 80,
//!         max_tokens: 9,
//!     },
//! });
//! let result = engine.evaluate("  mcm + xc  ").unwrap();
//! assert_eq!(result.normalized, "MCM + XC");
//! assert_eq!(result.total, 1990);
//! ```

pub mod engine;
pub mod error;
pub mod options;
pub mod result;

pub use engine::Engine;
pub use error::Diagnostic;
pub use options::{EngineOptions, Limits};
pub use result::InvoiceResult;

use crate::errors::InvoiceFormatError;

/// Compute the total of an invoice expression such as `"X + V + 3"`.
///
/// The expression must match `number ((+|-) number)*`, where a number is a
/// run of ASCII digits or of Roman letters (any case). Whitespace is
/// ignored. Anything else is rejected with an [`InvoiceFormatError`].
pub fn compute_invoice_total(expression: &str) -> Result<i64, InvoiceFormatError> {
    Engine::default().compute(expression)
}

/// Like [`compute_invoice_total`], for raw bytes that may not be text.
///
/// Bytes that are not valid UTF-8 fail with `InvalidInputType`.
pub fn compute_invoice_total_bytes(expression: &[u8]) -> Result<i64, InvoiceFormatError> {
    Engine::default().compute_bytes(expression)
}

/// Evaluate an expression and keep its original and normalized forms.
pub fn evaluate_invoice(expression: &str) -> Result<InvoiceResult, InvoiceFormatError> {
    Engine::default().evaluate(expression)
}

//! The invoice evaluation engine.

use tracing::debug;

use super::{EngineOptions, InvoiceResult};
use crate::errors::{FormatErrorKind, InvoiceFormatError};
use crate::lexer::{self, Span, Token};
use crate::{String, Vec, evaluator};

/// Runs the tokenize → evaluate pipeline under a fixed configuration.
///
/// An engine holds no per-call state, so a single instance can be shared
/// between threads and reused for any number of expressions.
///
/// # Example
///
/// ```
/// use invoice_calc_core::api::{Engine, EngineOptions};
///
/// let engine = Engine::new(EngineOptions::default());
/// assert_eq!(engine.compute("10 - IV"), Ok(6));
/// assert!(engine.compute("X + (V)").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    /// Access the engine options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Split an expression into tokens without checking its grammar.
    pub fn tokenize(&self, expression: &str) -> Result<Vec<Token>, InvoiceFormatError> {
        lexer::tokenize_with_limits(expression, &self.options.limits)
    }

    /// Compute the total of `expression`.
    pub fn compute(&self, expression: &str) -> Result<i64, InvoiceFormatError> {
        let tokens = self.tokenize(expression)?;
        evaluator::evaluate(&tokens)
    }

    /// Compute the total of an expression given as raw bytes.
    ///
    /// Non-UTF-8 input is not text and fails with `InvalidInputType`.
    pub fn compute_bytes(&self, expression: &[u8]) -> Result<i64, InvoiceFormatError> {
        let text = core::str::from_utf8(expression).map_err(|e| {
            let start = e.valid_up_to();
            let end = start + e.error_len().unwrap_or(expression.len() - start);
            InvoiceFormatError::at(FormatErrorKind::InvalidInputType, Span::new(start, end))
        })?;
        self.compute(text)
    }

    /// Compute the total and keep the original and normalized expression.
    pub fn evaluate(&self, expression: &str) -> Result<InvoiceResult, InvoiceFormatError> {
        let tokens = self.tokenize(expression)?;
        let total = evaluator::evaluate(&tokens)?;
        let normalized = lexer::normalize(&tokens);
        debug!(%normalized, total, "evaluated invoice");

        Ok(InvoiceResult {
            original: String::from(expression),
            normalized,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Limits;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_engine_uses_default_limits() {
        let engine = Engine::default();
        assert_eq!(engine.options().limits, Limits::default());
    }

    #[test]
    fn evaluate_keeps_both_forms() {
        let result = Engine::default().evaluate("  x+v+3  ").unwrap();
        assert_eq!(
            result,
            InvoiceResult {
                original: "  x+v+3  ".into(),
                normalized: "X + V + 3".into(),
                total: 18,
            }
        );
        assert_eq!(result.to_string(), "X + V + 3 = 18");
    }

    #[test]
    fn invalid_utf8_is_not_text() {
        let err = Engine::default().compute_bytes(b"X + \xff").unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::InvalidInputType);
        assert_eq!(err.span, Some(Span::new(4, 5)));
    }

    #[test]
    fn truncated_utf8_is_not_text() {
        // First two bytes of a three-byte sequence.
        let err = Engine::default().compute_bytes(b"X\xe2\x82").unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::InvalidInputType);
        assert_eq!(err.span, Some(Span::new(1, 3)));
    }

    #[test]
    fn utf8_bytes_are_evaluated() {
        assert_eq!(Engine::default().compute_bytes(b"MM + 26"), Ok(2026));
    }

    #[test]
    fn limits_are_applied() {
        let engine = Engine::new(EngineOptions {
            limits: Limits {
                max_length: 5,
                max_tokens: 2000,
            },
        });
        assert_eq!(engine.compute("I + I"), Ok(2));
        let err = engine.compute("I + II").unwrap_err();
        assert_eq!(
            err.kind,
            FormatErrorKind::ExpressionTooLong {
                length: 6,
                max_length: 5
            }
        );
    }

    #[test]
    fn engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }
}

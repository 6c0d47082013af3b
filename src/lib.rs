//! Invoice Calc - safe evaluation of invoice totals
//!
//! # Overview
//!
//! Partners submit invoice totals as short expressions mixing Roman numerals
//! and Arabic integers, such as `"MCMXCIV + 6"` or `"10 - iv"`. This crate
//! evaluates them with a closed-grammar recognizer: input is tokenized into
//! numbers and `+`/`-` operators, checked against
//! `number ((+|-) number)*` and folded left to right. No part of the input
//! is ever interpreted as code.
//!
//! # Quick Start
//!
//! ```
//! use invoice_calc::{compute_invoice_total, FormatErrorKind};
//!
//! assert_eq!(compute_invoice_total("X + V + 3"), Ok(18));
//! assert_eq!(compute_invoice_total("10 - IV"), Ok(6));
//!
//! let err = compute_invoice_total("X + V * 3").unwrap_err();
//! assert_eq!(err.kind, FormatErrorKind::IllegalCharacter { ch: '*' });
//! ```
//!
//! # Configuration
//!
//! Input size is bounded by [`Limits`] (5000 characters, 2000 tokens by
//! default). Use an [`Engine`] to change them:
//!
//! ```
//! use invoice_calc::{Engine, EngineOptions, Limits};
//!
//! let engine = Engine::new(EngineOptions {
//!     limits: Limits { max_length: 200, max_tokens: 50 },
//! });
//! assert_eq!(engine.compute("MM + XXVI"), Ok(2026));
//! ```
//!
//! # Errors
//!
//! Every failure is an [`InvoiceFormatError`]. Render one for humans with
//! [`render_error`] or [`render_error_to_string`].

// Re-export public API from invoice_calc_core
pub use invoice_calc_core::api::{
    Diagnostic, Engine, EngineOptions, InvoiceResult, Limits, compute_invoice_total,
    compute_invoice_total_bytes, evaluate_invoice,
};

// Re-export the pipeline stages for callers that want them individually
pub use invoice_calc_core::{evaluator, lexer, numeral};
pub use invoice_calc_core::lexer::{NumberText, NumeralKind, Operator, Span, Token, TokenKind};

// Re-export errors
pub use invoice_calc_core::errors::{FormatErrorKind, InvoiceFormatError};

mod error_renderer;
pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

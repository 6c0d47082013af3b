#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};

pub mod api;
pub mod errors;
pub mod evaluator;
pub mod lexer;
pub mod numeral;

pub use api::{
    Diagnostic, Engine, EngineOptions, InvoiceResult, Limits, compute_invoice_total,
    compute_invoice_total_bytes, evaluate_invoice,
};
pub use errors::{FormatErrorKind, InvoiceFormatError};
pub use lexer::{NumberText, NumeralKind, Operator, Span, Token, TokenKind};

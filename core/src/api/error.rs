//! Public diagnostic type for the invoice API.
//!
//! [`InvoiceFormatError`](crate::errors::InvoiceFormatError) is the error
//! returned by every operation; a [`Diagnostic`] is its presentation form,
//! with a stable code and help text, ready for renderers and editors.

use core::fmt;

use crate::String;
use crate::lexer::Span;

/// A diagnostic message with source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the issue, in bytes.
    pub span: Span,

    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,

    /// Optional error code (e.g., "F003") for documentation lookup.
    pub code: Option<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {}", self.message)?;

        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }

        if let Some(ref help) = self.help {
            write!(f, "\nhelp: {}", help)?;
        }

        Ok(())
    }
}

//! Invoice format errors.
//!
//! Every failure in the pipeline (tokenizing, decoding, grammar checking)
//! surfaces as a single [`InvoiceFormatError`]. The [`FormatErrorKind`]
//! tells callers which rule was violated and the optional [`Span`] points
//! at the offending part of the input.

use alloc::string::ToString;

use crate::api::Diagnostic;
use crate::lexer::Span;
use crate::{String, format};
use thiserror::Error;

/// The reason an invoice expression was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatErrorKind {
    /// The expression is not valid text (e.g. bytes that are not UTF-8).
    #[error("Expression must be a string")]
    InvalidInputType,

    /// The raw expression is longer than the configured limit.
    #[error("Expression too long: {length} characters exceeds maximum of {max_length}")]
    ExpressionTooLong { length: usize, max_length: usize },

    /// A character outside digits, Roman letters, `+`, `-` and whitespace.
    #[error("Illegal character in expression: {ch:?}")]
    IllegalCharacter { ch: char },

    /// Nothing but whitespace.
    #[error("Empty expression")]
    EmptyExpression,

    /// More tokens than the configured limit.
    #[error("Too many tokens: {count} exceeds maximum of {max_tokens}")]
    TooManyTokens { count: usize, max_tokens: usize },

    /// A number token that is neither a digit run nor a Roman-letter run,
    /// or a digit run too large to represent.
    #[error("Invalid number token: {text}")]
    InvalidNumberToken { text: String },

    /// Roman decoding met a character that is not a numeral.
    #[error("Invalid Roman numeral character: {ch}")]
    InvalidRomanCharacter { ch: char },

    #[error("Expression cannot start with an operator")]
    LeadingOperator,

    #[error("Expected operator, found {found}")]
    ExpectedOperator { found: String },

    #[error("Expression cannot end with an operator")]
    TrailingOperator,

    #[error("Two operators in a row")]
    ConsecutiveOperators,

    /// The running total left the `i64` range.
    #[error("Arithmetic overflow while computing the total")]
    ArithmeticOverflow,
}

impl FormatErrorKind {
    /// Stable code for documentation lookup.
    pub fn code(&self) -> &'static str {
        match self {
            FormatErrorKind::InvalidInputType => "F001",
            FormatErrorKind::ExpressionTooLong { .. } => "F002",
            FormatErrorKind::IllegalCharacter { .. } => "F003",
            FormatErrorKind::EmptyExpression => "F004",
            FormatErrorKind::TooManyTokens { .. } => "F005",
            FormatErrorKind::InvalidNumberToken { .. } => "F006",
            FormatErrorKind::InvalidRomanCharacter { .. } => "F007",
            FormatErrorKind::LeadingOperator => "F008",
            FormatErrorKind::ExpectedOperator { .. } => "F009",
            FormatErrorKind::TrailingOperator => "F010",
            FormatErrorKind::ConsecutiveOperators => "F011",
            FormatErrorKind::ArithmeticOverflow => "F012",
        }
    }

    fn help(&self) -> Option<String> {
        let help = match self {
            FormatErrorKind::InvalidInputType => "Pass the expression as UTF-8 text",
            FormatErrorKind::ExpressionTooLong { .. } => "Split the invoice into smaller expressions",
            FormatErrorKind::IllegalCharacter { .. } => {
                "Only digits, Roman numerals (IVXLCDM), '+', '-' and spaces are allowed"
            }
            FormatErrorKind::EmptyExpression => "Provide at least one number",
            FormatErrorKind::TooManyTokens { .. } => "Split the invoice into smaller expressions",
            FormatErrorKind::ExpectedOperator { .. } => "Separate numbers with '+' or '-'",
            FormatErrorKind::LeadingOperator
            | FormatErrorKind::TrailingOperator
            | FormatErrorKind::ConsecutiveOperators => {
                "Write expressions as: number ((+|-) number)*"
            }
            FormatErrorKind::InvalidNumberToken { .. }
            | FormatErrorKind::InvalidRomanCharacter { .. }
            | FormatErrorKind::ArithmeticOverflow => return None,
        };
        Some(help.to_string())
    }
}

/// An invoice expression could not be processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invoice format error: {kind}")]
pub struct InvoiceFormatError {
    pub kind: FormatErrorKind,
    pub span: Option<Span>,
}

impl InvoiceFormatError {
    /// Create an error with no source location.
    pub fn new(kind: FormatErrorKind) -> Self {
        Self { kind, span: None }
    }

    /// Create an error pointing at `span`.
    pub fn at(kind: FormatErrorKind, span: Span) -> Self {
        Self {
            kind,
            span: Some(span),
        }
    }

    /// Attach `span` unless the error already carries a more precise one.
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }

    pub fn kind(&self) -> &FormatErrorKind {
        &self.kind
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic {
            message: format!("{}", self.kind),
            span: self.span.clone().unwrap_or(Span(0..0)),
            help: self.kind.help(),
            code: Some(self.kind.code().to_string()),
        }
    }
}

//! Error rendering using ariadne
//!
//! This module renders invoice format errors with the offending part of
//! the expression underlined, the error code and a help note.

use crate::{Diagnostic, InvoiceFormatError};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<invoice>";

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use invoice_calc::{compute_invoice_total, render_error};
///
/// let source = "X + + V";
/// if let Err(e) = compute_invoice_total(source) {
///     render_error(source, &e);
/// }
/// ```
pub fn render_error(source: &str, error: &InvoiceFormatError) {
    render_error_to_writer(source, error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
///
/// This is useful when you want to control where the error is written,
/// such as to a file, a buffer, or a custom output stream.
pub fn render_error_to(
    source: &str,
    error: &InvoiceFormatError,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    render_error_to_writer(source, error, writer, true)
}

/// Render an error to a String (useful for logs, web UIs, etc.)
pub fn render_error_to_string(source: &str, error: &InvoiceFormatError) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(source: &str, error: &InvoiceFormatError) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    source: &str,
    error: &InvoiceFormatError,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    render_diagnostic(source, &error.to_diagnostic(), writer, use_color)
}

fn render_diagnostic(
    source: &str,
    diag: &Diagnostic,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    // Nothing to underline.
    if source.is_empty() {
        return writeln!(writer, "{}", diag);
    }

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    // ariadne works in character offsets; spans are byte offsets.
    let span = char_range(source, diag.span.0.clone());

    let mut report = Report::build(ReportKind::Error, (SOURCE_ID, span.clone()))
        .with_message(&diag.message)
        .with_config(ariadne::Config::default().with_color(use_color));

    if let Some(code) = &diag.code {
        report = report.with_code(code);
    }

    report = report.with_label(
        Label::new((SOURCE_ID, span))
            .with_message(&diag.message)
            .with_color(colors.next()),
    );

    if let Some(help) = &diag.help {
        report = report.with_help(help);
    }

    report
        .finish()
        .write((SOURCE_ID, Source::from(source)), &mut *writer)
}

/// Convert a byte range into a character range, clamped to `source`.
fn char_range(source: &str, bytes: std::ops::Range<usize>) -> std::ops::Range<usize> {
    let to_chars = |offset: usize| {
        let offset = offset.min(source.len());
        source
            .char_indices()
            .take_while(|(i, _)| *i < offset)
            .count()
    };
    to_chars(bytes.start)..to_chars(bytes.end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_invoice_total;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_grammar_error() {
        let source = "X + + V";
        let err = compute_invoice_total(source).unwrap_err();
        let output = render_error_to_string_no_color(source, &err);

        assert!(output.contains("Error"));
        assert!(output.contains("Two operators in a row"));
        assert!(output.contains("F011"));
        // Should show the source
        assert!(output.contains("X + + V"));
    }

    #[test]
    fn test_render_illegal_character() {
        let source = "X + V; 3";
        let err = compute_invoice_total(source).unwrap_err();
        let output = render_error_to_string_no_color(source, &err);

        assert!(output.contains("Illegal character"));
        assert!(output.contains("Only digits, Roman numerals"));
    }

    #[test]
    fn test_render_empty_expression() {
        let err = compute_invoice_total("").unwrap_err();
        let output = render_error_to_string_no_color("", &err);

        assert!(output.contains("Empty expression"));
    }

    #[test]
    fn test_render_to_string_captures_output() {
        let source = "__import__('os')";
        let err = compute_invoice_total(source).unwrap_err();
        let output = render_error_to_string_no_color(source, &err);

        // Output should not be empty
        assert!(!output.is_empty());
        // Should be multi-line (ariadne adds formatting)
        assert!(output.lines().count() > 1);
    }

    #[test]
    fn test_render_to_writer() {
        let source = "X -";
        let err = compute_invoice_total(source).unwrap_err();
        let mut buf = Vec::new();
        render_error_to(source, &err, &mut buf).unwrap();
        assert!(!buf.is_empty());
    }

    #[test]
    fn char_range_handles_multibyte_input() {
        let source = "é + X";
        assert_eq!(char_range(source, 0..2), 0..1);
        assert_eq!(char_range(source, 3..4), 2..3);
        assert_eq!(char_range(source, 0..100), 0..5);
    }
}

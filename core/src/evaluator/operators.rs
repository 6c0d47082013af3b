//! Binary operator implementations.

use crate::errors::{FormatErrorKind, InvoiceFormatError};
use crate::lexer::{Operator, Span};

/// Apply `op` to two integers.
///
/// Uses checked arithmetic; leaving the `i64` range is an error rather than
/// a wrap or a panic.
pub(super) fn eval_binary_int(
    op: Operator,
    left: i64,
    right: i64,
    span: Span,
) -> Result<i64, InvoiceFormatError> {
    let result = match op {
        Operator::Add => left.checked_add(right),
        Operator::Sub => left.checked_sub(right),
    };
    result.ok_or_else(|| InvoiceFormatError::at(FormatErrorKind::ArithmeticOverflow, span))
}

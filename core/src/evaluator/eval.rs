use tracing::debug;

use super::operators::eval_binary_int;
use crate::errors::{FormatErrorKind, InvoiceFormatError};
use crate::lexer::{Operator, Span, Token, TokenKind};
use crate::numeral::decode_number;

/// Two-state recognizer over a token slice.
///
/// The evaluator alternates between expecting a number and expecting an
/// operator, and only accepts once a number has been consumed and no
/// tokens remain.
pub(super) struct Evaluator<'a> {
    remaining: &'a [Token],
}

impl<'a> Evaluator<'a> {
    pub(super) fn new(tokens: &'a [Token]) -> Self {
        Self { remaining: tokens }
    }

    pub(super) fn eval(mut self) -> Result<i64, InvoiceFormatError> {
        let Some(first) = self.remaining.first() else {
            return Err(InvoiceFormatError::new(FormatErrorKind::EmptyExpression));
        };
        if first.is_operator() {
            return Err(InvoiceFormatError::at(
                FormatErrorKind::LeadingOperator,
                first.span.clone(),
            ));
        }

        let mut total = self.expect_number()?;
        let mut operations = 0usize;

        while let Some((op, op_span)) = self.expect_operator()? {
            let operand_span = self.peek_span(&op_span);
            let operand = self.expect_number()?;
            total = eval_binary_int(op, total, operand, Span::combine(&op_span, &operand_span))?;
            operations += 1;
        }

        debug!(operations, total, "evaluated expression");
        Ok(total)
    }

    /// Consume a number token, or explain why the next token is not one.
    ///
    /// Only called right after an operator or at the very start, so a
    /// missing token means the expression ended on an operator.
    fn expect_number(&mut self) -> Result<i64, InvoiceFormatError> {
        let remaining = self.remaining;
        let Some((token, rest)) = remaining.split_first() else {
            return Err(InvoiceFormatError::new(FormatErrorKind::TrailingOperator));
        };

        match &token.kind {
            TokenKind::Number(number) => {
                self.remaining = rest;
                decode_number(number).map_err(|e| e.with_span(token.span.clone()))
            }
            TokenKind::Operator(_) => Err(InvoiceFormatError::at(
                FormatErrorKind::ConsecutiveOperators,
                token.span.clone(),
            )),
        }
    }

    /// Consume an operator token; `None` once the input is exhausted.
    fn expect_operator(&mut self) -> Result<Option<(Operator, Span)>, InvoiceFormatError> {
        let remaining = self.remaining;
        let Some((token, rest)) = remaining.split_first() else {
            return Ok(None);
        };

        match &token.kind {
            TokenKind::Operator(op) => {
                self.remaining = rest;
                if rest.is_empty() {
                    return Err(InvoiceFormatError::at(
                        FormatErrorKind::TrailingOperator,
                        token.span.clone(),
                    ));
                }
                Ok(Some((*op, token.span.clone())))
            }
            TokenKind::Number(number) => Err(InvoiceFormatError::at(
                FormatErrorKind::ExpectedOperator {
                    found: number.text.clone(),
                },
                token.span.clone(),
            )),
        }
    }

    fn peek_span(&self, fallback: &Span) -> Span {
        self.remaining
            .first()
            .map(|token| token.span.clone())
            .unwrap_or_else(|| fallback.clone())
    }
}

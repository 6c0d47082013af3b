use tracing::{debug, trace};

use super::token::{NumberText, NumeralKind, Operator, Span, Token, TokenKind};
use crate::api::Limits;
use crate::errors::{FormatErrorKind, InvoiceFormatError};
use crate::numeral::roman_letter;
use crate::{String, Vec};

/// Tokenize `input` using the default [`Limits`].
pub fn tokenize(input: &str) -> Result<Vec<Token>, InvoiceFormatError> {
    tokenize_with_limits(input, &Limits::default())
}

/// Tokenize `input`, rejecting it when it exceeds `limits`.
///
/// The scan is a single left-to-right pass with maximal munch per
/// character class. Adjacent number runs of different classes (`12X`) come
/// out as two number tokens; rejecting them is the evaluator's job.
pub fn tokenize_with_limits(
    input: &str,
    limits: &Limits,
) -> Result<Vec<Token>, InvoiceFormatError> {
    let length = input.chars().count();
    if length > limits.max_length {
        return Err(InvoiceFormatError::new(
            FormatErrorKind::ExpressionTooLong {
                length,
                max_length: limits.max_length,
            },
        ));
    }

    let mut scanner = Scanner::default();
    for (pos, ch) in input.char_indices() {
        scanner.step(pos, ch)?;
    }
    let tokens = scanner.finish();

    if tokens.is_empty() {
        return Err(InvoiceFormatError::at(
            FormatErrorKind::EmptyExpression,
            Span::new(0, input.len()),
        ));
    }

    if tokens.len() > limits.max_tokens {
        let first_excess = &tokens[limits.max_tokens].span;
        return Err(InvoiceFormatError::at(
            FormatErrorKind::TooManyTokens {
                count: tokens.len(),
                max_tokens: limits.max_tokens,
            },
            Span::new(first_excess.0.start, input.len()),
        ));
    }

    debug!(length, tokens = tokens.len(), "tokenized expression");
    Ok(tokens)
}

/// Character classes recognized by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Whitespace,
    Operator(Operator),
    Digit,
    /// Carries the uppercased letter.
    Roman(char),
}

fn classify(ch: char) -> Option<CharClass> {
    if ch.is_whitespace() {
        Some(CharClass::Whitespace)
    } else if let Some(op) = Operator::from_char(ch) {
        Some(CharClass::Operator(op))
    } else if ch.is_ascii_digit() {
        Some(CharClass::Digit)
    } else {
        roman_letter(ch).map(CharClass::Roman)
    }
}

/// A number run being accumulated.
#[derive(Debug)]
struct Run {
    kind: NumeralKind,
    start: usize,
    end: usize,
    text: String,
}

impl Run {
    fn accepts(&self, class: CharClass) -> bool {
        matches!(
            (self.kind, class),
            (NumeralKind::Digits, CharClass::Digit) | (NumeralKind::Roman, CharClass::Roman(_))
        )
    }

    fn into_token(self) -> Token {
        Token {
            kind: TokenKind::Number(NumberText {
                text: self.text,
                kind: self.kind,
            }),
            span: Span::new(self.start, self.end),
        }
    }
}

/// Finite-state scanner. `run` is the only state: either inside a number
/// run of some kind, or between tokens.
#[derive(Debug, Default)]
struct Scanner {
    tokens: Vec<Token>,
    run: Option<Run>,
}

impl Scanner {
    fn step(&mut self, pos: usize, ch: char) -> Result<(), InvoiceFormatError> {
        let end = pos + ch.len_utf8();
        let class = classify(ch).ok_or_else(|| {
            InvoiceFormatError::at(FormatErrorKind::IllegalCharacter { ch }, Span::new(pos, end))
        })?;

        if let Some(run) = self.run.as_mut() {
            if run.accepts(class) {
                match class {
                    CharClass::Roman(upper) => run.text.push(upper),
                    _ => run.text.push(ch),
                }
                run.end = end;
                return Ok(());
            }
        }
        self.flush();

        match class {
            CharClass::Whitespace => {}
            CharClass::Operator(op) => self.emit(Token {
                kind: TokenKind::Operator(op),
                span: Span::new(pos, end),
            }),
            CharClass::Digit => self.start_run(NumeralKind::Digits, pos, end, ch),
            CharClass::Roman(upper) => self.start_run(NumeralKind::Roman, pos, end, upper),
        }
        Ok(())
    }

    fn start_run(&mut self, kind: NumeralKind, start: usize, end: usize, first: char) {
        let mut text = String::new();
        text.push(first);
        self.run = Some(Run {
            kind,
            start,
            end,
            text,
        });
    }

    fn flush(&mut self) {
        if let Some(run) = self.run.take() {
            self.emit(run.into_token());
        }
    }

    fn emit(&mut self, token: Token) {
        trace!(token = %token, start = token.span.0.start, "token");
        self.tokens.push(token);
    }

    fn finish(mut self) -> Vec<Token> {
        self.flush();
        self.tokens
    }
}

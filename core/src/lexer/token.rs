use core::fmt;
use core::ops::Range;

use crate::String;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }
    pub fn combine(a: &Span, b: &Span) -> Span {
        Span::new(a.0.start, b.0.end)
    }
    pub fn str_of<'a>(&self, source: &'a str) -> &'a str {
        &source[self.0.start..self.0.end]
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
        }
    }
}

/// How a number token was spelled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NumeralKind {
    /// A run of ASCII digits, e.g. `123`.
    Digits,
    /// A run of Roman letters, stored uppercased, e.g. `MCMXCIV`.
    Roman,
}

/// The text of a number token together with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberText {
    pub text: String,
    pub kind: NumeralKind,
}

impl NumberText {
    pub fn digits(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NumeralKind::Digits,
        }
    }

    pub fn roman(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NumeralKind::Roman,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Operator(Operator),
    Number(NumberText),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn is_operator(&self) -> bool {
        matches!(self.kind, TokenKind::Operator(_))
    }

    /// The token as it appears in normalized output.
    pub fn text(&self) -> &str {
        match &self.kind {
            TokenKind::Operator(op) => op.as_str(),
            TokenKind::Number(number) => &number.text,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

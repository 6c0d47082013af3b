//! Decoding of number tokens into integers.
//!
//! A number token is either a run of ASCII digits (decimal) or a run of
//! Roman letters. Classification is checked against the text itself, so a
//! hand-built [`NumberText`] with mixed content is rejected rather than
//! trusted.

mod roman;

pub use roman::{ROMAN_VALUES, SUBTRACTIVE_PAIRS, roman_letter, roman_to_int};

use crate::errors::{FormatErrorKind, InvoiceFormatError};
use crate::lexer::NumberText;

/// Convert a number token into its integer value.
pub fn decode_number(token: &NumberText) -> Result<i64, InvoiceFormatError> {
    let text = token.text.as_str();
    let invalid = || {
        InvoiceFormatError::new(FormatErrorKind::InvalidNumberToken {
            text: token.text.clone(),
        })
    };

    if text.is_empty() {
        return Err(invalid());
    }

    if text.bytes().all(|b| b.is_ascii_digit()) {
        // Only fails when the value does not fit in an i64.
        return text.parse::<i64>().map_err(|_| invalid());
    }

    if text.chars().all(|ch| ROMAN_VALUES.contains_key(&ch)) {
        return roman_to_int(text);
    }

    Err(invalid())
}

#[cfg(test)]
mod roman_test;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_digit_runs() {
        assert_eq!(decode_number(&NumberText::digits("0")), Ok(0));
        assert_eq!(decode_number(&NumberText::digits("007")), Ok(7));
        assert_eq!(decode_number(&NumberText::digits("1994")), Ok(1994));
    }

    #[test]
    fn decodes_roman_runs() {
        assert_eq!(decode_number(&NumberText::roman("MCMXCIV")), Ok(1994));
    }

    #[test]
    fn rejects_mixed_text() {
        let err = decode_number(&NumberText::digits("12X")).unwrap_err();
        assert_eq!(
            err.kind,
            FormatErrorKind::InvalidNumberToken {
                text: "12X".into()
            }
        );
    }

    #[test]
    fn rejects_empty_text() {
        let err = decode_number(&NumberText::roman("")).unwrap_err();
        assert!(matches!(err.kind, FormatErrorKind::InvalidNumberToken { .. }));
    }

    #[test]
    fn rejects_lowercase_roman_text() {
        // The lexer uppercases Roman runs; anything else is not a numeral.
        let err = decode_number(&NumberText::roman("xiv")).unwrap_err();
        assert!(matches!(err.kind, FormatErrorKind::InvalidNumberToken { .. }));
    }

    #[test]
    fn rejects_digit_runs_out_of_range() {
        let err = decode_number(&NumberText::digits("99999999999999999999")).unwrap_err();
        assert!(matches!(err.kind, FormatErrorKind::InvalidNumberToken { .. }));
        assert_eq!(
            decode_number(&NumberText::digits("9223372036854775807")),
            Ok(i64::MAX)
        );
    }
}

use hashbrown::HashMap;
use lazy_static::lazy_static;

use crate::errors::{FormatErrorKind, InvoiceFormatError};

lazy_static! {
    /// Values of the single Roman letters.
    pub static ref ROMAN_VALUES: HashMap<char, i64> = [
        ('I', 1),
        ('V', 5),
        ('X', 10),
        ('L', 50),
        ('C', 100),
        ('D', 500),
        ('M', 1000),
    ]
    .into_iter()
    .collect();

    /// Values of the two-letter subtractive pairs.
    pub static ref SUBTRACTIVE_PAIRS: HashMap<(char, char), i64> = [
        (('I', 'V'), 4),
        (('I', 'X'), 9),
        (('X', 'L'), 40),
        (('X', 'C'), 90),
        (('C', 'D'), 400),
        (('C', 'M'), 900),
    ]
    .into_iter()
    .collect();
}

/// Return the uppercase Roman letter `ch` stands for, if any.
///
/// Matching is case-insensitive: `x` and `X` both yield `X`.
pub fn roman_letter(ch: char) -> Option<char> {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(letter), None) if ROMAN_VALUES.contains_key(&letter) => Some(letter),
        _ => None,
    }
}

/// Convert an uppercase Roman numeral into an integer.
///
/// Subtractive pairs are matched before single letters. Ordering and
/// repetition rules are not checked: `IIII` is 4 and `MMMM` is 4000.
pub fn roman_to_int(s: &str) -> Result<i64, InvoiceFormatError> {
    let mut letters = s.chars().peekable();
    let mut total: i64 = 0;

    while let Some(ch) = letters.next() {
        let pair = letters
            .peek()
            .and_then(|&next| SUBTRACTIVE_PAIRS.get(&(ch, next)));

        let value = match pair {
            Some(&value) => {
                letters.next();
                value
            }
            None => *ROMAN_VALUES.get(&ch).ok_or_else(|| {
                InvoiceFormatError::new(FormatErrorKind::InvalidRomanCharacter { ch })
            })?,
        };

        total = total
            .checked_add(value)
            .ok_or_else(|| InvoiceFormatError::new(FormatErrorKind::ArithmeticOverflow))?;
    }

    Ok(total)
}

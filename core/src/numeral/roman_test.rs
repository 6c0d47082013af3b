//! Unit tests for Roman numeral decoding.

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn single_letters() {
    for (letter, value) in [
        ("I", 1),
        ("V", 5),
        ("X", 10),
        ("L", 50),
        ("C", 100),
        ("D", 500),
        ("M", 1000),
    ] {
        assert_eq!(roman_to_int(letter), Ok(value), "decoding {letter}");
    }
}

#[test]
fn subtractive_pairs() {
    for (pair, value) in [
        ("IV", 4),
        ("IX", 9),
        ("XL", 40),
        ("XC", 90),
        ("CD", 400),
        ("CM", 900),
    ] {
        assert_eq!(roman_to_int(pair), Ok(value), "decoding {pair}");
    }
}

#[test]
fn conventional_numerals() {
    assert_eq!(roman_to_int("III"), Ok(3));
    assert_eq!(roman_to_int("LVIII"), Ok(58));
    assert_eq!(roman_to_int("MCMXCIV"), Ok(1994));
    assert_eq!(roman_to_int("MMXXVI"), Ok(2026));
    assert_eq!(roman_to_int("MMMCMXCIX"), Ok(3999));
}

#[test]
fn non_canonical_numerals_are_summed() {
    assert_eq!(roman_to_int("IIII"), Ok(4));
    assert_eq!(roman_to_int("VV"), Ok(10));
    assert_eq!(roman_to_int("MMMM"), Ok(4000));
    // No pair for "IL", so it reads as I + L.
    assert_eq!(roman_to_int("IL"), Ok(51));
}

#[test]
fn pairs_take_priority_left_to_right() {
    // "XIX" is X + IX, not XI + X.
    assert_eq!(roman_to_int("XIX"), Ok(19));
    // "CXC" is C + XC.
    assert_eq!(roman_to_int("CXC"), Ok(190));
}

#[test]
fn empty_numeral_is_zero() {
    assert_eq!(roman_to_int(""), Ok(0));
}

#[test]
fn unknown_character_is_reported() {
    let err = roman_to_int("XQV").unwrap_err();
    assert_eq!(err.kind, FormatErrorKind::InvalidRomanCharacter { ch: 'Q' });
}

#[test]
fn lowercase_is_not_decoded() {
    let err = roman_to_int("x").unwrap_err();
    assert_eq!(err.kind, FormatErrorKind::InvalidRomanCharacter { ch: 'x' });
}

#[test]
fn roman_letter_is_case_insensitive() {
    assert_eq!(roman_letter('m'), Some('M'));
    assert_eq!(roman_letter('M'), Some('M'));
    assert_eq!(roman_letter('a'), None);
    assert_eq!(roman_letter('1'), None);
    assert_eq!(roman_letter('_'), None);
}

#[test]
fn tables_hold_expected_entries() {
    assert_eq!(ROMAN_VALUES.len(), 7);
    assert_eq!(SUBTRACTIVE_PAIRS.len(), 6);
    assert_eq!(SUBTRACTIVE_PAIRS.get(&('C', 'M')), Some(&900));
}

//! Devanagari characters used by the conjugation rules, and helpers for slicing strings by Unicode scalar value.
//!
//! Every orthographic unit the rules look at (a consonant, an independent vowel, a vowel sign, the halant, or a
//! nasalization mark) is exactly one `char`, so nothing here deals with grapheme clusters.

/// The virama, which strips the inherent vowel from the consonant before it.
pub const HALANT: char = '\u{094D}';
/// Nasalization mark placed over a vowel.
pub const CHANDRABINDU: char = '\u{0901}';
/// Dependent vowel sign "ा".
pub const VOWEL_SIGN_AA: char = '\u{093E}';
/// Dependent vowel sign "े".
pub const VOWEL_SIGN_E: char = '\u{0947}';
/// Dependent vowel sign "ि".
pub const VOWEL_SIGN_I: char = '\u{093F}';
/// Independent vowel "उ".
pub const VOWEL_U: char = '\u{0909}';
/// Independent vowel "ए".
pub const VOWEL_E: char = '\u{090F}';
/// Independent vowel "इ".
pub const VOWEL_I: char = '\u{0907}';
/// Consonant "छ".
pub const CHA: char = '\u{091B}';
/// Consonant "द".
pub const DA: char = '\u{0926}';

/// Half "न", a consonant with its vowel suppressed.
pub const HALF_NA: &str = "न्";
/// The ending every infinitive carries.
pub const INFINITIVE_MARKER: &str = "नु";
/// A root ending in "ा" followed by "उ", e.g. the root of "पकाउनु".
pub const DOUBLE_VOWEL: &str = "ाउ";

/// Counts the scalar values in the provided string.
pub fn scalar_count(text: &str) -> usize {
    text.chars().count()
}

/// Splits the provided string before its last `count` scalar values.
///
/// If the string has `count` or fewer scalar values, the first part is empty and the second is the whole string.
pub fn split_off_last(text: &str, count: usize) -> (&str, &str) {
    if count == 0 {
        return (text, "");
    }

    match text.char_indices().rev().nth(count - 1) {
        Some((index, _)) => text.split_at(index),
        None => ("", text),
    }
}

/// The last `count` scalar values of the provided string.
pub fn last_chars(text: &str, count: usize) -> &str {
    split_off_last(text, count).1
}

/// The provided string without its last `count` scalar values.
pub fn without_last_chars(text: &str, count: usize) -> &str {
    split_off_last(text, count).0
}

/// Splits the first scalar value off the provided string, if there is one.
pub fn split_first(text: &str) -> Option<(char, &str)> {
    let mut chars = text.chars();
    chars.next().map(|first| (first, chars.as_str()))
}

pub fn first_char(text: &str) -> Option<char> {
    text.chars().next()
}

pub fn last_char(text: &str) -> Option<char> {
    text.chars().next_back()
}

/// Determines whether the provided string ends with the halant.
pub fn ends_with_halant(text: &str) -> bool {
    last_char(text) == Some(HALANT)
}

/// Determines whether the provided string starts with one of the independent vowels that can be absorbed into a
/// preceding consonant ("ए" or "इ").
pub fn starts_with_full_vowel(text: &str) -> bool {
    first_char(text).and_then(vowel_sign_for).is_some()
}

/// Determines whether the provided string starts with the vowel sign "े" or "ि".
pub fn starts_with_vowel_sign(text: &str) -> bool {
    matches!(first_char(text), Some(VOWEL_SIGN_E) | Some(VOWEL_SIGN_I))
}

/// Finds the dependent vowel sign to write in place of the provided independent vowel after a bare consonant.
pub fn vowel_sign_for(vowel: char) -> Option<char> {
    match vowel {
        VOWEL_E => Some(VOWEL_SIGN_E),
        VOWEL_I => Some(VOWEL_SIGN_I),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_off_last_counts_scalar_values() {
        assert_eq!(("पका", "उ"), split_off_last("पकाउ", 1));
        assert_eq!(("पक", "ाउ"), split_off_last("पकाउ", 2));
        assert_eq!(("गर्", "नु"), split_off_last("गर्नु", 2));
    }

    #[test]
    fn split_off_last_more_than_available() {
        assert_eq!(("", "ग"), split_off_last("ग", 2));
        assert_eq!(("", ""), split_off_last("", 1));
    }

    #[test]
    fn split_off_last_nothing() {
        assert_eq!(("खा", ""), split_off_last("खा", 0));
    }

    #[test]
    fn last_and_without_last() {
        assert_eq!(DOUBLE_VOWEL, last_chars("पकाउ", 2));
        assert_eq!("पका", without_last_chars("पकाउ", 1));
    }

    #[test]
    fn scalar_count_is_not_byte_count() {
        assert_eq!(5, scalar_count("गर्नु"));
        assert_eq!(15, "गर्नु".len());
    }

    #[test]
    fn split_first_of_empty() {
        assert_eq!(None, split_first(""));
        assert_eq!(Some((VOWEL_E, "को छु")), split_first("एको छु"));
    }

    #[test]
    fn halant() {
        assert!(ends_with_halant("गर्"));
        assert!(!ends_with_halant("ग"));
        assert!(!ends_with_halant(""));
    }

    #[test]
    fn full_vowels() {
        assert!(starts_with_full_vowel("एँ"));
        assert!(starts_with_full_vowel("इनँ"));
        assert!(!starts_with_full_vowel("यौ"));
        assert!(!starts_with_full_vowel(""));
    }

    #[test]
    fn vowel_signs() {
        assert!(!starts_with_vowel_sign(""));
        assert!(starts_with_vowel_sign("े"));
        assert!(starts_with_vowel_sign("ि"));
        assert!(!starts_with_vowel_sign("ए"));
    }

    #[test]
    fn vowel_sign_conversion() {
        assert_eq!(Some('े'), vowel_sign_for('ए'));
        assert_eq!(Some('ि'), vowel_sign_for('इ'));
        assert_eq!(None, vowel_sign_for('उ'));
    }
}

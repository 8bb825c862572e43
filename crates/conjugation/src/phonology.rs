//! Rules for joining a root to a suffix.

use log::trace;

use crate::devanagari::{
    ends_with_halant, first_char, last_char, last_chars, split_first, vowel_sign_for,
    without_last_chars, CHA, CHANDRABINDU, DA, DOUBLE_VOWEL, HALF_NA, VOWEL_SIGN_AA, VOWEL_U,
};

/// Nasalizes the end of the provided root if the suffix that will follow it calls for it.
///
/// * Before "छ", a root ending in "ा" gains a half "न" ("खा" → "खान्"), and a root ending in "ाउ" gains a
///   chandrabindu ("पकाउ" → "पकाउँ").
/// * Before "द", a root ending in "ा" or "उ" gains a chandrabindu ("खा" → "खाँ").
///
/// Any other root is returned unchanged.
pub fn adjust_root(root: &str, suffix: &str) -> String {
    let root_last = last_char(root);

    match first_char(suffix) {
        Some(CHA) => {
            if root_last == Some(VOWEL_SIGN_AA) {
                trace!("Adding half न to {root:?} before {suffix:?}");
                return format!("{root}{HALF_NA}");
            }

            if last_chars(root, 2) == DOUBLE_VOWEL {
                trace!("Nasalizing double vowel of {root:?} before {suffix:?}");
                return format!("{root}{CHANDRABINDU}");
            }
        }
        Some(DA) => {
            if matches!(root_last, Some(VOWEL_SIGN_AA) | Some(VOWEL_U)) {
                trace!("Nasalizing last vowel of {root:?} before {suffix:?}");
                return format!("{root}{CHANDRABINDU}");
            }
        }
        _ => (),
    }

    root.to_string()
}

/// Joins a root and a suffix.
///
/// When the root ends in a halant and the suffix starts with "ए" or "इ", the halant is dropped and the vowel is
/// written as a vowel sign on the root's last consonant ("गर्" + "एँ" → "गरेँ"). Otherwise the two are simply
/// concatenated.
pub fn join(root: &str, suffix: &str) -> String {
    if ends_with_halant(root) {
        if let Some((vowel, rest_of_suffix)) = split_first(suffix) {
            if let Some(vowel_sign) = vowel_sign_for(vowel) {
                trace!("Absorbing {vowel:?} of {suffix:?} into {root:?}");
                let bare_root = without_last_chars(root, 1);
                return format!("{bare_root}{vowel_sign}{rest_of_suffix}");
            }
        }
    }

    format!("{root}{suffix}")
}

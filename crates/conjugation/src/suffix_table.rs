use crate::{Polarity, Subject, Tense};

/// Finds the suffix to add to a root to conjugate it.
pub fn suffix_for(tense: Tense, subject: Subject, polarity: Polarity) -> &'static str {
    let (affirmative, negative) = suffixes_for(tense, subject);
    if polarity.is_negative() {
        negative
    } else {
        affirmative
    }
}

/// The affirmative and negative suffixes for a tense and subject.
fn suffixes_for(tense: Tense, subject: Subject) -> (&'static str, &'static str) {
    match (tense, subject) {
        (Tense::Present, Subject::FirstSingular) => ("छु", "दिन"),
        (Tense::Present, Subject::SecondFamiliarPlural) => ("छौ", "दैनौ"),
        (Tense::SimplePast, Subject::FirstSingular) => ("एँ", "इनँ"),
        (Tense::SimplePast, Subject::SecondFamiliarPlural) => ("यौ", "एनौ"),
        (Tense::CompletedPast, Subject::FirstSingular) => ("एको छु", "एको छैन"),
        (Tense::CompletedPast, Subject::SecondFamiliarPlural) => ("एका छौ", "एका छैनौ"),
        (Tense::SimpleFuture, Subject::FirstSingular) => ("ने छु", "ने छैन"),
        (Tense::SimpleFuture, Subject::SecondFamiliarPlural) => ("ने छौ", "ने छैनौ"),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use itertools::iproduct;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_combination_has_its_own_suffix() {
        let suffixes = iproduct!(Tense::iter(), Subject::iter(), Polarity::iter())
            .map(|(tense, subject, polarity)| suffix_for(tense, subject, polarity))
            .collect::<HashSet<_>>();

        assert_eq!(16, suffixes.len());
        assert!(suffixes.iter().all(|suffix| !suffix.is_empty()));
    }

    #[test]
    fn present() {
        assert_eq!("छु", suffix_for(Tense::Present, Subject::FirstSingular, Polarity::Affirmative));
        assert_eq!("दिन", suffix_for(Tense::Present, Subject::FirstSingular, Polarity::Negative));
        assert_eq!(
            "दैनौ",
            suffix_for(Tense::Present, Subject::SecondFamiliarPlural, Polarity::Negative)
        );
    }

    #[test]
    fn completed_past_is_two_words() {
        assert_eq!(
            "एका छैनौ",
            suffix_for(
                Tense::CompletedPast,
                Subject::SecondFamiliarPlural,
                Polarity::Negative
            )
        );
    }

    #[test]
    fn simple_future() {
        assert_eq!(
            "ने छौ",
            suffix_for(
                Tense::SimpleFuture,
                Subject::SecondFamiliarPlural,
                Polarity::Affirmative
            )
        );
        assert_eq!(
            "ने छैन",
            suffix_for(Tense::SimpleFuture, Subject::FirstSingular, Polarity::Negative)
        );
    }
}

use std::fmt::Display;

use strum::EnumIter;

/// The tenses verbs can be conjugated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, EnumIter)]
pub enum Tense {
    #[default]
    Present,
    SimplePast,
    CompletedPast,
    SimpleFuture,
}

impl Tense {
    /// Parses the provided string to a `Tense`. Returns `None` if the string doesn't map to any tense.
    pub fn parse(input: &str) -> Option<Tense> {
        match input {
            "present" => Some(Tense::Present),
            "simple past" => Some(Tense::SimplePast),
            "completed past" => Some(Tense::CompletedPast),
            "simple future" => Some(Tense::SimpleFuture),
            _ => None,
        }
    }

    /// Whether forms in this tense are built on the past root rather than the root.
    pub fn uses_past_root(&self) -> bool {
        matches!(self, Tense::SimplePast | Tense::CompletedPast)
    }
}

impl Display for Tense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let string = match self {
            Tense::Present => "present",
            Tense::SimplePast => "simple past",
            Tense::CompletedPast => "completed past",
            Tense::SimpleFuture => "simple future",
        };

        string.fmt(f)
    }
}

/// The grammatical person and number a verb agrees with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, EnumIter)]
pub enum Subject {
    /// "म"
    #[default]
    FirstSingular,
    /// "तिमी"
    SecondFamiliarPlural,
}

impl Subject {
    /// Parses the provided pronoun to a `Subject`. Returns `None` if the string doesn't map to any subject.
    pub fn parse(input: &str) -> Option<Subject> {
        match input {
            "म" => Some(Subject::FirstSingular),
            "तिमी" => Some(Subject::SecondFamiliarPlural),
            _ => None,
        }
    }
}

impl Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let string = match self {
            Subject::FirstSingular => "म",
            Subject::SecondFamiliarPlural => "तिमी",
        };

        string.fmt(f)
    }
}

/// Whether a form is affirmative or negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, EnumIter)]
pub enum Polarity {
    #[default]
    Affirmative,
    Negative,
}

impl Polarity {
    /// Parses the provided string to a `Polarity`. Returns `None` if the string doesn't map to any polarity.
    pub fn parse(input: &str) -> Option<Polarity> {
        match input {
            "affirmative" => Some(Polarity::Affirmative),
            "negative" => Some(Polarity::Negative),
            _ => None,
        }
    }

    /// Whether forms with this polarity take the negative suffix.
    pub fn is_negative(&self) -> bool {
        *self == Polarity::Negative
    }
}

impl Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let string = match self {
            Polarity::Affirmative => "affirmative",
            Polarity::Negative => "negative",
        };

        string.fmt(f)
    }
}

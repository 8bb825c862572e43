use std::fmt::Display;

use log::trace;

use crate::{
    devanagari::{
        last_chars, scalar_count, without_last_chars, DOUBLE_VOWEL, INFINITIVE_MARKER,
    },
    IrregularPastRootCatalog,
};

/// The infinitive used when none is provided.
pub const DEFAULT_INFINITIVE: &str = "गर्नु";

/// The infinitives of the standard set of verbs.
pub const STANDARD_INFINITIVES: [&str; 4] = ["गर्नु", "खानु", "जानु", "पकाउनु"];

/// A verb, identified by its infinitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Verb {
    /// The dictionary form, ending in "नु"
    infinitive: String,
    /// The past root to use instead of deriving one from the infinitive
    irregular_past_root: Option<String>,
}

/// An error while creating a `Verb`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInfinitiveError {
    /// The infinitive is too short to have the infinitive marker stripped from it.
    TooShort { infinitive: String },
    /// The infinitive doesn't end in "नु".
    MissingMarker { infinitive: String },
    /// The infinitive is nothing but the marker, so there's no root.
    MissingRoot { infinitive: String },
}

impl Display for InvalidInfinitiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidInfinitiveError::TooShort { infinitive } => {
                write!(f, "infinitive {infinitive:?} is too short to be an infinitive")
            }
            InvalidInfinitiveError::MissingMarker { infinitive } => {
                write!(f, "infinitive {infinitive:?} does not end in {INFINITIVE_MARKER:?}")
            }
            InvalidInfinitiveError::MissingRoot { infinitive } => {
                write!(f, "infinitive {infinitive:?} has no root before {INFINITIVE_MARKER:?}")
            }
        }
    }
}

impl std::error::Error for InvalidInfinitiveError {}

impl Default for Verb {
    fn default() -> Self {
        Verb {
            infinitive: DEFAULT_INFINITIVE.to_string(),
            irregular_past_root: None,
        }
    }
}

impl Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.infinitive.fmt(f)
    }
}

impl Verb {
    /// Creates a verb, taking its irregular past root from the standard catalog if it has one.
    ///
    /// An empty infinitive is replaced with `DEFAULT_INFINITIVE`.
    pub fn new<T: Into<String>>(infinitive: T) -> Result<Verb, InvalidInfinitiveError> {
        Verb::from_catalog(infinitive, &IrregularPastRootCatalog::new())
    }

    /// Creates a verb with an irregular past root.
    ///
    /// An empty past root is treated as no past root at all.
    pub fn with_past_root<T: Into<String>, P: Into<String>>(
        infinitive: T,
        past_root: P,
    ) -> Result<Verb, InvalidInfinitiveError> {
        let past_root = Some(past_root.into()).filter(|root| !root.is_empty());
        Verb::build(infinitive.into(), past_root)
    }

    /// Creates a verb, taking its irregular past root from the provided catalog if it has one.
    pub fn from_catalog<T: Into<String>>(
        infinitive: T,
        catalog: &IrregularPastRootCatalog,
    ) -> Result<Verb, InvalidInfinitiveError> {
        let infinitive = or_default_infinitive(infinitive.into());
        let past_root = catalog.get(&infinitive).map(str::to_string);
        Verb::build(infinitive, past_root)
    }

    fn build(
        infinitive: String,
        irregular_past_root: Option<String>,
    ) -> Result<Verb, InvalidInfinitiveError> {
        let infinitive = or_default_infinitive(infinitive);
        validate_infinitive(&infinitive)?;

        Ok(Verb {
            infinitive,
            irregular_past_root,
        })
    }

    pub fn infinitive(&self) -> &str {
        &self.infinitive
    }

    pub fn irregular_past_root(&self) -> Option<&str> {
        self.irregular_past_root.as_deref()
    }

    /// The infinitive minus "नु". Present and future forms are built on this.
    pub fn root(&self) -> &str {
        without_last_chars(&self.infinitive, scalar_count(INFINITIVE_MARKER))
    }

    /// The root simple past and completed past forms are built on.
    ///
    /// This is the irregular past root if there is one. Otherwise it's the root, except that roots ending in "ाउ"
    /// lose the "उ" (so "पकाउनु" has the past root "पका").
    pub fn past_root(&self) -> &str {
        if let Some(past_root) = &self.irregular_past_root {
            return past_root;
        }

        let root = self.root();
        if last_chars(root, 2) == DOUBLE_VOWEL {
            trace!("Dropping the second vowel of double-vowel root {root:?}");
            without_last_chars(root, 1)
        } else {
            root
        }
    }
}

fn or_default_infinitive(infinitive: String) -> String {
    if infinitive.is_empty() {
        DEFAULT_INFINITIVE.to_string()
    } else {
        infinitive
    }
}

/// Checks that the provided infinitive has a root followed by "नु".
fn validate_infinitive(infinitive: &str) -> Result<(), InvalidInfinitiveError> {
    let marker_length = scalar_count(INFINITIVE_MARKER);
    let length = scalar_count(infinitive);

    if length < marker_length {
        return Err(InvalidInfinitiveError::TooShort {
            infinitive: infinitive.to_string(),
        });
    }

    if last_chars(infinitive, marker_length) != INFINITIVE_MARKER {
        return Err(InvalidInfinitiveError::MissingMarker {
            infinitive: infinitive.to_string(),
        });
    }

    if length == marker_length {
        return Err(InvalidInfinitiveError::MissingRoot {
            infinitive: infinitive.to_string(),
        });
    }

    Ok(())
}

/// Builds the standard set of verbs, with irregular past roots taken from the standard catalog.
pub fn standard_verbs() -> Vec<Verb> {
    let catalog = IrregularPastRootCatalog::new();
    STANDARD_INFINITIVES
        .iter()
        .map(|infinitive| Verb {
            infinitive: infinitive.to_string(),
            irregular_past_root: catalog.get(infinitive).map(str::to_string),
        })
        .collect()
}

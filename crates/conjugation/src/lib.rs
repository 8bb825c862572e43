//! Conjugation of Nepali verbs, from an infinitive to the written form for a tense, subject, and polarity.

pub mod devanagari;

mod conjugation;
pub use conjugation::Conjugation;
pub use conjugation::ConjugationEngine;
pub use conjugation::ConjugationRequest;

mod grammar;
pub use grammar::Polarity;
pub use grammar::Subject;
pub use grammar::Tense;

mod irregular_past_root_catalog;
pub use irregular_past_root_catalog::IrregularPastRootCatalog;

mod phonology;
pub use phonology::adjust_root;
pub use phonology::join;

mod request_parser;
pub use request_parser::RequestParseError;

mod suffix_table;
pub use suffix_table::suffix_for;

mod verb;
pub use verb::standard_verbs;
pub use verb::InvalidInfinitiveError;
pub use verb::Verb;
pub use verb::DEFAULT_INFINITIVE;
pub use verb::STANDARD_INFINITIVES;

use std::fmt::Display;

use itertools::iproduct;
use log::debug;
use strum::IntoEnumIterator;

use crate::{
    phonology::{adjust_root, join},
    request_parser::parse_request,
    suffix_table::suffix_for,
    Polarity, RequestParseError, Subject, Tense, Verb,
};

/// What to conjugate a verb into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ConjugationRequest {
    pub tense: Tense,
    pub subject: Subject,
    pub polarity: Polarity,
}

impl ConjugationRequest {
    pub fn new(tense: Tense, subject: Subject, polarity: Polarity) -> ConjugationRequest {
        ConjugationRequest {
            tense,
            subject,
            polarity,
        }
    }

    /// Every possible request, ordered by tense, then subject, then polarity.
    pub fn all() -> impl Iterator<Item = ConjugationRequest> {
        iproduct!(Tense::iter(), Subject::iter(), Polarity::iter())
            .map(|(tense, subject, polarity)| ConjugationRequest::new(tense, subject, polarity))
    }

    /// Parses a request in the form `<tense>, <subject>[, <polarity>]`, such as `simple past, तिमी, negative`.
    pub fn parse(input: &str) -> Result<ConjugationRequest, RequestParseError> {
        parse_request(input)
    }

    /// The suffix forms matching this request end with.
    pub fn suffix(&self) -> &'static str {
        suffix_for(self.tense, self.subject, self.polarity)
    }
}

impl std::str::FromStr for ConjugationRequest {
    type Err = RequestParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConjugationRequest::parse(s)
    }
}

impl Display for ConjugationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.tense, self.subject, self.polarity)
    }
}

/// Conjugates verbs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConjugationEngine;

impl ConjugationEngine {
    pub fn new() -> ConjugationEngine {
        ConjugationEngine
    }

    /// Produces the written form of the provided verb for the provided request.
    pub fn conjugate(&self, verb: &Verb, request: &ConjugationRequest) -> String {
        let root = self.tensed_root(verb, request.tense);
        let suffix = request.suffix();
        debug!("Conjugating {verb} ({request}) with root {root:?} and suffix {suffix:?}");

        let adjusted_root = adjust_root(root, suffix);
        let conjugated = join(&adjusted_root, suffix);
        debug!("Conjugated {verb} ({request}) to {conjugated:?}");

        conjugated
    }

    /// Picks the root of the provided verb that forms in the provided tense are built on.
    pub fn tensed_root<'v>(&self, verb: &'v Verb, tense: Tense) -> &'v str {
        if tense.uses_past_root() {
            verb.past_root()
        } else {
            verb.root()
        }
    }

    /// Conjugates the provided verb for every possible request, in the order of `ConjugationRequest::all`.
    pub fn conjugation_table(&self, verb: &Verb) -> Vec<(ConjugationRequest, String)> {
        ConjugationRequest::all()
            .map(|request| (request, self.conjugate(verb, &request)))
            .collect()
    }
}

/// A verb along with what to conjugate it into. Displays as the conjugated form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Conjugation {
    pub verb: Verb,
    pub request: ConjugationRequest,
}

impl Conjugation {
    /// Creates a conjugation of the provided verb in the present tense, for "म", affirmative.
    pub fn new(verb: Verb) -> Conjugation {
        Conjugation {
            verb,
            request: ConjugationRequest::default(),
        }
    }

    pub fn with_tense(mut self, tense: Tense) -> Conjugation {
        self.request.tense = tense;
        self
    }

    pub fn with_subject(mut self, subject: Subject) -> Conjugation {
        self.request.subject = subject;
        self
    }

    pub fn with_polarity(mut self, polarity: Polarity) -> Conjugation {
        self.request.polarity = polarity;
        self
    }

    /// Produces the written form of this conjugation.
    pub fn conjugate(&self) -> String {
        ConjugationEngine::new().conjugate(&self.verb, &self.request)
    }
}

impl Display for Conjugation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.conjugate().fmt(f)
    }
}

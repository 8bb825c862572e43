use std::fmt::Display;

use log::debug;
use nom::{
    bytes::complete::{is_not, tag},
    combinator::{map, opt},
    sequence::{preceded, tuple},
    IResult,
};

use crate::{ConjugationRequest, Polarity, Subject, Tense};

const FIELD_SEPARATOR: &str = ",";

/// An error while parsing a conjugation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestParseError {
    /// The tense field didn't name a tense.
    UnknownTense(String),
    /// The subject field didn't name a subject.
    UnknownSubject(String),
    /// The polarity field didn't name a polarity.
    UnknownPolarity(String),
    /// The input wasn't made up of two or three comma-separated fields.
    Malformed(String),
}

impl Display for RequestParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestParseError::UnknownTense(tense) => write!(f, "unknown tense {tense:?}"),
            RequestParseError::UnknownSubject(subject) => write!(f, "unknown subject {subject:?}"),
            RequestParseError::UnknownPolarity(polarity) => {
                write!(f, "unknown polarity {polarity:?}")
            }
            RequestParseError::Malformed(input) => write!(
                f,
                "{input:?} is not in the form \"<tense>, <subject>[, <polarity>]\""
            ),
        }
    }
}

impl std::error::Error for RequestParseError {}

/// Parses a request in the form `<tense>, <subject>[, <polarity>]`. Polarity defaults to affirmative.
pub fn parse_request(input: &str) -> Result<ConjugationRequest, RequestParseError> {
    let malformed = || RequestParseError::Malformed(input.to_string());

    let (remaining, (tense, subject, polarity)) = fields(input).map_err(|_| malformed())?;
    if !remaining.is_empty() {
        debug!("Unparsed input left over in request {input:?}: {remaining:?}");
        return Err(malformed());
    }

    let tense = Tense::parse(tense).ok_or_else(|| RequestParseError::UnknownTense(tense.to_string()))?;
    let subject =
        Subject::parse(subject).ok_or_else(|| RequestParseError::UnknownSubject(subject.to_string()))?;
    let polarity = match polarity {
        Some(polarity) => Polarity::parse(polarity)
            .ok_or_else(|| RequestParseError::UnknownPolarity(polarity.to_string()))?,
        None => Polarity::default(),
    };

    Ok(ConjugationRequest::new(tense, subject, polarity))
}

fn fields(input: &str) -> IResult<&str, (&str, &str, Option<&str>)> {
    tuple((
        field,
        preceded(tag(FIELD_SEPARATOR), field),
        opt(preceded(tag(FIELD_SEPARATOR), field)),
    ))(input)
}

/// A single field, with surrounding whitespace removed.
fn field(input: &str) -> IResult<&str, &str> {
    map(is_not(FIELD_SEPARATOR), str::trim)(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fields() {
        let expected = ConjugationRequest::new(
            Tense::SimplePast,
            Subject::SecondFamiliarPlural,
            Polarity::Negative,
        );

        assert_eq!(Ok(expected), parse_request("simple past, तिमी, negative"));
        assert_eq!(Ok(expected), parse_request("simple past,तिमी,negative"));
        assert_eq!(Ok(expected), parse_request("  simple past ,  तिमी , negative  "));
    }

    #[test]
    fn polarity_defaults_to_affirmative() {
        let expected = ConjugationRequest::new(
            Tense::CompletedPast,
            Subject::FirstSingular,
            Polarity::Affirmative,
        );

        assert_eq!(Ok(expected), parse_request("completed past, म"));
    }

    #[test]
    fn unknown_tense() {
        assert_eq!(
            Err(RequestParseError::UnknownTense("past".to_string())),
            parse_request("past, म")
        );
    }

    #[test]
    fn unknown_subject() {
        assert_eq!(
            Err(RequestParseError::UnknownSubject("हामी".to_string())),
            parse_request("present, हामी, negative")
        );
    }

    #[test]
    fn unknown_polarity() {
        assert_eq!(
            Err(RequestParseError::UnknownPolarity("maybe".to_string())),
            parse_request("present, म, maybe")
        );
    }

    #[test]
    fn malformed() {
        for input in ["", "present", "present, म, negative, extra", ", म"] {
            assert_eq!(
                Err(RequestParseError::Malformed(input.to_string())),
                parse_request(input)
            );
        }
    }
}

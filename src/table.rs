use comfy_table::Cell;
use itertools::Itertools;

use conjugation::{ConjugationEngine, Polarity, Subject, Tense, Verb};

/// The conjugations of a verb for one tense and subject.
#[derive(Debug, PartialEq, Eq)]
pub struct ConjugationRow {
    pub tense: Tense,
    pub subject: Subject,
    pub affirmative: String,
    pub negative: String,
}

impl ConjugationRow {
    /// Transforms this row into table cells, in the same order as the table header.
    pub fn into_cells(self) -> Vec<Cell> {
        vec![
            Cell::new(self.tense),
            Cell::new(self.subject),
            Cell::new(self.affirmative),
            Cell::new(self.negative),
        ]
    }
}

/// Conjugates the provided verb into one row per tense and subject.
pub fn conjugation_rows(engine: &ConjugationEngine, verb: &Verb) -> Vec<ConjugationRow> {
    let conjugations_by_tense_and_subject = engine
        .conjugation_table(verb)
        .into_iter()
        .chunk_by(|(request, _)| (request.tense, request.subject));

    let rows = conjugations_by_tense_and_subject
        .into_iter()
        .map(|((tense, subject), conjugations)| {
            let mut affirmative = String::new();
            let mut negative = String::new();
            for (request, conjugated) in conjugations {
                match request.polarity {
                    Polarity::Affirmative => affirmative = conjugated,
                    Polarity::Negative => negative = conjugated,
                }
            }

            ConjugationRow {
                tense,
                subject,
                affirmative,
                negative,
            }
        })
        .collect();

    rows
}

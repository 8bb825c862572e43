use anyhow::Result;
use comfy_table::{Cell, ContentArrangement, Table};
use crossterm::style::{style, Stylize};
use itertools::Itertools;
use log::{debug, warn};
use std::{
    env,
    io::{stdout, Write},
};
use strum::IntoEnumIterator;
use voca_rs::Voca;

use conjugation::*;

mod table;
use table::*;

fn main() -> Result<()> {
    env_logger::init();

    let infinitives = infinitives_to_conjugate(env::args().skip(1));
    debug!("Conjugating infinitives: {infinitives:?}");

    let catalog = IrregularPastRootCatalog::new();
    let engine = ConjugationEngine::new();
    let mut stdout = stdout();

    for infinitive in infinitives {
        let verb = match Verb::from_catalog(infinitive.as_str(), &catalog) {
            Ok(verb) => verb,
            Err(e) => {
                warn!("Skipping {infinitive:?}: {e}");
                eprintln!("{}", e.to_string()._capitalize(false));
                continue;
            }
        };

        writeln!(stdout, "{}", verb_to_string(&engine, &verb))?;
    }

    stdout.flush()?;

    Ok(())
}

/// Determines which infinitives to conjugate from the provided arguments, falling back to the standard verbs if
/// there aren't any. Duplicates are dropped.
fn infinitives_to_conjugate(args: impl Iterator<Item = String>) -> Vec<String> {
    let infinitives = args.unique().collect_vec();
    if infinitives.is_empty() {
        return STANDARD_INFINITIVES
            .iter()
            .map(|infinitive| infinitive.to_string())
            .collect();
    }

    infinitives
}

/// Transforms the conjugations of the provided verb into a string for display.
fn verb_to_string(engine: &ConjugationEngine, verb: &Verb) -> String {
    let heading = style(verb.infinitive()).bold();
    let roots = style(format!("({})", roots_to_string(verb)))
        .dark_grey()
        .to_string();

    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            [Cell::new(""), Cell::new("")]
                .into_iter()
                .chain(Polarity::iter().map(Cell::new)),
        );

    for row in conjugation_rows(engine, verb) {
        table.add_row(row.into_cells());
    }

    format!("{heading} {roots}\n{table}\n")
}

/// Describes the roots of the provided verb, mentioning the past root only if it differs.
fn roots_to_string(verb: &Verb) -> String {
    if verb.root() == verb.past_root() {
        format!("root {}", verb.root())
    } else {
        format!("root {}, past root {}", verb.root(), verb.past_root())
    }
}

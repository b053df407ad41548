// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::{AppOptions, PageOptions, SourceKind},
    error::Result,
    index::AttributeIndex,
    page::{subheading, write_notice, write_page},
    progress::Progress,
    prompt::Asker,
    render,
    source::{AnimalSource, ApiSource, Fetched, JsonFileSource},
};

/// How a run ended. Only `Written`, `NotFound` and `FetchFailed` touch the
/// output file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Cards page written with `count` animals.
    Written { path: PathBuf, count: usize },
    /// The grouped source had nothing to hand over; output untouched.
    SourceUnavailable,
    /// Local data has no records to group.
    NothingToShow,
    /// The chosen group has no renderable records.
    NoMatches,
    /// The API answered but knows no such animal; notice page written.
    NotFound { path: PathBuf },
    /// The API could not be reached or answered badly; notice page written.
    FetchFailed { path: PathBuf },
}

/// Top-level runner: dispatch on source kind and run.
pub fn run(
    opts: &AppOptions,
    asker: &mut dyn Asker,
    progress: &mut dyn Progress,
) -> Result<Outcome> {
    let outcome = dispatch(opts, asker, progress);
    progress.finish();
    outcome
}

fn dispatch(
    opts: &AppOptions,
    asker: &mut dyn Asker,
    progress: &mut dyn Progress,
) -> Result<Outcome> {
    match opts.source_kind {
        SourceKind::Local => {
            let source = JsonFileSource::new(&opts.source.data_path);
            run_grouped(&source, &opts.page, asker, progress)
        }
        SourceKind::Remote => {
            let name = asker.ask_name()?;
            let source = ApiSource::new(&opts.source, &name)?;
            run_search(&source, &name, &opts.page, progress)
        }
    }
}

/* ---------------- Local: pick a group, list its members ---------------- */

pub fn run_grouped(
    source: &dyn AnimalSource,
    page: &PageOptions,
    asker: &mut dyn Asker,
    progress: &mut dyn Progress,
) -> Result<Outcome> {
    log::debug!("loading records from {}", source.describe());
    let key = page.group_key.as_str();

    let Some(animals) = source.fetch()?.into_records() else {
        progress.log(&format!("Could not load animals from {}.", source.describe()));
        return Ok(Outcome::SourceUnavailable);
    };

    let index = AttributeIndex::build(&animals, key);
    if index.is_empty() {
        progress.log(&format!("No {key} values found in data."));
        return Ok(Outcome::NothingToShow);
    }

    let label = asker.choose_label(&index)?;
    let selected = index.select(&animals, &label);
    let cards = render::cards(selected.iter().copied());
    if cards.count == 0 {
        progress.log(&format!("No animals found with {key} = '{label}'."));
        return Ok(Outcome::NoMatches);
    }

    let heading = subheading(&page.group_caption(), &label.to_string(), cards.count);
    let path = write_page(page, &cards.html, &heading)?;

    progress.log(&format!(
        "\nFound {} matching the selected criteria.", animals_phrase(cards.count)
    ));
    progress.log(&format!("Generated {} with {key} = '{label}'.", path.display()));
    Ok(Outcome::Written { path, count: cards.count })
}

/* ---------------- Remote: look one name up ---------------- */

pub fn run_search(
    source: &dyn AnimalSource,
    name: &str,
    page: &PageOptions,
    progress: &mut dyn Progress,
) -> Result<Outcome> {
    log::debug!("querying {}", source.describe());

    let animals = match source.fetch()? {
        Fetched::Records(animals) => animals,
        Fetched::NoData => {
            let msg = format!("Could not fetch data for '{name}'. Please try again later.");
            let path = write_notice(page, &msg)?;
            progress.log(&msg);
            return Ok(Outcome::FetchFailed { path });
        }
    };

    let cards = render::cards(&animals);
    if cards.count == 0 {
        let msg = format!("The animal '{name}' doesn't exist.");
        let path = write_notice(page, &msg)?;
        progress.log(&msg);
        return Ok(Outcome::NotFound { path });
    }

    let heading = subheading("Search", name, cards.count);
    let path = write_page(page, &cards.html, &heading)?;

    progress.log(&format!("Found {} matching '{name}'.", animals_phrase(cards.count)));
    progress.log(&format!("Generated {}.", path.display()));
    Ok(Outcome::Written { path, count: cards.count })
}

fn animals_phrase(count: usize) -> String {
    if count == 1 { s!("1 animal") } else { format!("{count} animals") }
}

// src/runner.rs
use std::path::PathBuf;

use crate::config::options::{AppOptions, Target};
use crate::error::ScrapeError;
use crate::file;
use crate::net::Fetch;
use crate::scrape;
use crate::store::DataSet;

/// Summary of what a run produced.
pub struct RunSummary {
    pub rows: usize,
    pub files_written: Vec<PathBuf>,
}

/// Top-level entry point: search the given URL (single book or browse
/// listing), save the results per volume, report the row count.
pub fn run(
    fetch: &dyn Fetch,
    opts: &AppOptions,
    url: &str,
) -> Result<RunSummary, ScrapeError> {
    let results: DataSet = match opts.search.target {
        Target::Book => scrape::search_book(fetch, url, &opts.search)?,
        Target::Browse => scrape::search_browse(fetch, url, &opts.search)?,
    };

    let files_written = file::save_results(&results, &opts.export)?;
    logf!(
        "{url}: {} result rows, {} file(s) written",
        results.rows.len(),
        files_written.len()
    );

    Ok(RunSummary { rows: results.rows.len(), files_written })
}

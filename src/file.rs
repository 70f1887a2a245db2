// src/file.rs

// Result saver: one delimited file per distinct Volume value.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::consts::{COL_WORD, FIELD_TITLE, FIELD_VOLUME};
use crate::config::options::ExportOptions;
use crate::csv;
use crate::error::ScrapeError;
use crate::sanitize::sanitize_filename;
use crate::store::DataSet;

/// Write the assembled results to the output directory, grouped by
/// volume. File names follow `{Titles}-{Volume}-{Words}.{ext}` with
/// distinct values joined by underscores.
///
/// An empty dataset writes nothing. Returns the paths written.
pub fn save_results(
    results: &DataSet,
    export: &ExportOptions,
) -> Result<Vec<PathBuf>, ScrapeError> {
    if results.is_empty() {
        return Ok(Vec::new());
    }

    let vol_col = results
        .column(FIELD_VOLUME)
        .ok_or(ScrapeError::MissingColumn(FIELD_VOLUME))?;
    let title_col = results
        .column(FIELD_TITLE)
        .ok_or(ScrapeError::MissingColumn(FIELD_TITLE))?;
    let word_col = results
        .column(COL_WORD)
        .ok_or(ScrapeError::MissingColumn(COL_WORD))?;

    ensure_directory(&export.out_dir)?;

    // Group rows by volume, first-seen order.
    let mut groups: Vec<(String, Vec<Vec<String>>)> = Vec::new();
    for row in &results.rows {
        let volume = row.get(vol_col).cloned().unwrap_or_default();
        match groups.iter_mut().find(|(v, _)| *v == volume) {
            Some((_, rows)) => rows.push(row.clone()),
            None => groups.push((volume, vec![row.clone()])),
        }
    }

    let sep = export.delim();
    let ext = export.format.ext();
    let headers = export
        .include_headers
        .then_some(results.headers.as_slice());

    let mut written = Vec::with_capacity(groups.len());
    for (volume, rows) in groups {
        let titles = distinct(&rows, title_col);
        let words = distinct(&rows, word_col);
        let stem = sanitize_filename(&format!(
            "{}-{}-{}",
            titles.join("_"),
            volume,
            words.join("_")
        ));
        let path = export.out_dir.join(join!(stem, ".", ext));

        let contents = csv::rows_to_string(headers, &rows, sep);
        fs::write(&path, contents)?;
        written.push(path);
    }

    Ok(written)
}

/// Distinct values of one column, first-seen order.
fn distinct(rows: &[Vec<String>], col: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for row in rows {
        if let Some(v) = row.get(col) {
            if !out.contains(v) {
                out.push(v.clone());
            }
        }
    }
    out
}

pub fn ensure_directory(dir: &Path) -> Result<(), ScrapeError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Io(std::io::Error::other(format!(
            "path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

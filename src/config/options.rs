// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub search: SearchOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            search: SearchOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

/// What the given URL points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// Landing page of a single book (first content page).
    Book,
    /// Browse/search results listing many books.
    Browse,
}

/// What to do when one book out of a browse listing fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Propagate the first error (default).
    Abort,
    /// Log the error and keep going with the remaining books.
    Skip,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    pub target: Target,
    pub words: Vec<String>,
    pub max_pages: usize,
    pub save_pages: bool,      // persist fetched pages to data_dir
    pub data_dir: PathBuf,     // page cache location
    pub on_error: FailurePolicy,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            target: Target::Book,
            words: Vec::new(),
            max_pages: DEFAULT_MAX_PAGES,
            save_pages: true,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            on_error: FailurePolicy::Abort,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Overrides the format's separator when set, e.g. to write
    /// underscore-separated fields into a .csv file.
    pub delimiter: Option<char>,
    pub out_dir: PathBuf,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            delimiter: None,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    pub fn delim(&self) -> char {
        self.delimiter.unwrap_or(self.format.delim())
    }
}

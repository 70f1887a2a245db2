// src/store.rs

// In-memory result table + flat-file page cache.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::consts::{COL_PAGE, COL_PARAGRAPH, COL_WORD};
use crate::sanitize::sanitize_filename;
use crate::scrape::book::Occurrence;
use crate::scrape::citation::Citation;

/// Tabular results: header row + data rows, all strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Append another dataset, aligning columns by header name.
    ///
    /// Different books can expose different citation fields (extra
    /// translator roles, missing ISBN). Unseen columns are added at the
    /// end; cells absent on either side stay empty.
    pub fn append(&mut self, other: DataSet) {
        if other.rows.is_empty() {
            return;
        }
        if self.headers.is_empty() && self.rows.is_empty() {
            *self = other;
            return;
        }

        let mut idx_map = Vec::with_capacity(other.headers.len());
        for h in &other.headers {
            let i = match self.column(h) {
                Some(i) => i,
                None => {
                    self.headers.push(h.clone());
                    for row in &mut self.rows {
                        row.push(s!());
                    }
                    self.headers.len() - 1
                }
            };
            idx_map.push(i);
        }

        for orow in other.rows {
            let mut row = vec![s!(); self.headers.len()];
            for (j, cell) in orow.into_iter().enumerate() {
                row[idx_map[j]] = cell;
            }
            self.rows.push(row);
        }
    }
}

/// Cross-join one citation record with N occurrences: every occurrence
/// row carries the full set of citation fields. Zero occurrences yield
/// an empty dataset, not a citation-only row.
pub fn assemble(citation: &Citation, hits: &[Occurrence]) -> DataSet {
    if hits.is_empty() {
        return DataSet::empty();
    }

    let mut headers: Vec<String> =
        citation.fields().iter().map(|(k, _)| k.clone()).collect();
    headers.push(s!(COL_PAGE));
    headers.push(s!(COL_WORD));
    headers.push(s!(COL_PARAGRAPH));

    let fixed: Vec<String> =
        citation.fields().iter().map(|(_, v)| v.clone()).collect();

    let rows = hits
        .iter()
        .map(|hit| {
            let mut row = fixed.clone();
            row.push(hit.page.to_string());
            row.push(hit.word.clone());
            row.push(hit.paragraph.clone());
            row
        })
        .collect();

    DataSet { headers, rows }
}

/// Flat-file cache of fetched content pages, keyed by volume + page
/// number. Reading is always on; writing is gated by `save`.
///
/// Layout: `{dir}/{Volume}_{page}.html`, raw body as fetched. No
/// locking; concurrent runs against one directory are not supported.
pub struct PageCache {
    dir: PathBuf,
    save: bool,
}

impl PageCache {
    pub fn new(dir: &Path, save: bool) -> Self {
        Self { dir: dir.to_path_buf(), save }
    }

    fn page_path(&self, volume: &str, page: i64) -> PathBuf {
        self.dir
            .join(format!("{}_{}.html", sanitize_filename(volume), page))
    }

    pub fn load(&self, volume: &str, page: i64) -> Option<String> {
        fs::read_to_string(self.page_path(volume, page)).ok()
    }

    pub fn store(&self, volume: &str, page: i64, body: &str) -> io::Result<()> {
        if !self.save {
            return Ok(());
        }
        fs::create_dir_all(&self.dir)?;
        fs::write(self.page_path(volume, page), body)
    }
}

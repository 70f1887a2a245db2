// src/scrape/book.rs

// Word search across a book's paginated content. The book URL embeds a
// numeric page segment right before an "xml" segment; pagination swaps
// successive page numbers into that slot and walks forward two at a
// time (the site numbers facing pages).

use scraper::Html;

use crate::config::consts::{FIELD_VOLUME, NOT_FOUND_TITLE, PAGE_STEP, PRINT_SUFFIX};
use crate::config::options::SearchOptions;
use crate::error::ScrapeError;
use crate::net::Fetch;
use crate::store::{self, DataSet, PageCache};

use super::citation::{Citation, extract_citation};
use super::{flat_text, sel};

/// One word hit: the page it was found on, the word, and the full
/// paragraph around it. A paragraph can yield several hits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Occurrence {
    pub page: i64,
    pub word: String,
    pub paragraph: String,
}

/// Book URL split around its page-number segment.
pub(crate) struct PageUrl {
    before: String,
    after: String,
    pub start: i64,
}

impl PageUrl {
    /// Locate the dot-separated segment starting with "xml"; the
    /// segment before it is the starting page number.
    pub fn parse(url: &str) -> Result<Self, ScrapeError> {
        let parts: Vec<&str> = url.split('.').collect();
        let idx = parts
            .iter()
            .position(|p| p.starts_with("xml"))
            .filter(|&i| i > 0)
            .ok_or_else(|| ScrapeError::MalformedBookUrl(s!(url)))?;
        let start: i64 = parts[idx - 1]
            .parse()
            .map_err(|_| ScrapeError::MalformedBookUrl(s!(url)))?;
        Ok(Self {
            before: parts[..idx - 1].join("."),
            after: parts[idx..].join("."),
            start,
        })
    }

    pub fn url_for(&self, page: i64) -> String {
        if self.before.is_empty() {
            format!("{page}.{}", self.after)
        } else {
            format!("{}.{page}.{}", self.before, self.after)
        }
    }
}

/// Full per-book search: citation record plus one result row per word
/// occurrence (empty dataset when nothing matched).
pub fn search_book(
    fetch: &dyn Fetch,
    url: &str,
    opts: &SearchOptions,
) -> Result<DataSet, ScrapeError> {
    let citation = extract_citation(fetch, url)?;
    let hits = collect_occurrences(fetch, url, &citation, opts)?;
    Ok(store::assemble(&citation, &hits))
}

/// Paginate through the book's print view collecting word hits.
///
/// Stops at `max_pages` pages, on the first failed fetch, or on the
/// site's "Page not found" page (taken as end of book).
pub fn collect_occurrences(
    fetch: &dyn Fetch,
    url: &str,
    citation: &Citation,
    opts: &SearchOptions,
) -> Result<Vec<Occurrence>, ScrapeError> {
    let volume = citation
        .get(FIELD_VOLUME)
        .ok_or(ScrapeError::MissingVolume)?;
    let pages = PageUrl::parse(url)?;
    let cache = PageCache::new(&opts.data_dir, opts.save_pages);

    let mut hits = Vec::new();
    let mut page = pages.start;
    let mut count = 0usize;

    while count < opts.max_pages {
        let body = match cache.load(volume, page) {
            Some(cached) => cached,
            None => {
                let page_url = join!(pages.url_for(page), PRINT_SUFFIX);
                let Some(fetched) = fetch.fetch(&page_url) else {
                    break;
                };
                cache.store(volume, page, &fetched)?;
                fetched
            }
        };

        let doc = Html::parse_document(&body);
        if page_not_found(&doc) {
            break;
        }
        scan_page(&doc, page, &opts.words, &mut hits);

        page += PAGE_STEP;
        count += 1;
    }

    Ok(hits)
}

fn page_not_found(doc: &Html) -> bool {
    let title = sel("h1#pagetitle.t-display-1");
    doc.select(&title).any(|el| flat_text(&el) == NOT_FOUND_TITLE)
}

/// Case-sensitive literal substring match over the flattened text of
/// each paragraph in the content sections. Not word-boundary aware: a
/// short word also matches inside longer words.
fn scan_page(doc: &Html, page: i64, words: &[String], hits: &mut Vec<Occurrence>) {
    let paragraphs = sel("section.div2 > p");
    for p in doc.select(&paragraphs) {
        let text = flat_text(&p).replace('\n', " ");
        for word in words {
            if text.contains(word.as_str()) {
                // Non-Latin search terms sit one page behind the print
                // numbering on this site.
                let page = if word.is_ascii() { page } else { page - 1 };
                hits.push(Occurrence {
                    page,
                    word: word.clone(),
                    paragraph: text.clone(),
                });
            }
        }
    }
}

// src/scrape/browse.rs

// Search every book listed on a browse/search-results page.

use scraper::Html;

use crate::config::consts::BASE_URL;
use crate::config::options::{FailurePolicy, SearchOptions};
use crate::error::ScrapeError;
use crate::net::Fetch;
use crate::store::DataSet;

use super::book::search_book;
use super::sel;

/// Run the word search over every book linked from the listing at
/// `url`, concatenating all result rows.
///
/// Per-book failures follow `opts.on_error`: abort the whole run, or
/// log and continue with the remaining books.
pub fn search_browse(
    fetch: &dyn Fetch,
    url: &str,
    opts: &SearchOptions,
) -> Result<DataSet, ScrapeError> {
    let body = fetch
        .fetch(url)
        .ok_or_else(|| ScrapeError::BadBrowseUrl(s!(url)))?;
    let doc = Html::parse_document(&body);
    let links = book_links(&doc);

    let mut results = DataSet::empty();
    for link in links {
        match search_book(fetch, &link, opts) {
            Ok(ds) => results.append(ds),
            Err(e) => match opts.on_error {
                FailurePolicy::Abort => return Err(e),
                FailurePolicy::Skip => {
                    loge!("skipping book {link}: {e}");
                }
            },
        }
    }
    Ok(results)
}

/// Book links are the anchors inside the search-content container that
/// wrap a workTitle span. Relative hrefs get the site origin prefixed.
fn book_links(doc: &Html) -> Vec<String> {
    let container = sel("div#searchContent.s-pt-2");
    let anchors = sel("a");
    let work_title = sel("span.workTitle");

    let mut links = Vec::new();
    for div in doc.select(&container) {
        for a in div.select(&anchors) {
            if a.select(&work_title).next().is_none() {
                continue;
            }
            let Some(href) = a.value().attr("href") else {
                continue;
            };
            let link = if href.starts_with("http") {
                s!(href)
            } else {
                join!(BASE_URL, href)
            };
            links.push(link);
        }
    }
    links
}

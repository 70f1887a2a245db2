// tests/search_e2e.rs
//
// End-to-end runs against a fixed mock book: landing page, print
// edition page, and two content pages served by a stub fetcher.

use std::collections::HashMap;
use std::fs;

use loeb_scrape::config::options::{AppOptions, FailurePolicy, Target};
use loeb_scrape::net::Fetch;
use loeb_scrape::runner;

const BOOK_URL: &str =
    "https://www.loebclassics.com/view/heracles/1926/pb_LCL014.0.xml?rskey=ab";
const PAGE0_URL: &str =
    "https://www.loebclassics.com/view/heracles/1926/pb_LCL014.0.xml?rskey=ab&print";
const PAGE2_URL: &str =
    "https://www.loebclassics.com/view/heracles/1926/pb_LCL014.2.xml?rskey=ab&print";
const PURCHASE_URL: &str = "https://www.hup.example/catalog/heracles";
const BROWSE_URL: &str = "https://www.loebclassics.com/browse?t1=author.euripides";

struct StubFetcher {
    pages: HashMap<String, String>,
}

impl StubFetcher {
    fn new() -> Self {
        Self { pages: HashMap::new() }
    }
    fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }
}

impl Fetch for StubFetcher {
    fn fetch(&self, url: &str) -> Option<String> {
        self.pages.get(url).cloned()
    }
}

fn landing_html() -> String {
    format!(
        r#"<html><body>
        <div class="doi"><span>DOI: 10.4159/example123</span></div>
        <span class="workTitle">Heracles</span>
        <div class="volumeLoc"><h2><a href="/v/lcl14">LCL014</a></h2></div>
        <a href="{PURCHASE_URL}">View cloth edition</a>
        </body></html>"#
    )
}

fn purchase_html() -> &'static str {
    r#"<html><body>
    <ul id="authorList">
        <li>Euripides</li>
        <li>Translated by W. H. D. Rouse</li>
    </ul>
    <div id="bookMeta">
        <p>ISBN 9780674990142</p>
        <p>Publication 15 June 1926</p>
    </div>
    </body></html>"#
}

fn content_page(paragraph: &str) -> String {
    format!(
        r#"<html><body><section class="div2"><p>{paragraph}</p></section></body></html>"#
    )
}

fn mock_book() -> StubFetcher {
    StubFetcher::new()
        .page(BOOK_URL, &landing_html())
        .page(PURCHASE_URL, purchase_html())
        .page(PAGE0_URL, &content_page("here lies a votive offering"))
        .page(PAGE2_URL, &content_page("nothing of interest"))
}

fn options(data_dir: &std::path::Path, out_dir: &std::path::Path) -> AppOptions {
    let mut opts = AppOptions::default();
    opts.search.words = vec!["votive".to_string()];
    opts.search.max_pages = 2;
    opts.search.save_pages = false;
    opts.search.data_dir = data_dir.to_path_buf();
    opts.export.out_dir = out_dir.to_path_buf();
    opts
}

#[test]
fn two_page_book_yields_single_occurrence_row() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();

    let summary = runner::run(&mock_book(), &options(data.path(), out.path()), BOOK_URL)
        .unwrap();
    assert_eq!(summary.rows, 1);
    assert_eq!(summary.files_written.len(), 1);

    let path = &summary.files_written[0];
    assert_eq!(
        path.file_name().unwrap().to_string_lossy(),
        "Heracles-LCL014-votive.csv"
    );

    let content = fs::read_to_string(path).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "DOI,Title,Volume,Author,Translated by,ISBN,Date,Page Number,Word,Paragraph"
    );
    assert_eq!(
        lines.next().unwrap(),
        "10.4159/example123,Heracles,LCL014,Euripides,W. H. D. Rouse,\
         9780674990142,15 June 1926,0,votive,here lies a votive offering"
    );
    assert!(lines.next().is_none());
}

#[test]
fn no_matches_writes_no_files_and_reports_zero() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();

    let mut opts = options(data.path(), out.path());
    opts.search.words = vec!["nonexistent".to_string()];

    let summary =
        runner::run(&mock_book(), &opts, BOOK_URL).unwrap();
    assert_eq!(summary.rows, 0);
    assert!(summary.files_written.is_empty());
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn browse_run_aggregates_books_from_listing() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();

    let listing = r#"<html><body><div class="s-pt-2" id="searchContent">
        <a href="/view/heracles/1926/pb_LCL014.0.xml?rskey=ab">
            <span class="workTitle">Heracles</span>
        </a>
        </div></body></html>"#;
    let fetch = mock_book().page(BROWSE_URL, listing);

    let mut opts = options(data.path(), out.path());
    opts.search.target = Target::Browse;

    let summary = runner::run(&fetch, &opts, BROWSE_URL).unwrap();
    assert_eq!(summary.rows, 1);
    assert_eq!(summary.files_written.len(), 1);
}

#[test]
fn browse_skip_policy_survives_broken_listing_entries() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();

    // first link points at a book that cannot be fetched
    let listing = r#"<html><body><div class="s-pt-2" id="searchContent">
        <a href="/view/missing/pb_LCL999.0.xml?r=1">
            <span class="workTitle">Missing Book</span>
        </a>
        <a href="/view/heracles/1926/pb_LCL014.0.xml?rskey=ab">
            <span class="workTitle">Heracles</span>
        </a>
        </div></body></html>"#;
    let fetch = mock_book().page(BROWSE_URL, listing);

    let mut opts = options(data.path(), out.path());
    opts.search.target = Target::Browse;

    // default policy aborts
    assert!(runner::run(&fetch, &opts, BROWSE_URL).is_err());

    opts.search.on_error = FailurePolicy::Skip;
    let summary = runner::run(&fetch, &opts, BROWSE_URL).unwrap();
    assert_eq!(summary.rows, 1);
}

// src/scrape/mod.rs
pub mod book;
pub mod browse;
pub mod citation;

pub use book::search_book;
pub use browse::search_browse;
pub use citation::extract_citation;

use scraper::{ElementRef, Selector};

/// Compile a static CSS selector. Only called with literals.
pub(crate) fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Concatenated text of all text nodes under an element.
pub(crate) fn flat_text(el: &ElementRef<'_>) -> String {
    el.text().collect()
}

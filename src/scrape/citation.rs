// src/scrape/citation.rs

// Bibliographic citation data for one book: the landing page carries
// DOI, work title and volume; the linked print ("cloth") edition page
// carries the author list, ISBN and publication date.

use scraper::{ElementRef, Html};

use crate::config::consts::{CLOTH_EDITION_LINK, FIELD_TITLE, FIELD_VOLUME};
use crate::error::ScrapeError;
use crate::net::Fetch;

use super::{flat_text, sel};

/// Citation fields in insertion order. Keys are free-form role/field
/// names ("DOI", "Translated by", …); setting an existing key
/// overwrites its value in place, keeping the output column order
/// stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Citation {
    fields: Vec<(String, String)>,
}

impl Citation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: String) {
        match self.fields.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => self.fields.push((s!(key), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }
}

/// Extract the citation record for the book at `url`.
///
/// Each required markup region gets its own error; any one missing
/// aborts extraction for this book.
pub fn extract_citation(fetch: &dyn Fetch, url: &str) -> Result<Citation, ScrapeError> {
    let body = fetch
        .fetch(url)
        .ok_or_else(|| ScrapeError::BadBookUrl(s!(url)))?;
    let doc = Html::parse_document(&body);

    let mut citation = Citation::new();
    read_doi(&doc, &mut citation)?;
    read_title(&doc, &mut citation)?;
    read_volume(&doc, &mut citation)?;

    let purchase_url =
        cloth_edition_url(&doc).ok_or(ScrapeError::MissingClothEdition)?;
    let purchase_body = fetch
        .fetch(&purchase_url)
        .ok_or_else(|| ScrapeError::BadPurchaseUrl(purchase_url.clone()))?;
    let purchase = Html::parse_document(&purchase_body);

    read_authors(&purchase, &mut citation)?;
    read_book_meta(&purchase, &mut citation)?;

    Ok(citation)
}

/// DOI appears as e.g. "DOI: 10.4159/example123"; the value is the
/// second whitespace token.
fn read_doi(doc: &Html, citation: &mut Citation) -> Result<(), ScrapeError> {
    let doi = sel("div.doi");
    let mut region_present = false;
    for el in doc.select(&doi) {
        region_present = true;
        let text = flat_text(&el);
        if text.contains("DOI") {
            if let Some(value) = text.split_whitespace().nth(1) {
                citation.set("DOI", s!(value));
            }
        }
    }
    if !region_present {
        return Err(ScrapeError::MissingDoi);
    }
    Ok(())
}

fn read_title(doc: &Html, citation: &mut Citation) -> Result<(), ScrapeError> {
    let title = sel("span.workTitle");
    let mut region_present = false;
    for el in doc.select(&title) {
        region_present = true;
        // last one wins
        citation.set(FIELD_TITLE, flat_text(&el));
    }
    if !region_present {
        return Err(ScrapeError::MissingTitle);
    }
    Ok(())
}

/// Volume sits in div.volumeLoc → h2 → a (direct children only).
fn read_volume(doc: &Html, citation: &mut Citation) -> Result<(), ScrapeError> {
    let volume_loc = sel("div.volumeLoc");
    let mut region_present = false;
    for el in doc.select(&volume_loc) {
        region_present = true;
        for h2 in child_elements(&el).filter(|e| e.value().name() == "h2") {
            for a in child_elements(&h2).filter(|e| e.value().name() == "a") {
                citation.set(FIELD_VOLUME, flat_text(&a));
            }
        }
    }
    if !region_present {
        return Err(ScrapeError::MissingVolume);
    }
    Ok(())
}

/// Href of the last anchor reading exactly "View cloth edition".
fn cloth_edition_url(doc: &Html) -> Option<String> {
    let anchors = sel("a");
    let mut found = None;
    for a in doc.select(&anchors) {
        if flat_text(&a) == CLOTH_EDITION_LINK {
            if let Some(href) = a.value().attr("href") {
                found = Some(s!(href));
            }
        }
    }
    found
}

/// Author list entries read like "Translated by W. H. D. Rouse": the
/// role key is everything up to and including "by", the name everything
/// after. Entries without a standalone "by" default to role "Author".
fn read_authors(doc: &Html, citation: &mut Citation) -> Result<(), ScrapeError> {
    let list = doc
        .select(&sel("#authorList"))
        .next()
        .ok_or(ScrapeError::MissingAuthorList)?;

    for child in child_elements(&list) {
        let text = flat_text(&child);
        if text.split_whitespace().any(|w| w == "by") {
            let mut role = s!();
            let mut name = s!();
            let mut past_by = false;
            for word in text.split_whitespace() {
                if past_by {
                    name.push_str(word);
                    name.push(' ');
                } else {
                    role.push_str(word);
                    role.push(' ');
                }
                if word == "by" {
                    past_by = true;
                }
            }
            citation.set(role.trim(), s!(name.trim()));
        } else {
            citation.set("Author", s!(text.trim()));
        }
    }
    Ok(())
}

/// Remaining metadata on the purchase page: ISBN (second token of the
/// ISBN line) and publication date (everything after "Publication").
fn read_book_meta(doc: &Html, citation: &mut Citation) -> Result<(), ScrapeError> {
    let meta = doc
        .select(&sel("#bookMeta"))
        .next()
        .ok_or(ScrapeError::MissingBookMeta)?;

    for child in child_elements(&meta) {
        let text = flat_text(&child);
        if text.contains("ISBN") {
            if let Some(value) = text.split_whitespace().nth(1) {
                citation.set("ISBN", s!(value));
            }
        } else if text.contains("Publication") {
            let date: Vec<&str> = text.split_whitespace().skip(1).collect();
            citation.set("Date", date.join(" "));
        }
    }
    Ok(())
}

/// Direct element children only, skipping interleaved text nodes.
fn child_elements<'a>(
    el: &ElementRef<'a>,
) -> impl Iterator<Item = ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap)
}

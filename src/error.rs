// src/error.rs
use thiserror::Error;

/// Everything that can go wrong for a single book or listing.
///
/// Transport failures never show up here: the fetcher converts them to
/// an absent body at its boundary. These are the domain errors — each
/// required markup region the site may stop serving gets its own variant
/// so a caller can tell which part of the page format drifted.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("bad book url (page could not be fetched): {0}")]
    BadBookUrl(String),

    #[error("could not find doi data")]
    MissingDoi,

    #[error("could not find title data")]
    MissingTitle,

    #[error("could not find volume data")]
    MissingVolume,

    #[error("could not find cloth edition url")]
    MissingClothEdition,

    #[error("bad purchase url (page could not be fetched): {0}")]
    BadPurchaseUrl(String),

    #[error("missing authors list")]
    MissingAuthorList,

    #[error("missing book data")]
    MissingBookMeta,

    #[error("bad browse url (listing could not be fetched): {0}")]
    BadBrowseUrl(String),

    #[error("no numeric page segment before an xml segment in url: {0}")]
    MalformedBookUrl(String),

    #[error("results are missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("http client: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

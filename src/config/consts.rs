// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.loebclassics.com";
pub const USER_AGENT: &str = concat!("loeb_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Site conventions
pub const PRINT_SUFFIX: &str = "&print"; // print view of a content page
pub const PAGE_STEP: i64 = 2; // facing pages: verso/recto
pub const NOT_FOUND_TITLE: &str = "Page not found";
pub const CLOTH_EDITION_LINK: &str = "View cloth edition";

// Local page cache
pub const DEFAULT_DATA_DIR: &str = "data";

// Export
pub const DEFAULT_OUT_DIR: &str = "results";
pub const DEFAULT_MAX_PAGES: usize = 999_999_999;

// Result columns appended to the citation fields
pub const COL_PAGE: &str = "Page Number";
pub const COL_WORD: &str = "Word";
pub const COL_PARAGRAPH: &str = "Paragraph";

// Citation fields the saver depends on
pub const FIELD_VOLUME: &str = "Volume";
pub const FIELD_TITLE: &str = "Title";

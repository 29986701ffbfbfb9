//! Remote listing: fetch the server's `/mods` page and turn it into file names.
//!
//! Parsing sits behind [`ListingParser`] so the table-scraping convention can be
//! replaced without touching reconciliation.

mod parse;

pub use parse::HtmlTableParser;

use crate::error::Result;
use crate::http::{self, HttpOptions};
use crate::url_model;

/// Turns a listing page body into remote file names, in page order.
pub trait ListingParser {
    fn parse(&self, body: &str) -> Vec<String>;
}

/// GETs `http://<host>/mods` and parses it with `parser`.
pub fn fetch_listing(host: &str, opts: &HttpOptions, parser: &dyn ListingParser) -> Result<Vec<String>> {
    let url = url_model::listing_url(host)?;
    let body = http::get_text(&url, opts)?;
    let entries = parser.parse(&body);
    tracing::info!(url = %url, entries = entries.len(), "parsed remote listing");
    Ok(entries)
}

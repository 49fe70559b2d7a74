//! Conversion pipeline: input resolution, filter, converter, normalizer.

use tracing::debug;

use crate::converter::Converter;
use crate::dom;
use crate::error::{Error, Result};
use crate::fetch::{FetchOptions, Fetcher};
use crate::filter;
use crate::markdown;
use crate::options::Options;

/// Message of the error returned when no input is given.
pub(crate) const MISSING_INPUT: &str = "Either html or url must be provided";

/// Convert an HTML document to normalized Markdown.
///
/// `fetch_url` is the address the document came from, used as the base URL
/// when `options.base_url` is not set.
#[must_use]
pub fn convert_document(html: &str, options: &Options, fetch_url: Option<&str>) -> String {
    let doc = dom::parse(html);
    filter::apply(&doc, options);
    let body = dom::body_tree(&doc);

    let base_url = options.effective_base_url(fetch_url);
    let raw = Converter::new(options, base_url).convert(&body);
    let markdown = markdown::normalize(&raw, options.strip_backslashes);

    debug!(
        html_len = html.len(),
        markdown_len = markdown.len(),
        "document converted"
    );
    markdown
}

/// Pick the HTML to convert: non-empty `html` wins, otherwise `url` is fetched.
///
/// Fails with [`Error::InvalidInput`] before any fetch when neither is given.
/// Fetch errors propagate unchanged.
pub fn resolve_source(
    html: Option<&str>,
    url: Option<&str>,
    fetcher: &dyn Fetcher,
    fetch_options: &FetchOptions,
) -> Result<String> {
    if let Some(html) = html.filter(|h| !h.is_empty()) {
        return Ok(html.to_string());
    }

    match url.map(str::trim).filter(|u| !u.is_empty()) {
        Some(url) => fetcher.fetch(url, fetch_options),
        None => Err(Error::InvalidInput(MISSING_INPUT.to_string())),
    }
}

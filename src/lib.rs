//! # markify
//!
//! Convert HTML documents into clean Markdown, suitable for reading or for
//! feeding to language models.
//!
//! Headings, paragraphs, lists, tables, links, images, emphasis, code and
//! quotes are kept; scripts, styles and (optionally) hidden elements, page
//! chrome and caller-selected elements are dropped.
//!
//! ## Quick Start
//!
//! ```rust
//! use markify::convert;
//!
//! let html = r#"<html><body><h1>Hello</h1><p>Some <b>bold</b> text.</p></body></html>"#;
//! assert_eq!(convert(html), "# Hello\n\nSome **bold** text.");
//! ```
//!
//! ## Fetching
//!
//! With the default `http` feature, [`generate`] fetches a URL when no HTML is
//! given. Relative links and images are resolved against that URL unless
//! [`Options::base_url`] says otherwise.
//!
//! ```rust,no_run
//! use markify::{generate, GenerateRequest};
//!
//! let markdown = generate(&GenerateRequest::from_url("https://example.com/"))?;
//! println!("{markdown}");
//! # Ok::<(), markify::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! 1. [`filter`] removes unwanted elements from the parsed document
//! 2. [`dom::body_tree`] copies the body into an owned [`node::Element`] tree
//! 3. [`converter::Converter`] renders it, switching syntax inside table cells
//! 4. [`markdown::normalize`] collapses blank lines and spaces

mod error;
mod generator;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Owned element tree walked by the converter.
pub mod node;

/// Closed set of element kinds the converter distinguishes.
pub mod tags;

/// Visibility and removal filter.
pub mod filter;

/// Element dispatcher, children aggregator and the image/link/list/table builders.
pub mod converter;

/// Markdown normalization and table formatting.
pub mod markdown;

/// URL validation and resolution.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Fetch collaborator.
pub mod fetch;

// Public API - re-exports
pub use converter::Context;
pub use error::{Error, Result};
pub use fetch::{FetchOptions, Fetcher};
#[cfg(feature = "http")]
pub use fetch::HttpFetcher;
pub use generator::convert_document;
pub use options::Options;
pub use result::MarkifyResult;

/// Input of a [`generate`] call.
///
/// Non-empty `html` is converted directly; otherwise `url` is fetched. The
/// URL also serves as the base for relative links when `options.base_url`
/// is unset.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    /// Raw HTML to convert.
    pub html: Option<String>,
    /// Address to fetch when `html` is absent, and default base URL.
    pub url: Option<String>,
    /// Conversion options.
    pub options: Options,
    /// Request options for the fetch.
    pub fetch_options: FetchOptions,
}

impl GenerateRequest {
    /// Request converting the given HTML.
    #[must_use]
    pub fn from_html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Self::default()
        }
    }

    /// Request fetching and converting the given URL.
    #[must_use]
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Replace the conversion options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }
}

/// Convert an HTML string to Markdown using default options.
///
/// ```rust
/// assert_eq!(markify::convert("<ul><li>One</li><li>Two</li></ul>"), "* One\n* Two");
/// ```
#[must_use]
pub fn convert(html: &str) -> String {
    convert_with_options(html, &Options::default())
}

/// Convert an HTML string to Markdown with custom options.
///
/// ```rust
/// use markify::{convert_with_options, Options};
///
/// let options = Options {
///     ignore_selectors: vec![".ad".to_string()],
///     ..Options::default()
/// };
/// let html = r#"<p>Story</p><div class="ad">Buy now</div>"#;
/// assert_eq!(convert_with_options(html, &options), "Story");
/// ```
#[must_use]
pub fn convert_with_options(html: &str, options: &Options) -> String {
    convert_document(html, options, None)
}

/// Convert HTML bytes to Markdown, decoding them by their declared charset.
///
/// The encoding is taken from `<meta charset>` or `http-equiv` declarations
/// and defaults to UTF-8. Invalid sequences become U+FFFD.
///
/// ```rust
/// use markify::{generate_bytes, Options};
///
/// let html = b"<meta charset=\"ISO-8859-1\"><p>Caf\xE9</p>";
/// assert_eq!(generate_bytes(html, &Options::default()), "Café");
/// ```
#[must_use]
pub fn generate_bytes(html: &[u8], options: &Options) -> String {
    let html = encoding::transcode_to_utf8(html);
    convert_document(&html, options, None)
}

/// Generate Markdown for a request, fetching over HTTP when needed.
#[cfg(feature = "http")]
pub fn generate(request: &GenerateRequest) -> Result<String> {
    generate_with_fetcher(request, &HttpFetcher::new())
}

/// Generate Markdown for a request using a custom [`Fetcher`].
///
/// ```rust
/// use markify::{generate_with_fetcher, FetchOptions, GenerateRequest, Result};
///
/// let fetcher = |_url: &str, _opts: &FetchOptions| -> Result<String> {
///     Ok("<h2>Fetched</h2>".to_string())
/// };
/// let markdown = generate_with_fetcher(&GenerateRequest::from_url("https://ex.com"), &fetcher)?;
/// assert_eq!(markdown, "## Fetched");
/// # Ok::<(), markify::Error>(())
/// ```
pub fn generate_with_fetcher(request: &GenerateRequest, fetcher: &dyn Fetcher) -> Result<String> {
    markify_with_fetcher(request, fetcher).map(|result| result.markdown)
}

/// Like [`generate`], returning the Markdown with its source HTML and a timestamp.
#[cfg(feature = "http")]
pub fn markify(request: &GenerateRequest) -> Result<MarkifyResult> {
    markify_with_fetcher(request, &HttpFetcher::new())
}

/// Like [`generate_with_fetcher`], returning a [`MarkifyResult`].
pub fn markify_with_fetcher(
    request: &GenerateRequest,
    fetcher: &dyn Fetcher,
) -> Result<MarkifyResult> {
    let url = request.url.as_deref().map(str::trim).filter(|u| !u.is_empty());
    let html = generator::resolve_source(
        request.html.as_deref(),
        url,
        fetcher,
        &request.fetch_options,
    )?;

    let markdown = convert_document(&html, &request.options, url);
    Ok(MarkifyResult::new(markdown, html))
}

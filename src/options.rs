//! Configuration options for HTML to Markdown conversion.
//!
//! The `Options` struct controls what the removal filter strips and a few
//! tunable thresholds of the converter.

/// Configuration options for conversion.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use markify::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     ignore_hidden_elements: true,
///     ignore_selectors: vec![".cookie-banner".to_string()],
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Base URL used to resolve root-relative and fragment-only links and images.
    ///
    /// When `None` and the document was fetched from a URL, that URL is used.
    ///
    /// Default: `None`
    pub base_url: Option<String>,

    /// CSS selectors whose matching elements are removed before conversion.
    ///
    /// Selectors that fail to parse match nothing.
    ///
    /// Default: empty
    pub ignore_selectors: Vec<String>,

    /// Remove elements hidden through inline styles, `aria-hidden="true"`,
    /// the `hidden` attribute, and "skip to content" links.
    ///
    /// Default: `false`
    pub ignore_hidden_elements: bool,

    /// Remove page chrome: `header`, `footer`, `nav`, `iframe`, `svg`, and
    /// elements with `role` `contentinfo`, `alert` or `dialog`.
    ///
    /// Default: `false`
    pub ignore_page_chrome: bool,

    /// Fragments whose trimmed length is below this are treated as noise,
    /// unless they contain an alphanumeric character.
    ///
    /// Default: `3`
    pub min_fragment_len: usize,

    /// Maximum number of data rows rendered per table (the header row is extra).
    ///
    /// Default: `10`
    pub max_table_rows: usize,

    /// Terminate prose-like text nodes with a period when they lack
    /// sentence-ending punctuation.
    ///
    /// Default: `false`
    pub terminate_sentences: bool,

    /// Remove every backslash from the final output.
    ///
    /// This undoes the pipe escaping inside tables, so it is opt-in.
    ///
    /// Default: `false`
    pub strip_backslashes: bool,

    /// Close merged link+image blocks with a horizontal rule.
    ///
    /// Default: `true`
    pub link_image_separator: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: None,
            ignore_selectors: Vec::new(),
            ignore_hidden_elements: false,
            ignore_page_chrome: false,
            min_fragment_len: 3,
            max_table_rows: 10,
            terminate_sentences: false,
            strip_backslashes: false,
            link_image_separator: true,
        }
    }
}

impl Options {
    /// Base URL to use for resolution, falling back to the fetch URL.
    #[must_use]
    pub fn effective_base_url<'a>(&'a self, fetch_url: Option<&'a str>) -> Option<&'a str> {
        self.base_url
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or(fetch_url)
    }
}

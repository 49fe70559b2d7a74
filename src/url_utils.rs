//! URL Utility Functions
//!
//! Validation of fetch targets and resolution of `href`/`src` values found in
//! the document against an optional base URL. Resolution never fails: when
//! the base is missing or malformed the original value is kept.

use url::Url;

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    // Must start with http:// or https://
    let lower = s.to_ascii_lowercase();
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => (true, Some(url)),
        _ => (false, None),
    }
}

/// Origin (`scheme://host[:port]`) of an absolute URL.
///
/// # Examples
/// ```
/// use markify::url_utils::origin;
///
/// assert_eq!(origin("https://ex.com/p?q=1").as_deref(), Some("https://ex.com"));
/// assert_eq!(origin("http://ex.com:8080/a").as_deref(), Some("http://ex.com:8080"));
/// assert_eq!(origin("/relative"), None);
/// ```
#[must_use]
pub fn origin(url_str: &str) -> Option<String> {
    let url = Url::parse(url_str.trim()).ok()?;
    let origin = url.origin();
    if origin.is_tuple() {
        Some(origin.ascii_serialization())
    } else {
        None
    }
}

/// Resolve a link target found in an `href`.
///
/// - `#frag` is appended to the base URL (minus any fragment it already has)
/// - `//host/path` is upgraded to `https:`
/// - `/path` is prefixed with the base URL's origin
/// - anything else is returned as-is
#[must_use]
pub fn resolve_href(href: &str, base: Option<&str>) -> String {
    let href = href.trim();

    if let Some(base) = base.map(str::trim).filter(|b| !b.is_empty()) {
        if href.starts_with('#') {
            let without_fragment = base.split('#').next().unwrap_or(base);
            return format!("{without_fragment}{href}");
        }
    }

    resolve_resource(href, base)
}

/// Resolve a resource location such as an image `src`.
///
/// Protocol-relative values become `https:`; root-relative ones are prefixed
/// with the base origin when a usable base exists.
#[must_use]
pub fn resolve_resource(src: &str, base: Option<&str>) -> String {
    let src = src.trim();

    if src.starts_with("//") {
        return format!("https:{src}");
    }

    if src.starts_with('/') {
        if let Some(origin) = base.and_then(origin) {
            return format!("{origin}{src}");
        }
    }

    src.to_string()
}

/// Extract filename from a URL, stripping query parameters and fragments.
///
/// # Examples
/// ```
/// use markify::url_utils::extract_filename;
///
/// assert_eq!(extract_filename("https://example.com/images/photo.jpg"), "photo.jpg");
/// assert_eq!(extract_filename("https://example.com/images/photo.jpg?v=123"), "photo.jpg");
/// assert_eq!(extract_filename("/path/to/image.png#section"), "image.png");
/// assert_eq!(extract_filename("https://example.com/"), "");
/// ```
#[must_use]
pub fn extract_filename(url: &str) -> String {
    let url = url.trim();

    if url.is_empty() {
        return String::new();
    }

    let without_query = url.split('?').next().unwrap_or(url);
    let without_fragment = without_query.split('#').next().unwrap_or(without_query);

    let filename = without_fragment.rsplit('/').next().unwrap_or("").trim();

    if filename.is_empty() || filename == "." || filename == ".." {
        return String::new();
    }

    filename.to_string()
}

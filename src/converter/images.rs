//! Image resolver.

use tracing::trace;

use super::collapse;
use crate::node::Element;
use crate::url_utils::{extract_filename, resolve_resource};

/// Render an `img` element as `![alt](src)`.
///
/// Returns `None` for images without a usable source: a missing or blank
/// `src`, inline `data:` URIs and SVG files. Protocol-relative sources are
/// upgraded to `https:` and root-relative ones resolved against the origin
/// of `base_url`. The alt text falls back to `title`, then to `"Image"`.
#[must_use]
pub fn resolve_image(el: &Element, base_url: Option<&str>) -> Option<String> {
    let Some(src) = el.attr_trimmed("src") else {
        trace!("image without src skipped");
        return None;
    };

    if src
        .get(..5)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"))
    {
        trace!("inline data image skipped");
        return None;
    }

    if extract_filename(src).to_ascii_lowercase().ends_with(".svg") {
        trace!(src, "svg image skipped");
        return None;
    }

    let src = resolve_resource(src, base_url);
    let alt = el
        .attr_trimmed("alt")
        .or_else(|| el.attr_trimmed("title"))
        .map_or_else(|| "Image".to_string(), collapse);

    Some(format!("![{alt}]({src})"))
}

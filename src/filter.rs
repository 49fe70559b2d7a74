//! Visibility and removal filter.
//!
//! Runs once over the parsed document before conversion and removes, in
//! place, every element that must not contribute to the Markdown output.

use dom_query::Selection;
use tracing::debug;

use crate::dom::{self, Document};
use crate::options::Options;
use crate::patterns::{HIDDEN_STYLE, SKIP_LINK_TEXT};

/// Elements that never carry readable content.
const ALWAYS_REMOVED: &str = "script, style, noscript, template";

/// Page chrome stripped when `ignore_page_chrome` is set.
const PAGE_CHROME: &str = "header, footer, nav, iframe, svg, \
    [role=\"contentinfo\"], [role=\"alert\"], [role=\"dialog\"]";

/// Remove unwanted elements from `doc` according to `opts`.
///
/// Returns the number of elements removed (nested matches included).
pub fn apply(doc: &Document, opts: &Options) -> usize {
    let mut removed = dom::remove_all(&doc.select(ALWAYS_REMOVED));

    if opts.ignore_page_chrome {
        removed += dom::remove_all(&doc.select(PAGE_CHROME));
    }

    if opts.ignore_hidden_elements {
        removed += remove_hidden(doc);
    }

    for selector in &opts.ignore_selectors {
        let selector = selector.trim();
        if selector.is_empty() {
            continue;
        }
        match dom::try_query_all(doc, selector) {
            Some(matched) => removed += dom::remove_all(&matched),
            None => debug!(selector, "ignore selector matched nothing or failed to parse"),
        }
    }

    debug!(removed, "removal filter finished");
    removed
}

/// Remove elements hidden via inline style, `aria-hidden`, `hidden`, plus skip links.
fn remove_hidden(doc: &Document) -> usize {
    let mut hidden: Vec<Selection> = Vec::new();

    for node in doc.select("[style]").nodes() {
        let sel = Selection::from(*node);
        if sel.attr("style").is_some_and(|style| HIDDEN_STYLE.is_match(&style)) {
            hidden.push(sel);
        }
    }

    for node in doc.select("[aria-hidden]").nodes() {
        let sel = Selection::from(*node);
        if sel
            .attr("aria-hidden")
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
        {
            hidden.push(sel);
        }
    }

    for node in doc.select("[hidden]").nodes() {
        hidden.push(Selection::from(*node));
    }

    for node in doc.select("a").nodes() {
        let sel = Selection::from(*node);
        if is_skip_link(&sel) {
            hidden.push(sel);
        }
    }

    let count = hidden.len();
    for sel in hidden {
        sel.remove();
    }
    count
}

/// Accessibility "skip to content" anchors pointing at an in-page target.
fn is_skip_link(sel: &Selection) -> bool {
    let in_page = sel
        .attr("href")
        .is_some_and(|href| href.trim_start().starts_with('#'));
    if !in_page {
        return false;
    }

    let class = sel.attr("class").map(|c| c.to_ascii_lowercase()).unwrap_or_default();
    class.contains("skip-link") || class.contains("skip-to") || SKIP_LINK_TEXT.is_match(&sel.text())
}

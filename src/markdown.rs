//! Markdown post-processing utilities.
//!
//! The converter produces Markdown with generous separators; [`normalize`]
//! tidies that into the final document. Fenced code blocks pass through it
//! verbatim. The table helpers format individual cells and rows.

use crate::patterns::{EXCESS_SPACES, UNBRACKETED_PIPE, WHITESPACE_RUN};

/// Normalize converter output into the final Markdown document.
///
/// Outside fenced code blocks:
/// - runs of blank lines collapse to a single blank line
/// - three or more spaces after a non-space character collapse to one
/// - whitespace-only lines become empty
/// - every backslash is dropped when `strip_backslashes` is set
///
/// The result is trimmed.
///
/// # Examples
///
/// ```
/// use markify::markdown::normalize;
///
/// assert_eq!(normalize("a\n\n\n\nb   c", false), "a\n\nb c");
/// assert_eq!(normalize("\n\n```\nx    =   1\n\n\n\ny\n```\n\n", false), "```\nx    =   1\n\n\n\ny\n```");
/// ```
#[must_use]
pub fn normalize(text: &str, strip_backslashes: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut open_fence: Option<usize> = None;

    for line in text.split_inclusive('\n') {
        let marker = fence_marker(line);

        if let Some(open_len) = open_fence {
            out.push_str(line);
            if marker.is_some_and(|(len, bare)| bare && len >= open_len) {
                open_fence = None;
            }
            continue;
        }

        if let Some((len, _)) = marker {
            open_fence = Some(len);
            out.push_str(line);
            continue;
        }

        if line.trim().is_empty() {
            if !out.ends_with("\n\n") {
                out.push('\n');
            }
            continue;
        }

        let mut cleaned = EXCESS_SPACES.replace_all(line, "$1 ").into_owned();
        if strip_backslashes {
            cleaned.retain(|c| c != '\\');
        }
        out.push_str(&cleaned);
    }

    out.trim().to_string()
}

/// Backtick fence at the start of a line: `(fence length, nothing but the fence)`.
fn fence_marker(line: &str) -> Option<(usize, bool)> {
    let trimmed = line.trim_start_matches(' ');
    let len = trimmed.chars().take_while(|&c| c == '`').count();
    if len < 3 {
        return None;
    }
    let rest = &trimmed[len..];
    Some((len, rest.trim().is_empty()))
}

/// Clean a rendered table cell: collapse whitespace, escape pipes that are
/// not inside link text brackets, trim.
#[must_use]
pub fn clean_cell(content: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(content, " ");
    UNBRACKETED_PIPE
        .replace_all(&collapsed, r"\|")
        .trim()
        .to_string()
}

/// Format one pipe-table row.
#[must_use]
pub fn table_row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}

/// Header separator row for a table `width` columns wide.
#[must_use]
pub fn separator_row(width: usize) -> String {
    table_row(&vec!["---".to_string(); width])
}

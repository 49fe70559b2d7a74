//! Compiled regex patterns used by the filter, converter and normalizer.
//!
//! All patterns are compiled once on first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Removal Filter
// =============================================================================

/// Inline style declaring the element invisible.
pub static HIDDEN_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|;)\s*(?:display\s*:\s*none|visibility\s*:\s*hidden)\b")
        .expect("HIDDEN_STYLE regex")
});

/// Link text of accessibility skip links ("Skip to main content", "Skip navigation").
pub static SKIP_LINK_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*skip\s+(?:to\b|navigation\b|nav\b|over\b)").expect("SKIP_LINK_TEXT regex")
});

// =============================================================================
// Text Rendering
// =============================================================================

/// Any whitespace run.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// Text already ending a sentence, allowing trailing closing quotes/brackets.
pub static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[.!?…]["'”’)\]]*$"#).expect("SENTENCE_END regex")
});

/// `language-rust` / `lang-rust` class tokens on code blocks.
pub static LANGUAGE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:language|lang)-([A-Za-z0-9_+#.-]+)$").expect("LANGUAGE_CLASS regex")
});

/// A pipe that is not inside the bracket part of a link (`[a|b](...)`).
pub static UNBRACKETED_PIPE: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    fancy_regex::Regex::new(r"\|(?![^\[]*\])").expect("UNBRACKETED_PIPE regex")
});

// =============================================================================
// Normalization
// =============================================================================

/// Three or more spaces following a non-space character (leading indentation is kept).
pub static EXCESS_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\S) {3,}").expect("EXCESS_SPACES regex"));

//! Element dispatcher and children aggregator.
//!
//! [`Converter`] walks the owned element tree depth-first. Every element is
//! classified by [`Tag`] and rendered by an exhaustive match; the syntax
//! emitted depends on the [`Context`] passed down the recursion. Images,
//! links, lists and tables have dedicated builders in the submodules.

mod images;
mod links;
mod lists;
mod tables;

pub use images::resolve_image;
pub use tables::TableMatrix;

use crate::node::{Element, Node};
use crate::options::Options;
use crate::patterns::{LANGUAGE_CLASS, SENTENCE_END, WHITESPACE_RUN};
use crate::tags::Tag;
use crate::url_utils::resolve_href;

/// Rendering mode.
///
/// Inside table cells, block syntax would break the pipe-table row, so a
/// restricted inline-HTML subset (`<br>`, `<b>`, `<i>`, `<li>`) is used instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Context {
    /// Whole-document Markdown.
    #[default]
    Default,
    /// Content of a `th`/`td` cell.
    TableCell,
}

/// Characters that attach to the preceding fragment without a space.
const CLOSING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')'];

/// Converts an element tree into unnormalized Markdown.
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    options: &'a Options,
    base_url: Option<&'a str>,
}

impl<'a> Converter<'a> {
    /// Create a converter resolving relative URLs against `base_url`.
    #[must_use]
    pub fn new(options: &'a Options, base_url: Option<&'a str>) -> Self {
        Self {
            options,
            base_url: base_url.map(str::trim).filter(|b| !b.is_empty()),
        }
    }

    /// Render the children of `root` (normally `<body>`) in [`Context::Default`].
    #[must_use]
    pub fn convert(&self, root: &Element) -> String {
        self.render_children(root, Context::Default)
            .trim_matches(' ')
            .to_string()
    }

    /// Render a single node.
    #[must_use]
    pub fn render(&self, node: &Node, ctx: Context) -> String {
        match node {
            Node::Text(content) => self.render_text(content),
            Node::Element(el) => self.render_element(el, ctx),
        }
    }

    fn render_element(&self, el: &Element, ctx: Context) -> String {
        match el.tag {
            Tag::Heading(level) => self.render_heading(el, level, ctx),
            Tag::Paragraph => self.render_paragraph(el, ctx),
            Tag::Anchor => self
                .render_link(el, ctx)
                .map(|link| keep_edges(&el.text(), link))
                .unwrap_or_default(),
            Tag::Image => resolve_image(el, self.base_url).unwrap_or_default(),
            Tag::OrderedList | Tag::UnorderedList => self.render_list(el, ctx),
            Tag::Table => match ctx {
                Context::Default => self.render_table(el),
                // Nested tables are flattened into the enclosing cell.
                Context::TableCell => self.render_children(el, ctx),
            },
            Tag::Bold | Tag::Label => self.wrap_inline(el, ctx, "**", "b"),
            Tag::Italic => self.wrap_inline(el, ctx, "*", "i"),
            Tag::Code => keep_edges(&el.text(), render_inline_code(el)),
            Tag::Pre => render_pre(el, ctx),
            Tag::Blockquote => self.render_blockquote(el, ctx),
            Tag::LineBreak => match ctx {
                Context::Default => "\n".to_string(),
                Context::TableCell => "<br>".to_string(),
            },
            Tag::HorizontalRule => match ctx {
                Context::Default => "\n\n---\n\n".to_string(),
                Context::TableCell => "<br>---<br>".to_string(),
            },
            Tag::ListItem | Tag::TableRow | Tag::TableCell | Tag::Other => {
                self.render_children(el, ctx)
            }
        }
    }

    /// Concatenate the rendered children of `el`, dropping insignificant fragments.
    ///
    /// Fragments are separated by a single space only where the source had
    /// whitespace (or a dropped noise fragment) between them, or where a
    /// block element starts or ends. A space never precedes closing
    /// punctuation. Whitespace at the edges of the children is kept as a
    /// single space so inline parents can place their markers correctly;
    /// block parents trim it.
    #[must_use]
    pub fn render_children(&self, el: &Element, ctx: Context) -> String {
        let mut out = String::new();
        let mut leading_space = false;
        let mut space_pending = false;
        let mut block_pending = false;

        for child in &el.children {
            let block = child.as_element().is_some_and(Element::is_block);
            let fragment = self.render(child, ctx);
            let core = fragment.trim_matches(' ');

            if !self.is_significant(core) {
                if block {
                    block_pending = true;
                } else if !fragment.is_empty() {
                    space_pending = true;
                }
                continue;
            }

            let separated = space_pending || block_pending || block || fragment.starts_with(' ');
            if out.is_empty() {
                leading_space = space_pending || fragment.starts_with(' ');
            } else if separated && needs_space(&out, core) {
                out.push(' ');
            }
            out.push_str(core);

            space_pending = fragment.ends_with(' ');
            block_pending = block;
        }

        if out.is_empty() {
            return if space_pending { " ".to_string() } else { String::new() };
        }
        if leading_space {
            out.insert(0, ' ');
        }
        if space_pending {
            out.push(' ');
        }
        out
    }

    /// Whether a fragment carries content worth keeping.
    fn is_significant(&self, fragment: &str) -> bool {
        if fragment == "\n" {
            return true;
        }
        let trimmed = fragment.trim();
        if trimmed.is_empty() {
            return false;
        }
        trimmed.chars().count() >= self.options.min_fragment_len
            || trimmed.chars().any(char::is_alphanumeric)
            || trimmed.starts_with(CLOSING_PUNCTUATION)
            || trimmed.ends_with('(')
    }

    /// Collapse whitespace runs, keeping a single space at either edge.
    fn render_text(&self, content: &str) -> String {
        let text = WHITESPACE_RUN.replace_all(content, " ");
        let core = text.trim();
        if self.options.terminate_sentences
            && core.chars().count() > self.options.min_fragment_len
            && !SENTENCE_END.is_match(core)
        {
            return keep_edges(&text, format!("{core}."));
        }
        text.into_owned()
    }

    fn render_heading(&self, el: &Element, level: u8, ctx: Context) -> String {
        let mut title = collapse(&el.text());
        if title.is_empty() {
            return String::new();
        }

        let href = el
            .find_tag(Tag::Anchor)
            .and_then(|a| a.attr_trimmed("href"))
            .filter(|href| !is_javascript(href));
        if let Some(href) = href {
            title = format!("[{title}]({})", resolve_href(href, self.base_url));
        }

        match ctx {
            Context::TableCell => format!("<b>{title}</b>"),
            Context::Default => {
                let breaks = if level <= 2 { "\n\n" } else { "\n" };
                let hashes = "#".repeat(usize::from(level));
                format!("{breaks}{hashes} {title}\n")
            }
        }
    }

    fn render_paragraph(&self, el: &Element, ctx: Context) -> String {
        let content = self.render_children(el, ctx);
        let content = content.trim();
        if content.is_empty() {
            return String::new();
        }
        match ctx {
            Context::Default => format!("\n\n{content}\n\n"),
            Context::TableCell => format!("<br>{content}<br>"),
        }
    }

    fn wrap_inline(&self, el: &Element, ctx: Context, marker: &str, html_tag: &str) -> String {
        let rendered = self.render_children(el, ctx);
        let content = rendered.trim();
        if content.is_empty() {
            return String::new();
        }
        let wrapped = match ctx {
            Context::Default => format!("{marker}{content}{marker}"),
            Context::TableCell => format!("<{html_tag}>{content}</{html_tag}>"),
        };
        keep_edges(&rendered, wrapped)
    }

    fn render_blockquote(&self, el: &Element, ctx: Context) -> String {
        let content = self.render_children(el, ctx);
        let content = content.trim();
        if content.is_empty() {
            return String::new();
        }
        if ctx == Context::TableCell {
            return content.to_string();
        }

        let mut quoted: Vec<String> = Vec::new();
        for line in content.lines() {
            if !line.trim().is_empty() {
                quoted.push(format!("> {line}"));
            } else if quoted.last().is_some_and(|prev| prev != ">") {
                quoted.push(">".to_string());
            }
        }
        format!("\n\n{}\n\n", quoted.join("\n"))
    }
}

fn render_inline_code(el: &Element) -> String {
    let code = collapse(&el.text());
    if code.is_empty() {
        return String::new();
    }
    if code.contains('`') {
        format!("`` {code} ``")
    } else {
        format!("`{code}`")
    }
}

fn render_pre(el: &Element, ctx: Context) -> String {
    let text = el.text();
    let raw = text.trim_matches('\n').trim_end();
    if raw.trim().is_empty() {
        return String::new();
    }

    if ctx == Context::TableCell {
        return format!("<code>{}</code>", collapse(raw));
    }

    let language = el
        .find_tag(Tag::Code)
        .and_then(code_language)
        .or_else(|| code_language(el))
        .unwrap_or_default();
    let fence = "`".repeat(longest_backtick_run(raw).max(2) + 1);

    format!("\n\n{fence}{language}\n{raw}\n{fence}\n\n")
}

/// Language from a `language-xxx` / `lang-xxx` class token.
fn code_language(el: &Element) -> Option<String> {
    el.attr("class")?
        .split_whitespace()
        .find_map(|token| LANGUAGE_CLASS.captures(token))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn longest_backtick_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in text.chars() {
        if c == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Surround `rendered` with a space on each side where `source` has whitespace.
fn keep_edges(source: &str, rendered: String) -> String {
    if rendered.is_empty() {
        return rendered;
    }
    let lead = source.starts_with(char::is_whitespace) && !rendered.starts_with('\n');
    let trail = source.ends_with(char::is_whitespace) && !rendered.ends_with('\n');
    match (lead, trail) {
        (false, false) => rendered,
        (true, false) => format!(" {rendered}"),
        (false, true) => format!("{rendered} "),
        (true, true) => format!(" {rendered} "),
    }
}

/// Collapse whitespace runs to a single space and trim.
pub(crate) fn collapse(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Leading decimal digits of an attribute value (`"3px"` is 3); `None` when there are none.
pub(crate) fn leading_number(value: &str) -> Option<u64> {
    let digits: String = value
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Whether `href` uses the `javascript:` scheme.
pub(crate) fn is_javascript(href: &str) -> bool {
    href.trim_start()
        .get(..11)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("javascript:"))
}

fn needs_space(out: &str, next: &str) -> bool {
    let Some(last) = out.chars().next_back() else {
        return false;
    };
    let Some(first) = next.chars().next() else {
        return false;
    };
    !last.is_whitespace()
        && last != '('
        && !first.is_whitespace()
        && !CLOSING_PUNCTUATION.contains(&first)
        && !out.ends_with("<br>")
        && !next.starts_with("<br>")
}

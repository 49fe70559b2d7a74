//! List builder.

use super::{leading_number, Context, Converter};
use crate::node::Element;
use crate::tags::Tag;

impl Converter<'_> {
    /// Render an `ol`/`ul` element from its direct `li` children.
    ///
    /// Items containing an image or a heading get no marker; the ordered
    /// counter only advances on marked items. Empty items are dropped and a
    /// list without any items renders nothing.
    pub(super) fn render_list(&self, list: &Element, ctx: Context) -> String {
        let ordered = list.tag == Tag::OrderedList;
        let mut counter = list
            .attr("start")
            .and_then(leading_number)
            .unwrap_or(1);

        let mut items: Vec<String> = Vec::new();
        for item in list.element_children().filter(|c| c.tag == Tag::ListItem) {
            let content = self.render_children(item, ctx);
            let content = content.trim();
            if content.is_empty() {
                continue;
            }

            let marked = !item.contains(|e| e.tag == Tag::Image || e.tag.is_heading());
            let prefix = if !marked {
                String::new()
            } else if ordered {
                let marker = format!("{counter}. ");
                counter = counter.saturating_add(1);
                marker
            } else {
                "* ".to_string()
            };

            items.push(match ctx {
                Context::TableCell => format!("<br><li>{prefix}{content}</li>"),
                Context::Default => indent_item(&prefix, content),
            });
        }

        if items.is_empty() {
            return String::new();
        }

        match ctx {
            Context::TableCell => items.concat(),
            Context::Default => format!("\n\n{}\n", items.join("\n")),
        }
    }
}

/// Prefix the first line with the marker and indent continuation lines under it.
fn indent_item(prefix: &str, content: &str) -> String {
    let indent = " ".repeat(prefix.chars().count());
    let mut lines = content.lines();
    let mut out = format!("{prefix}{}", lines.next().unwrap_or_default());
    for line in lines {
        out.push('\n');
        if !line.trim().is_empty() {
            out.push_str(&indent);
            out.push_str(line);
        }
    }
    out
}

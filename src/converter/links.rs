//! Link resolver, including anchors that wrap an image.

use tracing::trace;

use super::{collapse, is_javascript, resolve_image, Context, Converter};
use crate::node::Element;
use crate::tags::Tag;
use crate::url_utils::resolve_href;

impl Converter<'_> {
    /// Render an `a` element.
    ///
    /// An anchor around an image becomes the image followed by any remaining
    /// text and the target; when nothing but the image is left it collapses
    /// to a linked image `[![alt](src)](href)`. Other anchors render as
    /// `[text](href)`, or the bare href when no text can be found.
    pub(super) fn render_link(&self, el: &Element, ctx: Context) -> Option<String> {
        let Some(raw_href) = el.attr_trimmed("href") else {
            trace!("anchor without href skipped");
            return None;
        };
        if is_javascript(raw_href) {
            trace!(href = raw_href, "javascript link skipped");
            return None;
        }
        let href = resolve_href(raw_href, self.base_url);

        if let Some(image) = el.find_tag(Tag::Image) {
            if let Some(picture) = resolve_image(image, self.base_url) {
                return Some(self.render_image_link(el, image, &picture, &href, ctx));
            }
        }

        let text = self.link_text(el, ctx);
        if text.is_empty() {
            Some(href)
        } else {
            Some(format!("[{text}]({href})"))
        }
    }

    fn render_image_link(
        &self,
        anchor: &Element,
        image: &Element,
        picture: &str,
        href: &str,
        ctx: Context,
    ) -> String {
        let rest = anchor.without(image);
        let remainder = self.render_children(&rest, ctx);
        let remainder = remainder.trim();

        if remainder.chars().count() < self.options.min_fragment_len {
            return format!("[{picture}]({href})");
        }

        match ctx {
            Context::Default => {
                let mut block = format!("\n\n{picture}\n\n{remainder}\n\n{href}\n\n");
                if self.options.link_image_separator {
                    block.push_str("---\n\n");
                }
                block
            }
            Context::TableCell => format!("{picture}<br>{remainder}<br>{href}"),
        }
    }

    /// Link text: `title`, then `aria-label`, then the anchor's own text.
    ///
    /// Anchors wrapping block elements use their plain text.
    fn link_text(&self, el: &Element, ctx: Context) -> String {
        if let Some(label) = el
            .attr_trimmed("title")
            .or_else(|| el.attr_trimmed("aria-label"))
        {
            return collapse(label);
        }

        // Block syntax cannot live inside link brackets.
        if el.element_children().next().is_none() || el.contains(Element::is_block) {
            return collapse(&el.text());
        }

        let rendered = collapse(&self.render_children(el, ctx));
        if rendered.is_empty() {
            collapse(&el.text())
        } else {
            rendered
        }
    }
}

//! Tag catalog for the converter.
//!
//! Every element name is mapped once, when the owned tree is built, onto the
//! closed [`Tag`] enumeration. The dispatcher matches on it exhaustively.

/// Element kinds the converter distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `h1` to `h6`, carrying the level.
    Heading(u8),
    /// `p`
    Paragraph,
    /// `a`
    Anchor,
    /// `img`
    Image,
    /// `ol`
    OrderedList,
    /// `ul`
    UnorderedList,
    /// `li`
    ListItem,
    /// `table`
    Table,
    /// `tr`
    TableRow,
    /// `th` or `td`
    TableCell,
    /// `strong` or `b`
    Bold,
    /// `em` or `i`
    Italic,
    /// `code`
    Code,
    /// `pre`
    Pre,
    /// `blockquote`
    Blockquote,
    /// `br`
    LineBreak,
    /// `hr`
    HorizontalRule,
    /// `label`
    Label,
    /// Anything else: rendered as the concatenation of its children.
    Other,
}

impl Tag {
    /// Map an element name (any case) onto a tag.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "h5" => Self::Heading(5),
            "h6" => Self::Heading(6),
            "p" => Self::Paragraph,
            "a" => Self::Anchor,
            "img" => Self::Image,
            "ol" => Self::OrderedList,
            "ul" => Self::UnorderedList,
            "li" => Self::ListItem,
            "table" => Self::Table,
            "tr" => Self::TableRow,
            "th" | "td" => Self::TableCell,
            "strong" | "b" => Self::Bold,
            "em" | "i" => Self::Italic,
            "code" => Self::Code,
            "pre" => Self::Pre,
            "blockquote" => Self::Blockquote,
            "br" => Self::LineBreak,
            "hr" => Self::HorizontalRule,
            "label" => Self::Label,
            _ => Self::Other,
        }
    }

    /// Whether this is one of `h1`..`h6`.
    #[inline]
    #[must_use]
    pub fn is_heading(self) -> bool {
        matches!(self, Self::Heading(_))
    }

    /// Kinds that start and end a block of their own.
    #[inline]
    #[must_use]
    pub fn is_block(self) -> bool {
        matches!(
            self,
            Self::Heading(_)
                | Self::Paragraph
                | Self::OrderedList
                | Self::UnorderedList
                | Self::ListItem
                | Self::Table
                | Self::TableRow
                | Self::TableCell
                | Self::Pre
                | Self::Blockquote
                | Self::HorizontalRule
        )
    }
}

/// Pass-through elements that are laid out as blocks.
pub const BLOCK_CONTAINERS: &[&str] = &[
    "address", "article", "aside", "body", "caption", "dd", "details", "dialog", "div", "dl",
    "dt", "fieldset", "figcaption", "figure", "footer", "form", "header", "html", "legend",
    "main", "nav", "section", "summary", "tbody", "tfoot", "thead",
];

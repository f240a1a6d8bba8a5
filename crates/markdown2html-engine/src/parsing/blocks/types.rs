use super::kinds::{OrderedList, UnorderedList};

/// A block tag that can stay open across lines.
///
/// Headings are self-contained per line and never appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTag {
    /// `<ul>`, opened by `-` items.
    UnorderedList,
    /// `<ol>`, opened by `*` items.
    OrderedList,
    /// `<p>`, opened by plain text lines.
    Paragraph,
}

impl BlockTag {
    /// The HTML element name.
    pub fn name(self) -> &'static str {
        match self {
            BlockTag::UnorderedList => "ul",
            BlockTag::OrderedList => "ol",
            BlockTag::Paragraph => "p",
        }
    }

    /// The line marker that continues this block, if any.
    pub fn marker(self) -> Option<char> {
        match self {
            BlockTag::UnorderedList => Some(UnorderedList::MARKER),
            BlockTag::OrderedList => Some(OrderedList::MARKER),
            BlockTag::Paragraph => None,
        }
    }

    pub fn open_tag(self) -> String {
        format!("<{}>", self.name())
    }

    pub fn close_tag(self) -> String {
        format!("</{}>", self.name())
    }
}

/// What a non-blank line contributes, decided from its symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `#`..`######`: a one-line `<hN>`.
    Heading { level: u8 },
    /// A lone `-`: an `<li>` inside `<ul>`.
    UnorderedItem,
    /// A lone `*`: an `<li>` inside `<ol>`.
    OrderedItem,
    /// Anything else: a paragraph line.
    Plain,
}

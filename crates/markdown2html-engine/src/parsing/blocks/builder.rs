use log::trace;

use crate::parsing::inline::format_text;

use super::{
    classify::LineClass,
    kinds::{Heading, ListItem, Paragraph},
    stack::TagStack,
    types::{BlockTag, LineKind},
};

/// Block state machine: consumes classified lines and emits HTML fragments.
///
/// States are "nothing open", `ul` open, `ol` open and `p` open, tracked on
/// a [`TagStack`].
pub struct HtmlBuilder {
    tags: TagStack,
    out: Vec<String>,
}

impl HtmlBuilder {
    pub fn new() -> Self {
        Self {
            tags: TagStack::default(),
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if c.is_blank {
            if self.tags.is_top(BlockTag::Paragraph) {
                self.close_top();
            }
            return;
        }

        self.close_on_marker_change(c.symbol_first_char());

        match c.kind {
            LineKind::Heading { level } => {
                self.out.push(Heading::render(level, &format_text(&c.content)));
            }
            LineKind::UnorderedItem => self.push_list_item(BlockTag::UnorderedList, &c.content),
            LineKind::OrderedItem => self.push_list_item(BlockTag::OrderedList, &c.content),
            LineKind::Plain => self.extend_paragraph(&c.text),
        }
    }

    /// Closes the innermost open tag and joins the output.
    ///
    /// Only one closing tag is emitted; a list or paragraph left underneath
    /// it stays unclosed.
    pub fn finish(mut self) -> String {
        // EOF flush
        self.close_top();
        let mut html = self.out.join("\n");
        html.push('\n');
        html
    }

    /// Closes an open list when the next line starts with a different marker.
    ///
    /// An open paragraph is only closed by a blank line.
    fn close_on_marker_change(&mut self, first: Option<char>) {
        if let Some(top) = self.tags.top()
            && top != BlockTag::Paragraph
            && top.marker() != first
        {
            self.close_top();
        }
    }

    fn push_list_item(&mut self, list: BlockTag, content: &str) {
        if !self.tags.contains(list) {
            self.open(list);
        }
        self.out.push(ListItem::render(&format_text(content)));
    }

    fn extend_paragraph(&mut self, line: &str) {
        if self.tags.contains(BlockTag::Paragraph) {
            self.out.push(Paragraph::LINE_BREAK.to_string());
        } else {
            self.open(BlockTag::Paragraph);
        }
        // Plain lines keep their first token: nothing was consumed as a marker.
        self.out.push(Paragraph::render_line(&format_text(line)));
    }

    fn open(&mut self, tag: BlockTag) {
        trace!("open <{}>", tag.name());
        self.tags.push(tag);
        self.out.push(tag.open_tag());
    }

    fn close_top(&mut self) {
        if let Some(tag) = self.tags.pop() {
            trace!("close <{}>", tag.name());
            self.out.push(tag.close_tag());
        }
    }
}

impl Default for HtmlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

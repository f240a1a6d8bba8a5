use super::{
    kinds::{Heading, ListItem, OrderedList, UnorderedList},
    types::LineKind,
};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    /// The line with its terminator stripped.
    pub text: String,
    /// Whether the line is blank (empty or spaces only).
    pub is_blank: bool,
    /// The leading token, up to the first single space.
    pub symbol: String,
    /// Everything after the first single space; empty if there is none.
    pub content: String,
    /// What the line contributes. `Plain` for blank lines.
    pub kind: LineKind,
}

impl LineClass {
    /// First character of the symbol, used for the tag-transition check.
    pub fn symbol_first_char(&self) -> Option<char> {
        self.symbol.chars().next()
    }
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    ///
    /// Accepts the line with or without its `\n` / `\r\n` terminator.
    pub fn classify(&self, raw: &str) -> LineClass {
        let text = raw.trim_end_matches(['\r', '\n']);
        let is_blank = text.chars().all(|ch| ch == ' ');

        let (symbol, content) = text.split_once(' ').unwrap_or((text, ""));
        let kind = if is_blank {
            LineKind::Plain
        } else {
            Self::kind_of(symbol)
        };

        LineClass {
            text: text.to_string(),
            is_blank,
            symbol: symbol.to_string(),
            content: content.to_string(),
            kind,
        }
    }

    fn kind_of(symbol: &str) -> LineKind {
        if let Some(level) = Heading::level(symbol) {
            LineKind::Heading { level }
        } else if ListItem::is_marker(symbol, UnorderedList::MARKER) {
            LineKind::UnorderedItem
        } else if ListItem::is_marker(symbol, OrderedList::MARKER) {
            LineKind::OrderedItem
        } else {
            LineKind::Plain
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn classify(raw: &str) -> LineClass {
        MarkdownLineClassifier.classify(raw)
    }

    #[rstest]
    #[case("# Header\n", LineKind::Heading { level: 1 })]
    #[case("###### Six", LineKind::Heading { level: 6 })]
    #[case("####### Seven", LineKind::Plain)]
    #[case("- item", LineKind::UnorderedItem)]
    #[case("* item", LineKind::OrderedItem)]
    #[case("-- item", LineKind::Plain)]
    #[case("** item", LineKind::Plain)]
    #[case("-", LineKind::UnorderedItem)]
    #[case("plain text", LineKind::Plain)]
    #[case(" - indented", LineKind::Plain)]
    fn kinds(#[case] raw: &str, #[case] expected: LineKind) {
        assert_eq!(classify(raw).kind, expected);
    }

    #[test]
    fn splits_symbol_and_content_on_first_space() {
        let lc = classify("- a  b c\n");
        assert_eq!(lc.text, "- a  b c");
        assert_eq!(lc.symbol, "-");
        assert_eq!(lc.content, "a  b c");
        assert_eq!(lc.symbol_first_char(), Some('-'));
    }

    #[test]
    fn symbol_without_content() {
        let lc = classify("#\n");
        assert_eq!(lc.symbol, "#");
        assert_eq!(lc.content, "");
        assert_eq!(lc.kind, LineKind::Heading { level: 1 });
    }

    #[test]
    fn strips_crlf() {
        let lc = classify("# Title\r\n");
        assert_eq!(lc.text, "# Title");
        assert_eq!(lc.content, "Title");
    }

    #[rstest]
    #[case("")]
    #[case("\n")]
    #[case("\r\n")]
    #[case("   \n")]
    fn blank_lines(#[case] raw: &str) {
        assert!(classify(raw).is_blank);
    }

    #[rstest]
    #[case("\t\n")]
    #[case(" \t ")]
    fn other_whitespace_is_plain_text(#[case] raw: &str) {
        let lc = classify(raw);
        assert!(!lc.is_blank);
        assert_eq!(lc.kind, LineKind::Plain);
    }

    #[test]
    fn leading_space_gives_empty_symbol() {
        let lc = classify(" text");
        assert!(!lc.is_blank);
        assert_eq!(lc.symbol, "");
        assert_eq!(lc.symbol_first_char(), None);
        assert_eq!(lc.content, "text");
    }
}

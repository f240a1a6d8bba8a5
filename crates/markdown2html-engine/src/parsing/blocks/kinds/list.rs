/// Unordered list block type: items marked with a lone `-`.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: char = '-';
}

/// Ordered list block type: items marked with a lone `*`.
pub struct OrderedList;

impl OrderedList {
    pub const MARKER: char = '*';
}

/// A single list item line, shared by both list kinds.
pub struct ListItem;

impl ListItem {
    /// Returns true if `symbol` is exactly the single character `marker`.
    ///
    /// `--` or `-x` are not list markers and fall through to plain text.
    pub fn is_marker(symbol: &str, marker: char) -> bool {
        let mut chars = symbol.chars();
        chars.next() == Some(marker) && chars.next().is_none()
    }

    pub fn render(content: &str) -> String {
        format!("  <li>{content}</li>")
    }
}

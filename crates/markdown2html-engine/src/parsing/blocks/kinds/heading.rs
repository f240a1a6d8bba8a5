/// Heading block type with owned marker constant.
///
/// A heading symbol starts with `#` and is 1 to 6 characters long; its length
/// is the heading level.
/// Headings never span lines and are never pushed on the tag stack.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';

    /// Deepest heading level (`<h6>`).
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading level for `symbol`, or `None` if it is not a heading.
    ///
    /// Symbols longer than [`Heading::MAX_LEVEL`] are not headings.
    pub fn level(symbol: &str) -> Option<u8> {
        if !symbol.starts_with(Self::MARKER) {
            return None;
        }
        let len = symbol.chars().count();
        (1..=Self::MAX_LEVEL).contains(&len).then_some(len as u8)
    }

    /// Renders a complete heading line.
    pub fn render(level: u8, content: &str) -> String {
        format!("<h{level}>{content}</h{level}>")
    }
}

/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no other
/// marker matches. Consecutive plain lines share one paragraph, separated by
/// a line break.
pub struct Paragraph;

impl Paragraph {
    /// Prefix for each paragraph text line.
    pub const INDENT: &'static str = "  ";

    /// Emitted between two consecutive lines of the same paragraph.
    pub const LINE_BREAK: &'static str = "    <br />";

    pub fn render_line(text: &str) -> String {
        format!("{}{text}", Self::INDENT)
    }
}

use super::span::Span;

/// A reference to a single line of a source document with its byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Byte span of this line in the document (includes newline if present).
    pub span: Span,
    /// The raw line text, terminator included.
    pub text: &'a str,
}

/// Returns an iterator over lines with their byte spans.
///
/// Newline characters are preserved, the same way reading a file line by line
/// keeps them; the classifier strips them later.
pub fn lines_with_spans(source: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    source.split_inclusive('\n').map(move |line| {
        let start = offset;
        offset += line.len();
        LineRef {
            span: Span { start, end: offset },
            text: line,
        }
    })
}

/// A byte range `[start, end)` into a line or document.
///
/// Inline scanning stores spans rather than copied text; the renderer slices
/// the scanned string with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Slices `s` with this span.
    ///
    /// Callers only build spans on ASCII delimiter boundaries, so the slice
    /// always falls on char boundaries.
    #[must_use]
    pub fn slice(self, s: &str) -> &str {
        &s[self.start..self.end]
    }
}

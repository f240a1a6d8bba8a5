use super::Delimiters;

/// "No-c" inline type: `((X))` renders as X with every `c` and `C` removed.
///
/// Runs after bold and emphasis, so it also strips `c` from any text those
/// passes produced inside the parentheses.
pub struct StripC;

impl StripC {
    pub const DELIMITERS: Delimiters = Delimiters {
        open: b"((",
        close: b"))",
        forbidden: b"()",
    };

    /// Characters removed from the inner text.
    pub const REMOVED: [char; 2] = ['c', 'C'];

    pub fn render(inner: &str) -> String {
        inner.replace(Self::REMOVED, "")
    }
}

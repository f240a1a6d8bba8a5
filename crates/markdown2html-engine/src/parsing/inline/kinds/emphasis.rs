use super::Delimiters;

/// Emphasis inline type: `__X__` renders as `<em>X</em>`.
pub struct Emphasis;

impl Emphasis {
    pub const DELIMITERS: Delimiters = Delimiters {
        open: b"__",
        close: b"__",
        forbidden: b"_",
    };

    pub fn render(inner: &str) -> String {
        format!("<em>{inner}</em>")
    }
}

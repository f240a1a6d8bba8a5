use super::Delimiters;

/// Bold inline type: `**X**` renders as `<b>X</b>`.
pub struct Bold;

impl Bold {
    pub const DELIMITERS: Delimiters = Delimiters {
        open: b"**",
        close: b"**",
        forbidden: b"*",
    };

    pub fn render(inner: &str) -> String {
        format!("<b>{inner}</b>")
    }
}

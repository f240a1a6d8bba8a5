//! # Parsing
//!
//! Line-driven conversion of the Markdown dialect into HTML.
//!
//! ## Pipeline
//!
//! 1. **Line Classification** (`blocks::classify`): each line is split into its
//!    symbol and content and tagged with a `LineKind`
//! 2. **Block Construction** (`blocks::builder`): an `HtmlBuilder` keeps the stack
//!    of open block tags and emits opening/closing tags on transitions
//! 3. **Inline Formatting** (`inline`): line content goes through the ordered
//!    inline passes before it is emitted

pub mod blocks;
pub mod inline;
pub mod lines;
pub mod span;

use blocks::{HtmlBuilder, MarkdownLineClassifier};
use lines::lines_with_spans;

pub use inline::format_text;

/// Converts a sequence of lines into HTML.
///
/// Lines may or may not carry their trailing newline. The result is the emitted
/// fragments joined by `\n`, with a single trailing `\n`.
pub fn parse<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let classifier = MarkdownLineClassifier;
    let mut builder = HtmlBuilder::new();

    for line in lines {
        let lc = classifier.classify(line.as_ref());
        builder.push(&lc);
    }

    builder.finish()
}

/// Convenience: splits a whole document into lines and converts it.
pub fn parse_str(source: &str) -> String {
    parse(lines_with_spans(source).map(|lr| lr.text))
}

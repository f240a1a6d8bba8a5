use crate::parsing::span::Span;

use super::{
    cursor::Cursor,
    types::{InlineKind, InlineNode},
};

/// Applies every inline transform to `content`, in [`InlineKind::ORDER`].
///
/// Each pass rewrites the whole string before the next one runs, so a later
/// pass can match text produced by an earlier one. Unmatched delimiters are
/// left verbatim.
pub fn format_text(content: &str) -> String {
    InlineKind::ORDER
        .iter()
        .fold(content.to_string(), |text, kind| apply(*kind, &text))
}

/// Runs a single pass: scans `s` for `kind` and renders every match.
pub fn apply(kind: InlineKind, s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for node in scan(kind, s) {
        match node {
            InlineNode::Text(sp) => out.push_str(sp.slice(s)),
            InlineNode::Delimited { kind, inner, .. } => out.push_str(&kind.render(inner.slice(s))),
        }
    }
    out
}

/// Scans `s` into a sequence of [`InlineNode`]s for one inline kind.
///
/// Matches are non-overlapping and found left to right. Text between matches
/// is emitted as `InlineNode::Text`; the nodes cover the entire input.
pub fn scan(kind: InlineKind, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        if let Some(node) = try_parse_delimited(&mut cur, kind) {
            let full = node.span();
            flush_text(&mut out, text_start, full.start);
            text_start = full.end;
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Attempts to parse a delimited construct starting at the current position.
///
/// The inner text runs up to the first forbidden byte, and the closing
/// delimiter must start exactly there. On failure, cursor position is restored.
fn try_parse_delimited(cur: &mut Cursor<'_>, kind: InlineKind) -> Option<InlineNode> {
    let delims = kind.delimiters();
    if !cur.starts_with(delims.open) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(delims.open.len());
    let inner_start = cur.pos();

    cur.bump_until_any(delims.forbidden);
    let inner_end = cur.pos();

    if !cur.starts_with(delims.close) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    cur.bump_n(delims.close.len());
    let end = cur.pos();

    Some(InlineNode::Delimited {
        kind,
        full: Span { start, end },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}

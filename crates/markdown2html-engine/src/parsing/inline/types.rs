use crate::parsing::span::Span;

use super::kinds::{Bold, Delimiters, Emphasis, Md5Hash, StripC};

/// The four inline transforms, in the order they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineKind {
    Bold,
    Emphasis,
    StripC,
    Md5Hash,
}

impl InlineKind {
    /// Pass order. Later passes see the output of earlier ones.
    pub const ORDER: [InlineKind; 4] = [
        InlineKind::Bold,
        InlineKind::Emphasis,
        InlineKind::StripC,
        InlineKind::Md5Hash,
    ];

    pub fn delimiters(self) -> Delimiters {
        match self {
            InlineKind::Bold => Bold::DELIMITERS,
            InlineKind::Emphasis => Emphasis::DELIMITERS,
            InlineKind::StripC => StripC::DELIMITERS,
            InlineKind::Md5Hash => Md5Hash::DELIMITERS,
        }
    }

    /// Renders the replacement for the text between the delimiters.
    pub fn render(self, inner: &str) -> String {
        match self {
            InlineKind::Bold => Bold::render(inner),
            InlineKind::Emphasis => Emphasis::render(inner),
            InlineKind::StripC => StripC::render(inner),
            InlineKind::Md5Hash => Md5Hash::render(inner),
        }
    }
}

/// A scanned inline node with byte spans into the scanned string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Text that isn't part of a matched construct.
    Text(Span),
    /// A matched delimiter pair.
    Delimited {
        kind: InlineKind,
        /// Full span including both delimiters.
        full: Span,
        /// Inner span (content between the delimiters).
        inner: Span,
    },
}

impl InlineNode {
    /// Extracts the full span from any inline node variant.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::Delimited { full, .. } => *full,
        }
    }
}

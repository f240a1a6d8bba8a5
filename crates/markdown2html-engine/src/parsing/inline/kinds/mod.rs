//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters and replacement rule.
//!
//! ## Types
//!
//! - **`Bold`**: `**X**` → `<b>X</b>`
//! - **`Emphasis`**: `__X__` → `<em>X</em>`
//! - **`StripC`**: `((X))` → X without any `c`/`C`
//! - **`Md5Hash`**: `[[X]]` → lowercase hex MD5 of X
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The parser reads a kind's [`Delimiters`]; it never hardcodes `**` or `[[`.

pub mod bold;
pub mod emphasis;
pub mod md5_hash;
pub mod strip_c;

pub use bold::Bold;
pub use emphasis::Emphasis;
pub use md5_hash::Md5Hash;
pub use strip_c::StripC;

/// Opening and closing delimiters of an inline construct.
///
/// The inner text may not contain any byte of `forbidden`; the closing
/// delimiter must start at the first forbidden byte after the opener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub open: &'static [u8],
    pub close: &'static [u8],
    pub forbidden: &'static [u8],
}

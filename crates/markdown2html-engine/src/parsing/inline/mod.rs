//! # Inline Formatting
//!
//! Cursor-based inline scanning, applied as a fixed sequence of passes.
//!
//! ## Architecture
//!
//! Each inline kind is handled by its own pass over the whole content string.
//! A pass scans the string into text and delimited nodes, then renders the
//! delimited nodes with the kind's replacement. Passes run in the order
//! bold, emphasis, no-c, md5, each over the previous pass's output.
//!
//! ## Modules
//!
//! - **`types`**: `InlineKind` (pass order, dispatch) and `InlineNode`
//! - **`kinds`**: Inline-specific types with owned delimiters and renderers
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`parser`**: `format_text()` entry point, plus `scan()`/`apply()` for a single pass

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::format_text;
pub use types::{InlineKind, InlineNode};

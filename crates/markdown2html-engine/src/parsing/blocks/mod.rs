//! # Block Parsing
//!
//! Two-phase block parsing over a stack of open tags.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (symbol, content, blank status, `LineKind`)
//!
//! 2. **Block Construction** (`builder`): An `HtmlBuilder` maintains a tag stack
//!    and emits opening/closing tags as blocks open and close
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockTag`, `LineKind`)
//! - **`kinds`**: Block-specific types with owned markers (Heading, lists, Paragraph)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`stack`**: `TagStack` of currently open block tags
//! - **`builder`**: `HtmlBuilder` state machine emitting HTML fragments
//!
//! ## Key Invariants
//!
//! - Headings are never pushed on the stack
//! - A list is closed by any non-blank line whose symbol starts differently
//! - A paragraph is closed only by a blank line or end of input

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod stack;
pub mod types;

pub use builder::HtmlBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use stack::TagStack;
pub use types::{BlockTag, LineKind};

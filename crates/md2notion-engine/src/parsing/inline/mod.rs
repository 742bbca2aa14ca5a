//! # Inline Parsing
//!
//! Cursor-based inline parsing with raw zones and a delimiter stack.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the joined
//! content of inline-eligible blocks (paragraphs, headings, quotes, list
//! items). It never fails: anything that does not form a complete construct
//! is literal text.
//!
//! 1. **Tokenize**: a cursor walks the text, emitting plain text, code spans
//!    (raw zones), links (atomic, label parsed recursively), bare URLs and
//!    delimiter runs.
//! 2. **Resolve emphasis**: closers are paired with the nearest eligible
//!    opener (`*`/`_` with flanking rules, `~~` for strikethrough).
//! 3. **Flatten**: leftover delimiters become text; neighbours with equal
//!    formatting merge.
//!
//! ## Modules
//!
//! - **`types`**: `InlineItem` and `DelimiterRun`
//! - **`kinds`**: syntax owners (CodeSpan, Link, Emphasis, Autolink, Escape)
//! - **`cursor`**: `Cursor` for byte-by-byte parsing
//! - **`parser`**: `parse_inline()` main entry point

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{DelimiterRun, InlineItem};

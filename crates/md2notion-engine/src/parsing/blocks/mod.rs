//! # Block Parsing
//!
//! Two-phase block parsing: classify each line locally, then segment the
//! classified lines into block nodes.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (indentation, block-start rule, text spans)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` holds the open leaf
//!    and the list nesting stack, and emits `BlockNode`s as blocks close
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockNode`, `BlockKind`, `ListKind`, `ListFrame`)
//! - **`kinds`**: Block-specific types with owned delimiters (fence, heading, quote, list item, rule)
//! - **`open`**: `detect_block_start` dispatch in precedence order
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`containers`**: `ListStack` for nested list items
//! - **`content`**: `ContentView` per-line content projection
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Every line is classified (plain text is the fallback)
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - A blank line closes the open leaf and all open lists
//! - All block nodes store byte spans into the rope

pub mod builder;
pub mod classify;
pub mod containers;
pub mod content;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{DEFAULT_TAB_WIDTH, LineClass, LineKind, MarkdownLineClassifier};
pub use content::{ContentLine, ContentView};
pub use types::{BlockKind, BlockNode, ListFrame, ListKind};

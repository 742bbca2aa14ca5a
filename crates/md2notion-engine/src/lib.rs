//! Markdown to Notion block conversion.
//!
//! [`convert`] parses a Markdown document into an ordered sequence of
//! [`Block`]s whose JSON serialization matches the Notion block schema.

pub mod convert;
pub mod error;
pub mod models;
pub mod parsing;

// Re-export key types for easier usage
pub use convert::{ConvertOptions, convert, convert_with};
pub use error::ConversionError;
pub use models::{Annotations, Block, BlockType, HeadingLevel, InlineSpan, MAX_TEXT_CONTENT};

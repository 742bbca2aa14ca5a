pub mod block;
pub mod language;
pub mod rich_text;

pub use block::{Block, BlockType, HeadingLevel};
pub use language::normalize_language;
pub use rich_text::{Annotations, InlineSpan, MAX_TEXT_CONTENT};

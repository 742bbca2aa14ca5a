use log::debug;
use xi_rope::Rope;

use crate::{
    error::ConversionError,
    models::Block,
    parsing::{assemble, blocks::DEFAULT_TAB_WIDTH, parse_document},
};

/// Options controlling a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Columns a tab advances to when measuring list indentation.
    pub tab_width: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

/// Converts Markdown into content blocks with default options.
pub fn convert(markdown: &str) -> Result<Vec<Block>, ConversionError> {
    convert_with(markdown, &ConvertOptions::default())
}

/// Converts Markdown into content blocks.
///
/// Never fails on malformed input; an error means an internal invariant
/// was violated.
pub fn convert_with(
    markdown: &str,
    options: &ConvertOptions,
) -> Result<Vec<Block>, ConversionError> {
    let rope = Rope::from(markdown);
    let doc = parse_document(&rope, options.tab_width)?;
    let blocks = assemble(&rope, &doc.blocks)?;
    debug!(
        "Converted {} bytes into {} top-level blocks",
        markdown.len(),
        blocks.len()
    );
    Ok(blocks)
}

//! # Markdown Parsing
//!
//! Two-phase parsing over an `xi_rope::Rope`:
//!
//! 1. **Blocks**: each line is classified, then a builder groups lines into
//!    [`BlockNode`]s with spans into the rope (see [`blocks`]).
//! 2. **Inline**: the joined content of each text-bearing block is parsed
//!    into formatted spans (see [`inline`]).
//!
//! [`assemble`] combines both into the output block model.

pub mod assemble;
pub mod blocks;
pub mod inline;
pub mod invariants;
pub mod rope;

use xi_rope::Rope;

use crate::{error::ConversionError, models::InlineSpan};
use blocks::{BlockBuilder, BlockKind, BlockNode, MarkdownLineClassifier};
use rope::lines_with_spans;

pub use assemble::assemble;

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

pub fn parse_document(rope: &Rope, tab_width: usize) -> Result<ParsedDoc, ConversionError> {
    let classifier = MarkdownLineClassifier::new(tab_width);
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc)?;
    }

    Ok(ParsedDoc {
        blocks: builder.finish()?,
    })
}

/// Inline parse for a block node's own content (children excluded).
///
/// Code blocks and dividers carry no inline content.
pub fn parse_inline_for_block(rope: &Rope, b: &BlockNode) -> Vec<InlineSpan> {
    if matches!(
        b.kind,
        BlockKind::FencedCode { .. } | BlockKind::ThematicBreak
    ) {
        return vec![];
    }
    let s = b.content.join_content(rope);
    inline::parse_inline(&s)
}

#[cfg(test)]
mod tests;

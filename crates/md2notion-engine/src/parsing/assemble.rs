use xi_rope::Rope;

use crate::{
    error::ConversionError,
    models::{
        Block, BlockType, HeadingLevel, InlineSpan, MAX_TEXT_CONTENT, normalize_language,
        rich_text::split_long_spans,
    },
    parsing::{
        blocks::{BlockKind, BlockNode, ListKind},
        invariants, parse_inline_for_block,
    },
};

/// Turns segmented block nodes into finished [`Block`]s.
///
/// Spans are validated against the rope first; a node outside the source is
/// an internal error, as are children under a block type that cannot hold
/// them. Rich text is split so no span exceeds [`MAX_TEXT_CONTENT`]
/// characters.
pub fn assemble(rope: &Rope, nodes: &[BlockNode]) -> Result<Vec<Block>, ConversionError> {
    invariants::check(rope, nodes)?;
    nodes.iter().map(|n| assemble_node(rope, n)).collect()
}

fn assemble_node(rope: &Rope, node: &BlockNode) -> Result<Block, ConversionError> {
    let kind = block_type(&node.kind);
    if !node.children.is_empty() && !kind.accepts_children() {
        return Err(ConversionError::internal(format!(
            "{} block cannot hold children",
            kind.type_name()
        )));
    }
    let rich_text = match &node.kind {
        BlockKind::FencedCode { .. } => code_text(rope, node),
        BlockKind::ThematicBreak => vec![],
        _ => parse_inline_for_block(rope, node),
    };
    let children = node
        .children
        .iter()
        .map(|c| assemble_node(rope, c))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Block::new(kind, split_long_spans(rich_text, MAX_TEXT_CONTENT)).with_children(children))
}

fn block_type(kind: &BlockKind) -> BlockType {
    match kind {
        BlockKind::Paragraph => BlockType::Paragraph,
        BlockKind::Heading { level } => BlockType::Heading {
            level: HeadingLevel::clamped(*level),
        },
        BlockKind::BlockQuote => BlockType::Quote,
        BlockKind::ListItem {
            task: Some(checked),
            ..
        } => BlockType::ToDo { checked: *checked },
        BlockKind::ListItem {
            kind: ListKind::Bulleted,
            ..
        } => BlockType::BulletedListItem,
        BlockKind::ListItem {
            kind: ListKind::Numbered,
            ..
        } => BlockType::NumberedListItem,
        BlockKind::FencedCode { info, .. } => BlockType::Code {
            language: normalize_language(info).to_string(),
        },
        BlockKind::ThematicBreak => BlockType::Divider,
    }
}

/// Code content is verbatim: one unannotated span, or none when empty.
fn code_text(rope: &Rope, node: &BlockNode) -> Vec<InlineSpan> {
    let text = node.content.join_content(rope);
    if text.is_empty() {
        vec![]
    } else {
        vec![InlineSpan::plain(text)]
    }
}

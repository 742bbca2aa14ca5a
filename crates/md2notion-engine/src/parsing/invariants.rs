use xi_rope::Rope;

use crate::{
    error::ConversionError,
    parsing::{blocks::BlockNode, rope::span::Span},
};

/// Validates block segmentation output against the source.
///
/// Checks that:
/// - All block spans are within rope bounds
/// - All content spans are contained within their block spans
/// - Child block spans are contained within their parent's span
pub fn check(rope: &Rope, blocks: &[BlockNode]) -> Result<(), ConversionError> {
    let bounds = Span::new(0, rope.len());
    blocks.iter().try_for_each(|b| check_node(bounds, b))
}

fn check_node(parent: Span, b: &BlockNode) -> Result<(), ConversionError> {
    if b.span.start > b.span.end || !parent.contains(b.span) {
        return Err(ConversionError::internal(format!(
            "block span {:?} outside of {:?}",
            b.span, parent
        )));
    }
    for content in b.content.spans() {
        if content.start > content.end || !b.span.contains(content) {
            return Err(ConversionError::internal(format!(
                "content span {:?} not contained in block span {:?}",
                content, b.span
            )));
        }
    }
    b.children.iter().try_for_each(|c| check_node(b.span, c))
}

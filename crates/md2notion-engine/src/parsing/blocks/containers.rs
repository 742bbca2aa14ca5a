use crate::error::ConversionError;

use super::types::{BlockNode, ListFrame};

/// An open list item waiting for children or siblings.
#[derive(Debug)]
struct OpenItem {
    frame: ListFrame,
    node: BlockNode,
}

/// The list nesting stack.
///
/// The bottom entry is a top-level item; each entry above it is a child of
/// the one below. Items are attached to their parent (or emitted) as they
/// are popped, so output order follows source order.
#[derive(Debug, Default)]
pub struct ListStack(Vec<OpenItem>);

impl ListStack {
    /// The innermost open item, if any.
    pub fn top_mut(&mut self) -> Option<&mut BlockNode> {
        self.0.last_mut().map(|item| &mut item.node)
    }

    /// Opens `node` at `frame.indent`.
    ///
    /// Items indented deeper than the new one are closed first. An item at
    /// the same indent is a sibling and is closed too. Whatever remains on
    /// top becomes the parent.
    pub fn open(
        &mut self,
        frame: ListFrame,
        node: BlockNode,
        out: &mut Vec<BlockNode>,
    ) -> Result<(), ConversionError> {
        while self
            .0
            .last()
            .is_some_and(|top| top.frame.indent >= frame.indent)
        {
            self.close_top(out)?;
        }
        self.0.push(OpenItem { frame, node });
        Ok(())
    }

    /// Closes every open item.
    pub fn close_all(&mut self, out: &mut Vec<BlockNode>) -> Result<(), ConversionError> {
        while !self.0.is_empty() {
            self.close_top(out)?;
        }
        Ok(())
    }

    fn close_top(&mut self, out: &mut Vec<BlockNode>) -> Result<(), ConversionError> {
        let item = self
            .0
            .pop()
            .ok_or_else(|| ConversionError::Internal("list stack underflow".into()))?;
        match self.0.last_mut() {
            Some(parent) => {
                parent.node.span = parent.node.span.cover(item.node.span);
                parent.node.children.push(item.node);
            }
            None => out.push(item.node),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{
        blocks::{
            content::ContentView,
            types::{BlockKind, ListKind},
        },
        rope::span::Span,
    };

    fn item(start: usize) -> BlockNode {
        BlockNode::leaf(
            BlockKind::ListItem {
                kind: ListKind::Bulleted,
                task: None,
            },
            Span::new(start, start + 1),
            ContentView::Lines(vec![]),
        )
    }

    fn frame(indent: usize) -> ListFrame {
        ListFrame {
            indent,
            kind: ListKind::Bulleted,
        }
    }

    #[test]
    fn siblings_are_emitted_in_order() {
        let mut stack = ListStack::default();
        let mut out = vec![];
        stack.open(frame(0), item(0), &mut out).unwrap();
        stack.open(frame(0), item(2), &mut out).unwrap();
        stack.close_all(&mut out).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].span.start, 0);
        assert_eq!(out[1].span.start, 2);
    }

    #[test]
    fn deeper_item_becomes_child() {
        let mut stack = ListStack::default();
        let mut out = vec![];
        stack.open(frame(0), item(0), &mut out).unwrap();
        stack.open(frame(2), item(2), &mut out).unwrap();
        assert!(out.is_empty());
        stack.close_all(&mut out).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].children.len(), 1);
        // parent span grows to cover its children
        assert_eq!(out[0].span, Span::new(0, 3));
    }

    #[test]
    fn dedent_closes_down_to_matching_level() {
        let mut stack = ListStack::default();
        let mut out = vec![];
        stack.open(frame(0), item(0), &mut out).unwrap();
        stack.open(frame(2), item(2), &mut out).unwrap();
        stack.open(frame(4), item(4), &mut out).unwrap();
        stack.open(frame(2), item(6), &mut out).unwrap();
        assert_eq!(stack.top_mut().map(|node| node.span.start), Some(6));
        stack.close_all(&mut out).unwrap();
        assert_eq!(out[0].children.len(), 2);
        assert_eq!(out[0].children[0].children.len(), 1);
    }

    #[test]
    fn close_all_on_empty_stack_is_noop() {
        let mut stack = ListStack::default();
        let mut out = vec![];
        stack.close_all(&mut out).unwrap();
        assert!(out.is_empty());
        assert!(stack.top_mut().is_none());
    }
}

//! Integration tests for the parsing module: segmentation and inline
//! parsing run together over whole documents.

use pretty_assertions::assert_eq;
use rstest::rstest;
use xi_rope::Rope;

use crate::{
    models::{Annotations, InlineSpan},
    parsing::{
        blocks::{BlockKind, ListKind},
        invariants, parse_document, parse_inline_for_block,
    },
};

fn kinds(src: &str) -> Vec<BlockKind> {
    let rope = Rope::from(src);
    let doc = parse_document(&rope, 4).unwrap();
    invariants::check(&rope, &doc.blocks).unwrap();
    doc.blocks.into_iter().map(|b| b.kind).collect()
}

/// Slicing any block span from the rope reproduces source text.
#[test]
fn lossless_span_invariant() {
    let md = "# Title\n\nHello *world*!\n\n- a\n  - b\n";
    let rope = Rope::from(md);

    let doc = parse_document(&rope, 4).unwrap();
    invariants::check(&rope, &doc.blocks).unwrap();

    for block in &doc.blocks {
        let text = rope.slice_to_cow(block.span.start..block.span.end);
        assert!(!text.is_empty());
        assert!(md.contains(text.as_ref()));
    }
}

/// Code spans are raw zones: no emphasis inside.
#[test]
fn raw_zones_suppress_inline_parsing() {
    let rope = Rope::from("`*not italic*`");

    let doc = parse_document(&rope, 4).unwrap();
    assert_eq!(doc.blocks.len(), 1);
    assert!(matches!(doc.blocks[0].kind, BlockKind::Paragraph));

    let spans = parse_inline_for_block(&rope, &doc.blocks[0]);
    assert_eq!(spans, vec![InlineSpan::new("*not italic*", Annotations::CODE)]);
}

/// Unclosed constructs become plain text.
#[test]
fn unclosed_constructs_become_text() {
    let rope = Rope::from("[unclosed and `also unclosed **and this");

    let doc = parse_document(&rope, 4).unwrap();
    let spans = parse_inline_for_block(&rope, &doc.blocks[0]);

    assert_eq!(
        spans,
        vec![InlineSpan::plain("[unclosed and `also unclosed **and this")]
    );
}

#[test]
fn empty_document() {
    assert!(kinds("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(kinds("\n\n  \n\t\n").is_empty());
}

#[test]
fn code_fence_content_is_not_inline_parsed() {
    let rope = Rope::from("```\n**x**\n```");
    let doc = parse_document(&rope, 4).unwrap();
    assert!(parse_inline_for_block(&rope, &doc.blocks[0]).is_empty());
}

#[test]
fn multi_line_paragraph_joins_with_newlines() {
    let rope = Rope::from("one\ntwo\r\nthree");
    let doc = parse_document(&rope, 4).unwrap();
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0].content.join_content(&rope), "one\ntwo\nthree");
}

#[test]
fn quote_content_drops_markers() {
    let rope = Rope::from("> first\n> **second**");
    let doc = parse_document(&rope, 4).unwrap();
    let spans = parse_inline_for_block(&rope, &doc.blocks[0]);
    assert_eq!(
        spans,
        vec![
            InlineSpan::plain("first\n"),
            InlineSpan::new("second", Annotations::BOLD)
        ]
    );
}

#[rstest]
#[case("# h", BlockKind::Heading { level: 1 })]
#[case("###### h", BlockKind::Heading { level: 6 })]
#[case("####### h", BlockKind::Paragraph)]
#[case("#nospace", BlockKind::Paragraph)]
#[case("> q", BlockKind::BlockQuote)]
#[case("- item", BlockKind::ListItem { kind: ListKind::Bulleted, task: None })]
#[case("+ item", BlockKind::ListItem { kind: ListKind::Bulleted, task: None })]
#[case("12. item", BlockKind::ListItem { kind: ListKind::Numbered, task: None })]
#[case("- [X] item", BlockKind::ListItem { kind: ListKind::Bulleted, task: Some(true) })]
#[case("---", BlockKind::ThematicBreak)]
#[case("_ _ _", BlockKind::Paragraph)]
#[case("| a | b |", BlockKind::Paragraph)]
fn single_line_block_kinds(#[case] src: &str, #[case] expected: BlockKind) {
    assert_eq!(kinds(src), vec![expected]);
}

#[test]
fn tab_indented_item_nests() {
    let rope = Rope::from("- a\n\t- b\n- c");
    let doc = parse_document(&rope, 4).unwrap();
    invariants::check(&rope, &doc.blocks).unwrap();

    assert_eq!(doc.blocks.len(), 2);
    assert_eq!(doc.blocks[0].children.len(), 1);
    assert!(doc.blocks[1].children.is_empty());
}

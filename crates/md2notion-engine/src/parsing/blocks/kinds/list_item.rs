use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::types::ListKind;

/// List item markers: bullets (`-`, `*`, `+`), ordinals (`1.`) and task boxes.
pub struct ListItem;

/// A detected list item marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    pub kind: ListKind,
    /// `Some(checked)` when the item starts with a task box (`[ ]`, `[x]`).
    pub task: Option<bool>,
    /// Byte offset where the item text starts (after marker and task box).
    pub content_offset: usize,
}

impl ListItem {
    pub const BULLETS: [u8; 3] = [b'-', b'*', b'+'];
    pub const TASK_OPEN: &'static str = "[ ]";
    pub const TASK_DONE: [&'static str; 2] = ["[x]", "[X]"];

    /// Matches a list marker at the start of `s` (leading whitespace already stripped).
    pub fn parse(s: &str) -> Option<ListMarker> {
        let (kind, marker_len) = Self::marker(s)?;
        let mut offset = marker_len + Self::gap(&s[marker_len..]);

        let mut task = None;
        if kind == ListKind::Bulleted {
            let rest = &s[offset..];
            let checked = if rest.starts_with(Self::TASK_OPEN) {
                Some(false)
            } else if Self::TASK_DONE.iter().any(|t| rest.starts_with(t)) {
                Some(true)
            } else {
                None
            };
            if let Some(checked) = checked {
                let after = &rest[Self::TASK_OPEN.len()..];
                if after.is_empty() || after.starts_with([' ', '\t']) {
                    task = Some(checked);
                    offset += Self::TASK_OPEN.len() + Self::gap(after);
                }
            }
        }

        Some(ListMarker {
            kind,
            task,
            content_offset: offset,
        })
    }

    /// Returns the list kind and byte length of the marker itself.
    fn marker(s: &str) -> Option<(ListKind, usize)> {
        let b = s.as_bytes();
        let first = *b.first()?;
        if Self::BULLETS.contains(&first) {
            return match b.get(1) {
                None | Some(b' ') | Some(b'\t') => Some((ListKind::Bulleted, 1)),
                _ => None,
            };
        }
        ordered_marker()
            .find(s)
            .map(|m| (ListKind::Numbered, m.end()))
    }

    /// Width of the whitespace run between a marker and its content.
    fn gap(s: &str) -> usize {
        s.len() - s.trim_start_matches([' ', '\t']).len()
    }
}

fn ordered_marker() -> &'static Regex {
    static ORDERED: OnceLock<Regex> = OnceLock::new();
    ORDERED.get_or_init(|| Regex::new(r"^[0-9]{1,9}\.(?:[ \t]|$)").expect("Invalid list marker regex"))
}

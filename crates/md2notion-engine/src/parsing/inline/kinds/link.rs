use crate::parsing::inline::cursor::Cursor;

use super::{
    code_span::{CodeSpan, TickRuns},
    escape::Escape,
};

/// Inline link `[text](destination "title")`.
pub struct Link;

/// A matched link: raw label text and the destination URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch<'a> {
    pub label: &'a str,
    pub destination: &'a str,
}

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const DEST_OPEN: u8 = b'(';
    pub const DEST_CLOSE: u8 = b')';

    /// Attempts to parse a link at the cursor.
    ///
    /// Returns `None` (cursor untouched) if the label is unclosed, is not
    /// followed by `(`, or the destination is empty or unclosed.
    pub fn try_parse<'a>(cur: &mut Cursor<'a>, index: &LinkIndex) -> Option<LinkMatch<'a>> {
        if cur.peek() != Some(Self::OPEN) {
            return None;
        }
        let s = cur.s;
        let b = s.as_bytes();
        let label_start = cur.pos() + 1;
        let label_end = index.label_end(label_start)?;

        let mut i = label_end + 1;
        if b.get(i) != Some(&Self::DEST_OPEN) {
            return None;
        }
        i += 1;
        i = skip_ws(b, i);

        let (destination, after_dest) = index.destination(s, i)?;
        i = skip_ws(b, after_dest);

        if let Some(&q) = b.get(i)
            && matches!(q, b'"' | b'\'' | b'(')
        {
            let close = if q == b'(' { b')' } else { q };
            let at = index.next_title_close(close, i + 1)?;
            i = skip_ws(b, at + 1);
        }

        if b.get(i) != Some(&Self::DEST_CLOSE) || destination.is_empty() {
            return None;
        }

        cur.bump_n(i + 1 - cur.pos());
        Some(LinkMatch {
            label: &s[label_start..label_end],
            destination,
        })
    }
}

/// Scan results for every position of one inline string, built once so
/// trying a link at each `[` costs constant time instead of a rescan.
///
/// Both scans are walks where each position has a fixed successor, so their
/// answers are filled right to left from answers already known.
#[derive(Debug)]
pub struct LinkIndex {
    /// From a position just after `[`: the `]` that closes it. Nested
    /// brackets balance; code spans and escapes are skipped.
    label_ends: Vec<Option<usize>>,
    /// From a position: end of a bare destination, stopping at whitespace or
    /// at a `)` that is not balanced by an earlier `(`.
    dest_ends: Vec<usize>,
    angle_ends: Occurrences,
    double_quotes: Occurrences,
    single_quotes: Occurrences,
    close_parens: Occurrences,
}

impl LinkIndex {
    pub fn new(s: &str, ticks: &TickRuns) -> Self {
        let b = s.as_bytes();
        let n = b.len();
        let mut label_ends: Vec<Option<usize>> = vec![None; n + 1];
        let mut dest_ends: Vec<usize> = vec![n; n + 1];
        let label_at = |ends: &[Option<usize>], i: usize| ends.get(i).copied().flatten();
        let dest_at = |ends: &[usize], i: usize| ends.get(i).copied().unwrap_or(n);

        let mut tick_run = 0;
        for i in (0..n).rev() {
            tick_run = if b[i] == CodeSpan::TICK { tick_run + 1 } else { 0 };

            let label_end = match b[i] {
                Escape::BACKSLASH => label_at(&label_ends, i + 2),
                CodeSpan::TICK => {
                    let after = ticks
                        .find_close(i + tick_run, tick_run)
                        .map_or(i + tick_run, |(_, _, end)| end);
                    label_at(&label_ends, after)
                }
                Link::OPEN => label_at(&label_ends, i + 1)
                    .and_then(|inner| label_at(&label_ends, inner + 1)),
                Link::CLOSE => Some(i),
                _ => label_at(&label_ends, i + 1),
            };

            let dest_end = match b[i] {
                c if c.is_ascii_whitespace() => i,
                Link::DEST_CLOSE => i,
                Escape::BACKSLASH => dest_at(&dest_ends, i + 2),
                Link::DEST_OPEN => {
                    let inner = dest_at(&dest_ends, i + 1);
                    if b.get(inner) == Some(&Link::DEST_CLOSE) {
                        dest_at(&dest_ends, inner + 1)
                    } else {
                        inner
                    }
                }
                _ => dest_at(&dest_ends, i + 1),
            };

            label_ends[i] = label_end;
            dest_ends[i] = dest_end;
        }

        Self {
            label_ends,
            dest_ends,
            angle_ends: Occurrences::of(b, |c| c == b'>' || c == b'\n'),
            double_quotes: Occurrences::of(b, |c| c == b'"'),
            single_quotes: Occurrences::of(b, |c| c == b'\''),
            close_parens: Occurrences::of(b, |c| c == Link::DEST_CLOSE),
        }
    }

    fn label_end(&self, start: usize) -> Option<usize> {
        self.label_ends.get(start).copied().flatten()
    }

    /// Parses a destination starting at `i`: `<...>` or a run without
    /// whitespace and with balanced parentheses.
    fn destination<'a>(&self, s: &'a str, i: usize) -> Option<(&'a str, usize)> {
        let b = s.as_bytes();
        if b.get(i) == Some(&b'<') {
            let end = self.angle_ends.next_from(i + 1)?;
            if b[end] != b'>' {
                return None;
            }
            return Some((&s[i + 1..end], end + 1));
        }

        let j = self.dest_ends.get(i).copied().unwrap_or(b.len());
        Some((&s[i..j], j))
    }

    fn next_title_close(&self, close: u8, from: usize) -> Option<usize> {
        match close {
            b'"' => self.double_quotes.next_from(from),
            b'\'' => self.single_quotes.next_from(from),
            _ => self.close_parens.next_from(from),
        }
    }
}

/// Sorted offsets of the bytes matching some predicate.
#[derive(Debug)]
struct Occurrences(Vec<usize>);

impl Occurrences {
    fn of(b: &[u8], pred: impl Fn(u8) -> bool) -> Self {
        Self(
            b.iter()
                .enumerate()
                .filter(|&(_, &c)| pred(c))
                .map(|(i, _)| i)
                .collect(),
        )
    }

    /// First offset at or after `from`.
    fn next_from(&self, from: usize) -> Option<usize> {
        let k = self.0.partition_point(|&p| p < from);
        self.0.get(k).copied()
    }
}

fn skip_ws(b: &[u8], mut i: usize) -> usize {
    while i < b.len() && b[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

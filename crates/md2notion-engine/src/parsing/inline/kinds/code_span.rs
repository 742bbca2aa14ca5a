use std::collections::HashMap;

use crate::parsing::inline::cursor::Cursor;

/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": no other inline parsing occurs inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Attempts to parse a code span at the cursor.
    ///
    /// The closer is the next backtick run of exactly the opener's length.
    /// On success the cursor is past the closer and the normalized content is
    /// returned; on failure the cursor is left untouched.
    pub fn try_parse(cur: &mut Cursor<'_>, runs: &TickRuns) -> Option<String> {
        let open = cur.run_len(Self::TICK);
        if open == 0 {
            return None;
        }

        let (inner_start, inner_end, end) = runs.find_close(cur.pos() + open, open)?;
        let content = Self::normalize(&cur.s[inner_start..inner_end]);
        cur.bump_n(end - cur.pos());
        Some(content)
    }

    /// Line endings become spaces; one surrounding space is stripped when
    /// present on both sides and the content is not all spaces.
    fn normalize(raw: &str) -> String {
        let s = raw.replace("\r\n", " ").replace('\n', " ");
        let strip = s.len() >= 2
            && s.starts_with(' ')
            && s.ends_with(' ')
            && !s.bytes().all(|b| b == b' ');
        if strip {
            s[1..s.len() - 1].to_string()
        } else {
            s
        }
    }
}

/// Start offsets of every maximal backtick run in a string, grouped by run
/// length, so finding a closer never rescans the text.
#[derive(Debug, Default)]
pub struct TickRuns {
    by_len: HashMap<usize, Vec<usize>>,
}

impl TickRuns {
    pub fn new(s: &str) -> Self {
        let b = s.as_bytes();
        let mut by_len: HashMap<usize, Vec<usize>> = HashMap::new();
        let mut i = 0;
        while i < b.len() {
            if b[i] == CodeSpan::TICK {
                let run = b[i..].iter().take_while(|&&c| c == CodeSpan::TICK).count();
                by_len.entry(run).or_default().push(i);
                i += run;
            } else {
                i += 1;
            }
        }
        Self { by_len }
    }

    /// Finds the closing run for an opener of `open` ticks whose content
    /// starts at `inner_start`.
    ///
    /// Returns (inner_start, inner_end, end_after_closer).
    pub fn find_close(&self, inner_start: usize, open: usize) -> Option<(usize, usize, usize)> {
        let starts = self.by_len.get(&open)?;
        let k = starts.partition_point(|&p| p < inner_start);
        starts.get(k).map(|&p| (inner_start, p, p + open))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> (Option<String>, usize) {
        let mut cur = Cursor::new(s);
        let out = CodeSpan::try_parse(&mut cur, &TickRuns::new(s));
        (out, cur.pos())
    }

    #[test]
    fn simple_span() {
        assert_eq!(parse("`code` rest"), (Some("code".into()), 6));
    }

    #[test]
    fn double_ticks_allow_single_tick_inside() {
        assert_eq!(parse("`` a`b ``"), (Some("a`b".into()), 9));
    }

    #[test]
    fn mismatched_run_lengths_do_not_close() {
        assert_eq!(parse("``code`"), (None, 0));
    }

    #[test]
    fn unclosed_leaves_cursor() {
        assert_eq!(parse("`unclosed"), (None, 0));
    }

    #[test]
    fn newlines_become_spaces() {
        assert_eq!(parse("`a\nb`"), (Some("a b".into()), 5));
    }

    #[test]
    fn all_space_content_is_kept() {
        assert_eq!(parse("`  `"), (Some("  ".into()), 4));
    }

    #[test]
    fn closer_skips_longer_and_shorter_runs() {
        assert_eq!(parse("`` a ` b ``` c `` d"), (Some("a ` b ``` c".into()), 17));
    }

    #[test]
    fn opener_inside_a_longer_raw_run() {
        // Cursor on the second tick, as after an escaped first tick
        let s = "\\``x`";
        let mut cur = Cursor::new(s);
        cur.bump_n(2);
        assert_eq!(CodeSpan::try_parse(&mut cur, &TickRuns::new(s)), Some("x".into()));
        assert_eq!(cur.pos(), 5);
    }

    #[test]
    fn runs_are_grouped_by_length() {
        let runs = TickRuns::new("a`b``c`d");
        assert_eq!(runs.find_close(2, 1), Some((2, 6, 7)));
        assert_eq!(runs.find_close(2, 2), Some((2, 3, 5)));
        assert_eq!(runs.find_close(2, 3), None);
    }
}

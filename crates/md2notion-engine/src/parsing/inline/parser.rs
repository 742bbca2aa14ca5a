use std::collections::HashMap;

use html_escape::decode_html_entities;

use crate::models::{Annotations, InlineSpan, rich_text::merge_adjacent};

use super::{
    cursor::Cursor,
    kinds::{Autolink, CodeSpan, Emphasis, Escape, Link, LinkIndex, TickRuns},
    types::{DelimiterRun, InlineItem},
};

/// Parses inline content into an ordered sequence of [`InlineSpan`]s.
///
/// The output covers the whole input: text between constructs is emitted
/// as plain spans, and any opener without a partner is kept as literal
/// text. Adjacent spans with identical formatting are merged.
///
/// # Precedence
/// - Code spans are raw zones and are recognized first.
/// - Links are atomic; their labels are parsed for emphasis but not for
///   nested links or bare URLs.
/// - Emphasis is resolved last with a delimiter stack, so it may wrap links
///   and code spans.
pub fn parse_inline(s: &str) -> Vec<InlineSpan> {
    parse_with(s, true)
}

fn parse_with(s: &str, allow_links: bool) -> Vec<InlineSpan> {
    let mut items = tokenize(s, allow_links);
    process_emphasis(&mut items);
    merge_adjacent(items.into_iter().filter_map(InlineItem::into_span))
}

/// First pass: split the input into text, code, link and delimiter items.
fn tokenize(s: &str, allow_links: bool) -> Vec<InlineItem> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();
    let ticks = TickRuns::new(s);
    let mut links: Option<LinkIndex> = None;

    // Helper to flush accumulated literal text
    fn flush_text(out: &mut Vec<InlineItem>, s: &str, start: usize, end: usize) {
        if end > start {
            let text = decode_html_entities(&s[start..end]);
            out.push(InlineItem::Span(InlineSpan::plain(text)));
        }
    }

    while let Some(b) = cur.peek() {
        let start = cur.pos();

        if b == Escape::BACKSLASH
            && let Some(ch) = Escape::try_parse(&mut cur)
        {
            flush_text(&mut out, s, text_start, start);
            out.push(InlineItem::Span(InlineSpan::plain(ch.to_string())));
            text_start = cur.pos();
            continue;
        }

        if b == CodeSpan::TICK {
            if let Some(code) = CodeSpan::try_parse(&mut cur, &ticks) {
                flush_text(&mut out, s, text_start, start);
                out.push(InlineItem::Span(InlineSpan::new(code, Annotations::CODE)));
                text_start = cur.pos();
            } else {
                // An unmatched run is literal as a whole
                cur.bump_n(cur.run_len(CodeSpan::TICK));
            }
            continue;
        }

        if b == Link::OPEN
            && allow_links
            && let Some(link) =
                Link::try_parse(&mut cur, links.get_or_insert_with(|| LinkIndex::new(s, &ticks)))
        {
            flush_text(&mut out, s, text_start, start);
            let href = decode_html_entities(link.destination).into_owned();
            for span in parse_with(link.label, false) {
                out.push(InlineItem::Span(span.with_href(href.clone())));
            }
            text_start = cur.pos();
            continue;
        }

        if Emphasis::is_delimiter(b) {
            let count = cur.run_len(b);
            let before = cur.prev_char();
            let after = s[start + count..].chars().next();
            let (can_open, can_close) = Emphasis::flanking(b, before, after);
            let eligible = b != Emphasis::TILDE || count == Emphasis::TILDE_RUN;

            if eligible && (can_open || can_close) {
                flush_text(&mut out, s, text_start, start);
                out.push(InlineItem::Delimiter(DelimiterRun::new(
                    b, count, can_open, can_close,
                )));
                cur.bump_n(count);
                text_start = cur.pos();
            } else {
                cur.bump_n(count);
            }
            continue;
        }

        if allow_links && let Some(url) = Autolink::try_parse(&mut cur) {
            flush_text(&mut out, s, text_start, start);
            out.push(InlineItem::Span(InlineSpan::plain(url).with_href(url)));
            text_start = cur.pos();
            continue;
        }

        cur.bump();
    }

    flush_text(&mut out, s, text_start, cur.pos().min(s.len()));
    out
}

/// Second pass: pair closers with the nearest eligible opener.
///
/// Delimiters live in a doubly linked list over `items`. Once a pair matches,
/// every delimiter between them is unlinked, so it can no longer pair and
/// renders as literal text. A run with chars left over after a match is
/// tried again, so `***x***` yields bold and italic on `x`.
///
/// `openers_bottom` records, per (char, closer can open, length mod 3), how
/// far back a failed search already looked; later closers of the same shape
/// stop there, which keeps the pass linear.
fn process_emphasis(items: &mut [InlineItem]) {
    let delims: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.as_delimiter().is_some())
        .map(|(i, _)| i)
        .collect();
    let n = delims.len();
    let mut prev: Vec<Option<usize>> = (0..n).map(|k| k.checked_sub(1)).collect();
    let mut next: Vec<Option<usize>> = (0..n).map(|k| Some(k + 1).filter(|&j| j < n)).collect();
    let mut openers_bottom: HashMap<(u8, bool, usize), usize> = HashMap::new();
    let mut marks = MarkSweep::new(items.len());

    let mut closer = (n > 0).then_some(0);
    while let Some(c) = closer {
        let Some(cd) = items[delims[c]]
            .as_delimiter()
            .filter(|d| d.can_close && d.count > 0)
            .cloned()
        else {
            closer = next[c];
            continue;
        };

        let key = (cd.ch, cd.can_open, cd.orig % 3);
        let floor = openers_bottom.get(&key).copied();
        let mut candidate = prev[c];
        let mut opener = None;
        while let Some(p) = candidate {
            if floor.is_some_and(|bottom| p <= bottom) {
                break;
            }
            let eligible = items[delims[p]].as_delimiter().is_some_and(|o| {
                o.ch == cd.ch && o.can_open && o.count > 0 && !rule_of_three(o, &cd)
            });
            if eligible {
                opener = Some(p);
                break;
            }
            candidate = prev[p];
        }

        let Some(p) = opener else {
            if let Some(bottom) = prev[c] {
                openers_bottom.insert(key, bottom);
            }
            let after = next[c];
            if !cd.can_open {
                unlink(&mut prev, &mut next, c);
            }
            closer = after;
            continue;
        };

        let opener_count = items[delims[p]].as_delimiter().map_or(0, |o| o.count);
        let used = if cd.ch == Emphasis::TILDE {
            Emphasis::TILDE_RUN
        } else if opener_count >= 2 && cd.count >= 2 {
            2
        } else {
            1
        };
        marks.add(delims[p] + 1, delims[c], Emphasis::mark(cd.ch, used));

        next[p] = Some(c);
        prev[c] = Some(p);
        items[delims[p]].consume(used);
        items[delims[c]].consume(used);
        if opener_count <= used {
            unlink(&mut prev, &mut next, p);
        }
        if cd.count <= used {
            let after = next[c];
            unlink(&mut prev, &mut next, c);
            closer = after;
        }
    }

    marks.apply(items);
}

fn unlink(prev: &mut [Option<usize>], next: &mut [Option<usize>], k: usize) {
    if let Some(p) = prev[k] {
        next[p] = next[k];
    }
    if let Some(n) = next[k] {
        prev[n] = prev[k];
    }
}

/// Difference counters for bold, italic and strikethrough, applied to the
/// items in one sweep once all pairs are known.
struct MarkSweep {
    deltas: Vec<[i32; 3]>,
}

impl MarkSweep {
    const KINDS: [Annotations; 3] = [
        Annotations::BOLD,
        Annotations::ITALIC,
        Annotations::STRIKETHROUGH,
    ];

    fn new(len: usize) -> Self {
        Self {
            deltas: vec![[0; 3]; len + 1],
        }
    }

    /// Marks items `start..end` with `mark`.
    fn add(&mut self, start: usize, end: usize, mark: Annotations) {
        if start >= end {
            return;
        }
        if let Some(k) = Self::KINDS.iter().position(|&kind| kind == mark) {
            self.deltas[start][k] += 1;
            self.deltas[end][k] -= 1;
        }
    }

    fn apply(self, items: &mut [InlineItem]) {
        let mut depth = [0i32; 3];
        for (item, delta) in items.iter_mut().zip(&self.deltas) {
            for (k, kind) in Self::KINDS.iter().enumerate() {
                depth[k] += delta[k];
                if depth[k] > 0 {
                    item.annotate(*kind);
                }
            }
        }
    }
}

/// A run that can both open and close cannot pair with another if their
/// combined length is a multiple of 3, unless both are.
fn rule_of_three(opener: &DelimiterRun, closer: &DelimiterRun) -> bool {
    if closer.ch == Emphasis::TILDE {
        return false;
    }
    (opener.can_close || closer.can_open)
        && (opener.orig + closer.orig) % 3 == 0
        && !(opener.orig % 3 == 0 && closer.orig % 3 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rich_text::plain_text;
    use pretty_assertions::assert_eq;

    fn bold(t: &str) -> InlineSpan {
        InlineSpan::new(t, Annotations::BOLD)
    }

    fn italic(t: &str) -> InlineSpan {
        InlineSpan::new(t, Annotations::ITALIC)
    }

    fn bold_italic(t: &str) -> InlineSpan {
        InlineSpan::new(t, Annotations::BOLD.with(Annotations::ITALIC))
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse_inline("hello world"), vec![InlineSpan::plain("hello world")]);
    }

    #[test]
    fn empty_input_has_no_spans() {
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn nested_emphasis() {
        assert_eq!(
            parse_inline("**bold *and italic* text**"),
            vec![bold("bold "), bold_italic("and italic"), bold(" text")]
        );
    }

    #[test]
    fn triple_delimiters_are_bold_italic() {
        assert_eq!(parse_inline("***both***"), vec![bold_italic("both")]);
    }

    #[test]
    fn overlapping_delimiters_nest() {
        // The inner `*` closes the `**` run one char at a time, so every
        // pair resolves to emphasis and the text flattens to one italic run
        assert_eq!(parse_inline("*a **b* c**"), vec![italic("a b c")]);
    }

    #[test]
    fn closers_without_openers_stay_literal() {
        assert_eq!(
            parse_inline("a* b* c*"),
            vec![InlineSpan::plain("a* b* c*")]
        );
        assert_eq!(
            parse_inline("*x* y* *z*"),
            vec![
                italic("x"),
                InlineSpan::plain(" y* "),
                italic("z")
            ]
        );
    }

    #[test]
    fn delimiters_inside_a_pair_cannot_pair_outside_it() {
        assert_eq!(
            parse_inline("*a _b* c_"),
            vec![italic("a _b"), InlineSpan::plain(" c_")]
        );
    }

    #[test]
    fn underscore_variants() {
        assert_eq!(
            parse_inline("__strong__ and _em_"),
            vec![bold("strong"), InlineSpan::plain(" and "), italic("em")]
        );
    }

    #[test]
    fn intraword_underscores_are_literal() {
        assert_eq!(
            parse_inline("snake_case_name"),
            vec![InlineSpan::plain("snake_case_name")]
        );
    }

    #[test]
    fn intraword_stars_do_emphasize() {
        assert_eq!(
            parse_inline("un*frigging*believable"),
            vec![
                InlineSpan::plain("un"),
                italic("frigging"),
                InlineSpan::plain("believable")
            ]
        );
    }

    #[test]
    fn unmatched_opener_is_literal() {
        assert_eq!(parse_inline("*hello"), vec![InlineSpan::plain("*hello")]);
        assert_eq!(parse_inline("**hello*"), vec![InlineSpan::plain("*"), italic("hello")]);
    }

    #[test]
    fn lone_stars_between_spaces_are_literal() {
        assert_eq!(parse_inline("2 * 3 * 4"), vec![InlineSpan::plain("2 * 3 * 4")]);
    }

    #[test]
    fn strikethrough() {
        assert_eq!(
            parse_inline("~~gone~~ kept"),
            vec![
                InlineSpan::new("gone", Annotations::STRIKETHROUGH),
                InlineSpan::plain(" kept")
            ]
        );
    }

    #[test]
    fn single_tilde_is_literal() {
        assert_eq!(parse_inline("~approx~"), vec![InlineSpan::plain("~approx~")]);
    }

    #[test]
    fn code_span_suppresses_emphasis() {
        assert_eq!(
            parse_inline("`**not bold**`"),
            vec![InlineSpan::new("**not bold**", Annotations::CODE)]
        );
    }

    #[test]
    fn emphasis_wraps_code_span() {
        assert_eq!(
            parse_inline("**`x`**"),
            vec![InlineSpan::new("x", Annotations::BOLD.with(Annotations::CODE))]
        );
    }

    #[test]
    fn unclosed_code_span_becomes_text() {
        assert_eq!(
            parse_inline("`unclosed code"),
            vec![InlineSpan::plain("`unclosed code")]
        );
    }

    #[test]
    fn link_with_formatted_label() {
        assert_eq!(
            parse_inline("see [the **docs**](https://d.test)!"),
            vec![
                InlineSpan::plain("see "),
                InlineSpan::plain("the ").with_href("https://d.test"),
                bold("docs").with_href("https://d.test"),
                InlineSpan::plain("!"),
            ]
        );
    }

    #[test]
    fn emphasis_around_link() {
        assert_eq!(
            parse_inline("*[a](u)*"),
            vec![italic("a").with_href("u")]
        );
    }

    #[test]
    fn broken_link_is_literal() {
        assert_eq!(
            parse_inline("[not a link] (x)"),
            vec![InlineSpan::plain("[not a link] (x)")]
        );
    }

    #[test]
    fn bare_url_becomes_link() {
        assert_eq!(
            parse_inline("go to https://x.test."),
            vec![
                InlineSpan::plain("go to "),
                InlineSpan::plain("https://x.test").with_href("https://x.test"),
                InlineSpan::plain("."),
            ]
        );
    }

    #[test]
    fn escapes_and_entities() {
        assert_eq!(
            parse_inline(r"\*not italic\* &amp; co"),
            vec![InlineSpan::plain("*not italic* & co")]
        );
    }

    #[test]
    fn emphasis_across_lines_of_a_paragraph() {
        assert_eq!(
            parse_inline("**one\ntwo**"),
            vec![bold("one\ntwo")]
        );
    }

    #[test]
    fn coverage_of_unmatched_soup() {
        let input = "*_~`[](**__~~";
        let spans = parse_inline(input);
        assert_eq!(plain_text(&spans), input);
    }

    #[test]
    fn multibyte_text_around_delimiters() {
        assert_eq!(
            parse_inline("café *naïve* 日本"),
            vec![
                InlineSpan::plain("café "),
                italic("naïve"),
                InlineSpan::plain(" 日本")
            ]
        );
    }
}

/// Which character a fence is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn char(self) -> char {
        match self {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        }
    }
}

/// What a line looks like when it opens or closes a fence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    /// Length of the delimiter run (at least 3).
    pub len: usize,
    /// Trimmed info string after the run (language hint on openers).
    pub info: String,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";
    /// Columns a closer may be indented past its opener.
    pub const MAX_CLOSER_INDENT: usize = 3;

    /// Detects a fence signature on a line with leading whitespace already stripped.
    pub fn sig(remainder: &str) -> Option<FenceSig> {
        let t = remainder.trim_end_matches(['\r', '\n']);
        let kind = if t.starts_with(Self::BACKTICKS) {
            FenceKind::Backticks
        } else if t.starts_with(Self::TILDES) {
            FenceKind::Tildes
        } else {
            return None;
        };

        let ch = kind.char();
        let len = t.chars().take_while(|&c| c == ch).count();
        let info = t[len..].trim();

        // A backtick info string may not contain backticks (`` ```a`b `` is inline code).
        if kind == FenceKind::Backticks && info.contains('`') {
            return None;
        }

        Some(FenceSig {
            kind,
            len,
            info: info.to_string(),
        })
    }

    /// Whether `sig` closes a fence opened by `open`.
    ///
    /// The closer must use the same character, be at least as long as the
    /// opener, and carry no info string. `extra_indent` is how many columns
    /// deeper than the opener the closing line starts; four or more makes
    /// the line content.
    pub fn closes(open: &FenceSig, sig: Option<&FenceSig>, extra_indent: usize) -> bool {
        match sig {
            Some(s) => {
                s.kind == open.kind
                    && s.len >= open.len
                    && s.info.is_empty()
                    && extra_indent <= Self::MAX_CLOSER_INDENT
            }
            None => false,
        }
    }
}

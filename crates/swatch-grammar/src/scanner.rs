use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// ── Terminals ─────────────────────────────────────────────────────────────

/// Terminal patterns of the gradient grammar.
///
/// Every pattern is anchored with `^` and is matched against the input that
/// remains after the scanner cursor.
pub mod terminals {
    use super::*;

    fn anchored(pattern: &str) -> Regex {
        // Patterns are literals in this module; a failure here is a typo.
        Regex::new(pattern).expect("valid terminal pattern")
    }

    const NUMBER: &str = r"-?(?:[0-9]*\.[0-9]+|[0-9]+\.?)";

    pub static LINEAR_GRADIENT: Lazy<Regex> =
        Lazy::new(|| anchored(r"(?i)^(-(webkit|o|ms|moz)-)?(linear-gradient)"));
    pub static REPEATING_LINEAR_GRADIENT: Lazy<Regex> =
        Lazy::new(|| anchored(r"(?i)^(-(webkit|o|ms|moz)-)?(repeating-linear-gradient)"));
    pub static RADIAL_GRADIENT: Lazy<Regex> =
        Lazy::new(|| anchored(r"(?i)^(-(webkit|o|ms|moz)-)?(radial-gradient)"));
    pub static REPEATING_RADIAL_GRADIENT: Lazy<Regex> =
        Lazy::new(|| anchored(r"(?i)^(-(webkit|o|ms|moz)-)?(repeating-radial-gradient)"));

    pub static SIDE_OR_CORNER: Lazy<Regex> = Lazy::new(|| {
        anchored(concat!(
            r"(?i)^to (left (top|bottom)|right (top|bottom)|top (left|right)|bottom (left|right)",
            r"|left|right|top|bottom)",
        ))
    });
    pub static EXTENT_KEYWORD: Lazy<Regex> = Lazy::new(|| {
        anchored(r"^(closest-side|closest-corner|farthest-side|farthest-corner|contain|cover)")
    });
    pub static POSITION_KEYWORD: Lazy<Regex> =
        Lazy::new(|| anchored(r"(?i)^(left|center|right|top|bottom)"));

    pub static PIXEL_VALUE: Lazy<Regex> = Lazy::new(|| anchored(&format!("^({NUMBER})px")));
    pub static PERCENTAGE_VALUE: Lazy<Regex> = Lazy::new(|| anchored(&format!("^({NUMBER})%")));
    pub static EM_VALUE: Lazy<Regex> = Lazy::new(|| anchored(&format!("^({NUMBER})em")));
    pub static ANGLE_VALUE: Lazy<Regex> = Lazy::new(|| anchored(&format!("^({NUMBER})deg")));
    pub static NUMBER_VALUE: Lazy<Regex> =
        Lazy::new(|| anchored(r"^([0-9]*\.[0-9]+|[0-9]+\.?)"));

    pub static START_CALL: Lazy<Regex> = Lazy::new(|| anchored(r"^\("));
    pub static END_CALL: Lazy<Regex> = Lazy::new(|| anchored(r"^\)"));
    pub static COMMA: Lazy<Regex> = Lazy::new(|| anchored(r"^,"));

    pub static HEX_COLOR: Lazy<Regex> = Lazy::new(|| anchored(r"^#([0-9a-fA-F]+)"));
    pub static LITERAL_COLOR: Lazy<Regex> = Lazy::new(|| anchored(r"^([a-zA-Z]+)"));
    pub static RGB_COLOR: Lazy<Regex> = Lazy::new(|| anchored(r"(?i)^rgb"));
    pub static RGBA_COLOR: Lazy<Regex> = Lazy::new(|| anchored(r"(?i)^rgba"));

    pub static CIRCLE: Lazy<Regex> = Lazy::new(|| anchored(r"(?i)^(circle)"));
    pub static ELLIPSE: Lazy<Regex> = Lazy::new(|| anchored(r"(?i)^(ellipse)"));
    pub static AT: Lazy<Regex> = Lazy::new(|| anchored(r"^at"));
}

// ── Checkpoint ────────────────────────────────────────────────────────────

/// Saved cursor position, used to undo a failed optional match.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Checkpoint(usize);

// ── Scanner ───────────────────────────────────────────────────────────────

/// Left-to-right cursor over gradient source text.
///
/// This is the only place the cursor moves. Productions that need to try
/// an optional construct take a [`Checkpoint`] first and [`restore`] it when
/// the attempt fails.
///
/// [`restore`]: Scanner::restore
pub struct Scanner<'s> {
    src: &'s str,
    pos: usize,
}

impl<'s> Scanner<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0 }
    }

    /// Input that has not been consumed yet.
    pub fn remaining(&self) -> &'s str {
        &self.src[self.pos..]
    }

    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.pos)
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.0;
    }

    /// Skips blanks, then matches `pattern` at the cursor.
    ///
    /// Leading whitespace is consumed even when the pattern then fails.
    /// On success the cursor moves past the whole match.
    pub fn scan(&mut self, pattern: &Regex) -> Option<Captures<'s>> {
        self.skip_blank();
        let src: &'s str = self.src;
        let captures = pattern.captures(&src[self.pos..])?;
        let matched = captures.get(0).map(|m| m.end()).unwrap_or(0);
        self.pos += matched;
        Some(captures)
    }

    /// Like [`scan`](Self::scan) but returns a single capture group.
    pub fn scan_group(&mut self, pattern: &Regex, group: usize) -> Option<&'s str> {
        let captures = self.scan(pattern)?;
        Some(captures.get(group).map(|m| m.as_str()).unwrap_or(""))
    }

    /// Consumes a run of spaces, tabs and line breaks.
    pub fn skip_blank(&mut self) {
        let rest = &self.src[self.pos..];
        let trimmed = rest.trim_start_matches([' ', '\t', '\n', '\r']);
        self.pos += rest.len() - trimmed.len();
    }
}

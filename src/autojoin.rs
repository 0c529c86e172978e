//! Rejoin CJK text that was hard-wrapped across lines.
//!
//! A line break sitting between two CJK characters carries no meaning in
//! Chinese or Japanese prose, yet Markdown renders it as a space. The helpers
//! here delete such breaks, together with any spaces that indent the
//! continuation line, before block structure is recognised.
//!
//! Only the two characters touching the break are inspected. A break is kept
//! whenever either of them is not CJK, which leaves blank lines, list markers
//! and Latin text wrapping alone.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

use crate::cjk::{contains_cjk, is_cjk};

// A newline followed by the spaces indenting the next line. Tabs are not
// skipped.
static BOUNDARY_RE: LazyLock<Regex> = lazy_regex!(r"\n[ ]*", "valid line boundary regex");

/// Remove every line break that sits between two CJK characters.
///
/// The spaces following a removed break are dropped as well. Boundaries are
/// judged independently, so a CJK run broken over many consecutive lines is
/// rejoined in a single pass.
///
/// Returns the input unchanged (borrowed) when no boundary qualifies.
///
/// # Examples
///
/// ```
/// use cjk_autojoin::autojoin_text;
/// assert_eq!(autojoin_text("これは\n  テストです。"), "これはテストです。");
/// assert_eq!(autojoin_text("これは\n\nテスト"), "これは\n\nテスト");
/// ```
#[must_use]
pub fn autojoin_text(text: &str) -> Cow<'_, str> {
    if !contains_cjk(text) {
        return Cow::Borrowed(text);
    }

    let mut out = String::new();
    let mut last = 0;
    let mut joined = 0usize;

    for m in BOUNDARY_RE.find_iter(text) {
        let before = text[..m.start()].chars().next_back();
        let after = text[m.end()..].chars().next();
        if before.is_some_and(is_cjk) && after.is_some_and(is_cjk) {
            out.push_str(&text[last..m.start()]);
            last = m.end();
            joined += 1;
        }
    }

    if joined == 0 {
        return Cow::Borrowed(text);
    }
    out.push_str(&text[last..]);
    tracing::trace!(joined, "rejoined CJK line boundaries");
    Cow::Owned(out)
}

/// Apply [`autojoin_text`] to a document held as a sequence of lines.
///
/// Lines are joined with `\n`, rewritten and split again, so the output never
/// has more lines than the input. An empty slice yields an empty vector.
///
/// # Examples
///
/// ```
/// use cjk_autojoin::autojoin_lines;
/// let lines = vec!["これは".to_string(), "テストです。".to_string()];
/// assert_eq!(autojoin_lines(&lines), vec!["これはテストです。".to_string()]);
/// ```
#[must_use]
pub fn autojoin_lines(lines: &[String]) -> Vec<String> {
    if lines.len() < 2 {
        return lines.to_vec();
    }
    let source = lines.join("\n");
    match autojoin_text(&source) {
        Cow::Borrowed(_) => lines.to_vec(),
        Cow::Owned(text) => text.split('\n').map(str::to_string).collect(),
    }
}

//! CJK character classification.
//!
//! The class is deliberately narrow: CJK symbols and punctuation, Hiragana,
//! Katakana and the CJK Unified Ideographs block. Hangul, half-width forms and
//! the ideograph extension planes are not members.

/// Inclusive code point ranges treated as CJK.
pub const CJK_RANGES: [(char, char); 4] = [
    // CJK symbols and punctuation
    ('\u{3000}', '\u{303F}'),
    // Hiragana
    ('\u{3040}', '\u{309F}'),
    // Katakana
    ('\u{30A0}', '\u{30FF}'),
    // CJK Unified Ideographs
    ('\u{4E00}', '\u{9FFF}'),
];

/// Return `true` when `ch` falls in one of [`CJK_RANGES`].
///
/// # Examples
///
/// ```
/// use cjk_autojoin::is_cjk;
/// assert!(is_cjk('あ'));
/// assert!(is_cjk('、'));
/// assert!(!is_cjk('a'));
/// assert!(!is_cjk('，'));
/// ```
#[must_use]
#[inline]
pub fn is_cjk(ch: char) -> bool {
    CJK_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&ch))
}

/// Return `true` when any character of `text` is CJK.
#[must_use]
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(is_cjk)
}

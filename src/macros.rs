//! Helper macros used across the crate.

/// Lazily compile a [`Regex`](regex::Regex) with a custom panic message.
///
/// The pattern is compiled on first use and shared by every caller after
/// that, so hot paths such as [`crate::autojoin_lines`] never recompile it.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
///
/// use regex::Regex;
/// static RE: LazyLock<Regex> = cjk_autojoin::lazy_regex!(r"\n[ ]*", "line boundary");
/// assert!(RE.is_match("a\n  b"));
/// ```
#[macro_export]
macro_rules! lazy_regex {
    ($pattern:expr, $msg:expr $(,)?) => {
        LazyLock::new(|| Regex::new($pattern).expect($msg))
    };
}

//! Fenced code block tracking.
//!
//! The pipeline must hand prose-scoped stages only the text that lies outside
//! fenced code blocks. [`FenceTracker`] follows fence state line by line and
//! [`split_segments`] uses it to cut a document into prose runs and verbatim
//! lines.

use std::sync::LazyLock;

use regex::Regex;

// Capture: indent, fence run of 3+ backticks/tildes, and the trailing info
// string.
static FENCE_RE: LazyLock<Regex> =
    lazy_regex!(r"^([ \t]*)(`{3,}|~{3,})([^\r\n]*)$", "valid fence regex");

/// Return fence components if `line` is a fence marker.
///
/// The tuple holds the leading indentation, the marker run and the info
/// string.
///
/// # Examples
///
/// ```
/// use cjk_autojoin::fences::is_fence;
/// assert_eq!(is_fence("```rust"), Some(("", "```", "rust")));
/// assert_eq!(is_fence("  ~~~~"), Some(("  ", "~~~~", "")));
/// assert!(is_fence("``inline``").is_none());
/// ```
#[must_use]
#[rustfmt::skip]
pub fn is_fence(line: &str) -> Option<(&str, &str, &str)> {
    FENCE_RE.captures(line).map(|cap| {
        let indent = cap.get(1).map_or("", |m| m.as_str());
        let fence  = cap.get(2).map_or("", |m| m.as_str());
        let info   = cap.get(3).map_or("", |m| m.as_str());
        (indent, fence, info)
    })
}

/// Tracks fenced code block state across lines.
///
/// A block opened with a run of backticks closes only on a run of the same
/// character at least as long. Other fence-like lines inside the block are
/// treated as content.
#[derive(Debug, Default)]
pub struct FenceTracker {
    state: Option<(char, usize)>,
}

impl FenceTracker {
    /// Create a new tracker with no active fence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the tracker with a potential fence line.
    ///
    /// Returns `true` when the line opens or closes a block. A closing fence
    /// may carry only whitespace after its marker; a marker with an info
    /// string inside an open block is content.
    #[must_use]
    pub fn observe(&mut self, line: &str) -> bool {
        let Some((_indent, fence, info)) = is_fence(line) else {
            return false;
        };

        let mut chars = fence.chars();
        let marker_ch = chars.next().unwrap_or('`');
        let marker_len = chars.count() + 1;

        match self.state {
            Some((open_ch, open_len))
                if marker_ch == open_ch && marker_len >= open_len && info.trim().is_empty() =>
            {
                self.state = None;
                true
            }
            Some(_) => false,
            None => {
                self.state = Some((marker_ch, marker_len));
                true
            }
        }
    }

    /// Check whether the tracker is currently inside a fenced block.
    #[must_use]
    pub fn in_fence(&self) -> bool {
        self.state.is_some()
    }
}

/// A slice of a document as seen by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Consecutive lines outside any fenced block.
    Prose(Vec<String>),
    /// A fence marker or a line inside a fenced block.
    Verbatim(String),
}

/// Cut `lines` into prose runs and verbatim fence lines, preserving order.
///
/// Concatenating the segments back together reproduces `lines` exactly. An
/// unclosed fence extends to the end of the document.
#[must_use]
pub fn split_segments(lines: Vec<String>) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut buf = Vec::new();
    let mut tracker = FenceTracker::new();

    for line in lines {
        if tracker.observe(&line) || tracker.in_fence() {
            if !buf.is_empty() {
                segments.push(Segment::Prose(std::mem::take(&mut buf)));
            }
            segments.push(Segment::Verbatim(line));
            continue;
        }
        buf.push(line);
    }

    if !buf.is_empty() {
        segments.push(Segment::Prose(buf));
    }
    segments
}

//! Utility helpers shared across integration tests.
#![allow(dead_code, reason = "each test crate uses a different subset")]

use assert_cmd::Command;
use rstest::fixture;

/// Build a `Vec<String>` from a list of string slices.
///
/// Documents are handled as line vectors throughout the crate, so most
/// fixtures are written with this macro.
macro_rules! lines_vec {
    ($($line:expr),* $(,)?) => {
        vec![$($line.to_string()),*]
    };
}

/// Japanese prose hard-wrapped mid-sentence, with a paragraph break.
#[fixture]
pub fn wrapped_prose() -> Vec<String> {
    lines_vec!["吾輩は猫で", "ある。名前は", "まだ無い。", "", "どこで生れたか", "とんと見当がつかぬ。"]
}

/// Wrapped prose surrounding a fenced block that must survive untouched.
#[fixture]
pub fn fenced_prose() -> Vec<String> {
    lines_vec!["これは", "説明です。", "```text", "あ", "い", "```", "それから", "続きです。"]
}

/// Return a command for the crate's binary.
pub fn cli() -> Command {
    Command::cargo_bin("cjk-autojoin").expect("failed to create cargo command for cjk-autojoin")
}

/// Assert that no line break between two CJK characters survives in `lines`.
pub fn assert_no_cjk_breaks(lines: &[String]) {
    for pair in lines.windows(2) {
        let before = pair[0].chars().next_back();
        let after = pair[1].trim_start_matches(' ').chars().next();
        assert!(
            !(before.is_some_and(cjk_autojoin::is_cjk) && after.is_some_and(cjk_autojoin::is_cjk)),
            "unjoined CJK boundary between {:?} and {:?}",
            pair[0],
            pair[1]
        );
    }
}

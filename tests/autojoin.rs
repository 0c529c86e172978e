//! Integration tests for the CJK line-join rewrite.

use cjk_autojoin::{autojoin_lines, autojoin_text};

#[macro_use]
mod prelude;
use prelude::*;

#[test]
fn joins_break_between_cjk_characters() {
    let input = lines_vec!["これは", "テストです。"];
    assert_eq!(autojoin_lines(&input), lines_vec!["これはテストです。"]);
}

#[test]
fn blank_line_keeps_paragraphs_apart() {
    let input = lines_vec!["これは", "", "テストです。"];
    assert_eq!(autojoin_lines(&input), input);
}

#[test]
fn list_continuation_is_joined_without_indent() {
    let input = lines_vec!["- あ", "- い", "  う", "- え"];
    assert_eq!(autojoin_lines(&input), lines_vec!["- あ", "- いう", "- え"]);
}

#[test]
fn cjk_punctuation_qualifies_as_boundary() {
    let input = lines_vec!["これは、", "  です。"];
    assert_eq!(autojoin_lines(&input), lines_vec!["これは、です。"]);
}

#[test]
fn latin_after_indent_keeps_break() {
    let input = lines_vec!["これは、", "  abcです。"];
    assert_eq!(autojoin_lines(&input), input);
}

#[test]
fn latin_text_is_untouched() {
    let input = lines_vec!["a", "b"];
    assert_eq!(autojoin_lines(&input), input);
}

#[test]
fn latin_before_cjk_keeps_break() {
    let input = lines_vec!["see", "これ"];
    assert_eq!(autojoin_lines(&input), input);
}

#[rstest]
fn wrapped_paragraphs_are_rejoined(wrapped_prose: Vec<String>) {
    let out = autojoin_lines(&wrapped_prose);
    assert_eq!(
        out,
        lines_vec!["吾輩は猫である。名前はまだ無い。", "", "どこで生れたかとんと見当がつかぬ。"]
    );
    assert_no_cjk_breaks(&out);
}

#[rstest]
fn bare_rewrite_does_not_know_about_fences(fenced_prose: Vec<String>) {
    assert_eq!(
        autojoin_lines(&fenced_prose),
        lines_vec!["これは説明です。", "```text", "あい", "```", "それから続きです。"]
    );
}

#[rstest]
#[case("、")]
#[case("。")]
#[case("，")]
#[case("．")]
fn punctuation_in_list_items(
    #[case] p: &str,
    #[values("-", "*", "0.", "9.")] marker: &str,
) {
    let input = vec![
        format!("{marker} あ{p}"),
        format!("{marker} い"),
        format!("  う{p}"),
        format!("{marker} え"),
    ];
    let expected = vec![
        format!("{marker} あ{p}"),
        format!("{marker} いう{p}"),
        format!("{marker} え"),
    ];
    assert_eq!(autojoin_lines(&input), expected);
}

#[rstest]
#[case("、", true)]
#[case("。", true)]
#[case("，", false)]
#[case("．", false)]
fn only_cjk_block_punctuation_joins(#[case] p: &str, #[case] joins: bool) {
    let text = format!("これは{p}\n  です。");
    let expected = if joins {
        format!("これは{p}です。")
    } else {
        text.clone()
    };
    assert_eq!(autojoin_text(&text), expected);
}

#[test]
fn indentation_of_non_joined_lines_is_kept() {
    let input = lines_vec!["1. 項目", "   - sub", "   続き"];
    assert_eq!(autojoin_lines(&input), input);
}

#[test]
fn katakana_and_kanji_chain_across_many_lines() {
    let input = lines_vec!["カ", "  タ", "    カ", "ナ", "漢", "字"];
    assert_eq!(autojoin_lines(&input), lines_vec!["カタカナ漢字"]);
}

//! File helpers for rewriting Markdown documents.

use std::{fs, path::Path};

use crate::{
    extension::{AUTOJOIN_NAME, AUTOJOIN_PRIORITY, CjkAutojoin},
    pipeline::Pipeline,
};

/// Build the pipeline used by the file helpers and the CLI.
///
/// # Panics
/// Panics if registering `cjk_autojoin` on a fresh pipeline fails, which
/// would mean the host's built-in stages claim that name.
#[must_use]
pub fn default_pipeline() -> Pipeline {
    let mut pipeline = Pipeline::new();
    pipeline
        .register(Box::new(CjkAutojoin::new()), AUTOJOIN_NAME, AUTOJOIN_PRIORITY)
        .expect("fresh pipeline has no cjk_autojoin stage");
    pipeline
}

/// Run `text` through `pipeline`, ending the result with exactly one `\n`.
///
/// Terminators are normalised before the final newline is considered, so
/// CRLF input gains no extra blank line.
#[must_use]
pub fn process_text(pipeline: &Pipeline, text: &str) -> String {
    let mut out = pipeline.process(text);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Read `path` and return its rewritten contents with a trailing newline.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn process_file(pipeline: &Pipeline, path: &Path) -> std::io::Result<String> {
    let text = fs::read_to_string(path)?;
    Ok(process_text(pipeline, &text))
}

/// Rewrite a file in place with CJK line breaks removed.
///
/// # Errors
/// Returns an error if reading or writing the file fails.
pub fn rewrite(path: &Path) -> std::io::Result<()> {
    let fixed = process_file(&default_pipeline(), path)?;
    fs::write(path, fixed)
}

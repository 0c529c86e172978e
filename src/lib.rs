//! Rejoin hard-wrapped CJK prose before Markdown block parsing.
//!
//! Chinese and Japanese text is often wrapped at arbitrary characters in
//! source files. Markdown turns each of those line breaks into a space, which
//! is wrong for scripts that do not separate words with spaces. This crate
//! removes a line break, and the indentation after it, whenever both
//! neighbouring characters are CJK.
//!
//! [`autojoin_lines`] is the pure rewrite. [`Pipeline`] is a small host of
//! prioritised preprocessing stages; [`CjkAutojoin`] registers the rewrite
//! there so that it runs after line normalisation and before fenced code is
//! recognised, with fenced content passed through untouched.

#[macro_use]
mod macros;
#[macro_use]
#[doc(hidden)]
pub mod test_utils;

pub mod autojoin;
pub mod cjk;
pub mod error;
pub mod extension;
pub mod fences;
pub mod io;
pub mod pipeline;

pub use autojoin::{autojoin_lines, autojoin_text};
pub use cjk::{CJK_RANGES, contains_cjk, is_cjk};
pub use error::PipelineError;
pub use extension::{
    AUTOJOIN_NAME, AUTOJOIN_PRIORITY, CjkAutojoin, Extension, extension_by_name, make_extension,
};
pub use fences::{FenceTracker, Segment, is_fence, split_segments};
pub use io::{default_pipeline, process_file, process_text, rewrite};
pub use pipeline::{
    FENCED_CODE_PRIORITY, NORMALIZE_PRIORITY, NormalizeWhitespace, Pipeline, Preprocessor, Scope,
};

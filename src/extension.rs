//! Registration of the CJK line-join stage with a [`Pipeline`].
//!
//! The rewrite itself lives in [`crate::autojoin`] and knows nothing about
//! pipelines. This module wraps it as a [`Preprocessor`] and slots it in at
//! [`AUTOJOIN_PRIORITY`], after raw line normalisation and before fenced code
//! recognition.

use crate::{
    autojoin::autojoin_lines,
    error::{PipelineError, Result},
    pipeline::{Pipeline, Preprocessor, Scope},
};

/// Name under which the line-join stage is registered.
pub const AUTOJOIN_NAME: &str = "cjk_autojoin";

/// Priority of the line-join stage.
///
/// Sits strictly between [`NORMALIZE_PRIORITY`](crate::NORMALIZE_PRIORITY)
/// and [`FENCED_CODE_PRIORITY`](crate::FENCED_CODE_PRIORITY).
pub const AUTOJOIN_PRIORITY: f64 = 27.0;

/// Something that installs stages into a [`Pipeline`].
pub trait Extension {
    /// Register this extension's stages.
    ///
    /// # Errors
    /// Propagates any registration failure from the pipeline.
    fn extend(&self, pipeline: &mut Pipeline) -> Result<()>;
}

/// Removes line breaks between CJK characters.
///
/// Acts both as the [`Preprocessor`] and as the [`Extension`] that registers
/// it. The stage is prose scoped, so fenced code is never rejoined.
#[derive(Debug, Default, Clone, Copy)]
pub struct CjkAutojoin;

impl CjkAutojoin {
    /// Create the extension.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Preprocessor for CjkAutojoin {
    fn run(&self, lines: Vec<String>) -> Vec<String> {
        autojoin_lines(&lines)
    }

    fn scope(&self) -> Scope {
        Scope::Prose
    }
}

impl Extension for CjkAutojoin {
    fn extend(&self, pipeline: &mut Pipeline) -> Result<()> {
        pipeline.register(Box::new(*self), AUTOJOIN_NAME, AUTOJOIN_PRIORITY)
    }
}

/// Build the extension from host-supplied options.
///
/// No options are recognised; every key is logged and ignored so that hosts
/// passing configuration keep working as options are added.
///
/// # Examples
///
/// ```
/// use cjk_autojoin::{Extension, Pipeline, make_extension};
///
/// let mut pipeline = Pipeline::new();
/// make_extension([("width", "80")]).extend(&mut pipeline).unwrap();
/// assert!(pipeline.contains("cjk_autojoin"));
/// ```
#[must_use]
pub fn make_extension<I, K, V>(options: I) -> CjkAutojoin
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: std::fmt::Debug,
{
    for (key, value) in options {
        tracing::debug!(option = key.as_ref(), ?value, "ignoring unrecognised option");
    }
    CjkAutojoin::new()
}

/// Resolve an extension by the name it registers under.
///
/// # Errors
/// Returns [`PipelineError::UnknownExtension`] when `name` is not known.
pub fn extension_by_name(name: &str) -> Result<Box<dyn Extension>> {
    match name {
        AUTOJOIN_NAME => Ok(Box::new(CjkAutojoin::new())),
        other => Err(PipelineError::UnknownExtension(other.to_string())),
    }
}

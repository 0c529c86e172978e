//! A minimal host pipeline of named, prioritised preprocessing stages.
//!
//! Stages run in descending priority order, each receiving the lines emitted
//! by the previous one. Nothing here parses blocks or renders output; the
//! pipeline only models the line-level preprocessing phase so that stage
//! ordering and fence isolation can be exercised end to end.

use std::borrow::Cow;

use crate::{
    error::{PipelineError, Result},
    extension::extension_by_name,
    fences::{Segment, split_segments},
};

/// Priority of the host's raw line normalisation stage.
pub const NORMALIZE_PRIORITY: f64 = 30.0;

/// Priority at which a downstream fenced code recogniser expects to run.
///
/// Stages that must see the document before fences are interpreted register
/// above this value.
pub const FENCED_CODE_PRIORITY: f64 = 25.0;

/// Which part of the document a stage is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// Every line, fence markers and fenced content included.
    #[default]
    Document,
    /// Only runs of lines outside fenced code blocks.
    ///
    /// Fence markers and fenced content bypass the stage and are re-inserted
    /// verbatim at their original positions.
    Prose,
}

/// A line-level preprocessing stage.
pub trait Preprocessor: Send + Sync {
    /// Transform the lines of a document.
    fn run(&self, lines: Vec<String>) -> Vec<String>;

    /// The part of the document this stage wants to see.
    fn scope(&self) -> Scope {
        Scope::Document
    }
}

/// Normalises stray line terminators so later stages see `\n`-split lines.
///
/// A trailing `\r` left over from CRLF input is dropped, any other `\r`
/// splits the line, and a leading byte order mark is removed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NormalizeWhitespace;

impl Preprocessor for NormalizeWhitespace {
    fn run(&self, lines: Vec<String>) -> Vec<String> {
        let mut out = Vec::with_capacity(lines.len());
        for (idx, mut line) in lines.into_iter().enumerate() {
            if idx == 0 && line.starts_with('\u{FEFF}') {
                line.remove(0);
            }
            let body = line.strip_suffix('\r').unwrap_or(&line);
            if body.len() != line.len() || body.contains('\r') {
                out.extend(body.split('\r').map(str::to_string));
            } else {
                out.push(line);
            }
        }
        out
    }
}

struct Stage {
    name: String,
    priority: f64,
    processor: Box<dyn Preprocessor>,
}

/// An ordered collection of preprocessing stages.
///
/// # Examples
///
/// ```
/// use cjk_autojoin::Pipeline;
///
/// let pipeline = Pipeline::with_extensions(["cjk_autojoin"]).unwrap();
/// assert_eq!(pipeline.process("これは\nテストです。\n"), "これはテストです。\n");
/// ```
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.stages()).finish()
    }
}

impl Pipeline {
    /// Create a pipeline holding only the host's normalisation stage.
    #[must_use]
    pub fn new() -> Self {
        let mut pipeline = Self { stages: Vec::new() };
        pipeline.insert(Stage {
            name: "normalize_whitespace".to_string(),
            priority: NORMALIZE_PRIORITY,
            processor: Box::new(NormalizeWhitespace),
        });
        pipeline
    }

    /// Create a pipeline and load each named extension into it.
    ///
    /// # Errors
    /// Returns [`PipelineError::UnknownExtension`] for an unrecognised name, or
    /// any error raised while the extension registers its stages.
    pub fn with_extensions<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pipeline = Self::new();
        for name in names {
            extension_by_name(name.as_ref())?.extend(&mut pipeline)?;
        }
        Ok(pipeline)
    }

    /// Register a stage under `name` at `priority`.
    ///
    /// Higher priorities run earlier. Stages sharing a priority run in
    /// registration order.
    ///
    /// # Errors
    /// Returns [`PipelineError::DuplicateStage`] when `name` is taken and
    /// [`PipelineError::InvalidPriority`] when `priority` is not finite.
    pub fn register(
        &mut self,
        processor: Box<dyn Preprocessor>,
        name: impl Into<String>,
        priority: f64,
    ) -> Result<()> {
        let name = name.into();
        if !priority.is_finite() {
            return Err(PipelineError::InvalidPriority { name, priority });
        }
        if self.contains(&name) {
            return Err(PipelineError::DuplicateStage(name));
        }
        tracing::debug!(stage = %name, priority, "registered preprocessor");
        self.insert(Stage {
            name,
            priority,
            processor,
        });
        Ok(())
    }

    /// Remove the stage registered under `name`, returning it.
    pub fn deregister(&mut self, name: &str) -> Option<Box<dyn Preprocessor>> {
        let idx = self.stages.iter().position(|s| s.name == name)?;
        Some(self.stages.remove(idx).processor)
    }

    /// Return `true` when a stage is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.stages.iter().any(|s| s.name == name)
    }

    /// Stage names and priorities in execution order.
    pub fn stages(&self) -> impl Iterator<Item = (&str, f64)> {
        self.stages.iter().map(|s| (s.name.as_str(), s.priority))
    }

    /// Stage names in execution order.
    #[must_use]
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages().map(|(name, _)| name).collect()
    }

    /// Run every stage over `lines` in priority order.
    #[must_use]
    pub fn run_lines(&self, lines: Vec<String>) -> Vec<String> {
        self.stages.iter().fold(lines, |lines, stage| {
            let before = lines.len();
            let out = match stage.processor.scope() {
                Scope::Document => stage.processor.run(lines),
                Scope::Prose => run_on_prose(stage.processor.as_ref(), lines),
            };
            tracing::debug!(stage = %stage.name, before, after = out.len(), "ran preprocessor");
            out
        })
    }

    /// Ingest raw document text, run all stages and rejoin the lines.
    ///
    /// CRLF and lone CR terminators are converted to `\n` before the text is
    /// split, so the output always uses `\n`.
    #[must_use]
    pub fn process(&self, source: &str) -> String {
        let lines = ingest(source).split('\n').map(str::to_string).collect();
        self.run_lines(lines).join("\n")
    }

    fn insert(&mut self, stage: Stage) {
        let idx = self
            .stages
            .iter()
            .position(|s| s.priority < stage.priority)
            .unwrap_or(self.stages.len());
        self.stages.insert(idx, stage);
    }
}

fn ingest(source: &str) -> Cow<'_, str> {
    let source = source.strip_prefix('\u{FEFF}').unwrap_or(source);
    if source.contains('\r') {
        Cow::Owned(source.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(source)
    }
}

fn run_on_prose(processor: &dyn Preprocessor, lines: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    for segment in split_segments(lines) {
        match segment {
            Segment::Prose(run) => out.extend(processor.run(run)),
            Segment::Verbatim(line) => out.push(line),
        }
    }
    out
}

//! Error type for pipeline assembly.
//!
//! Running a pipeline cannot fail; only registering stages and resolving
//! extensions by name can.

/// Errors raised while assembling a [`Pipeline`](crate::Pipeline).
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PipelineError {
    /// A stage with this name is already registered.
    #[error("a stage named `{0}` is already registered")]
    DuplicateStage(String),

    /// The priority is NaN or infinite and cannot be ordered.
    #[error("stage `{name}` has an unusable priority {priority}")]
    InvalidPriority { name: String, priority: f64 },

    /// No extension is known under this name.
    #[error("unknown extension `{0}`")]
    UnknownExtension(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PipelineError>;

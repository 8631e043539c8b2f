use thiserror::Error;

/// Failure of one formatting stage.
///
/// The renumbering passes are total over their input, so the only failure
/// mode the pipeline surfaces is a stage that panicked. The document is
/// never half-rewritten: callers keep their original text when this is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{stage} stage failed: {message}")]
pub struct StageFailure {
    /// Name of the stage that failed.
    pub stage: String,
    /// Captured failure message.
    pub message: String,
}

impl StageFailure {
    /// Create a stage failure
    pub fn new(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
            message: message.into(),
        }
    }
}

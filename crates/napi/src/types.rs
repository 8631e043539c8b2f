//! NAPI-exposed data structures.

use napi_derive::napi;
use outfix_core::{FormatOptions, NumberingOptions};

/// Result of a single renumbering operation.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct FixResult {
    /// Whether the operation completed.
    pub success: bool,
    /// Rewritten document text (null on failure).
    pub text: Option<String>,
    /// Number of line positions that changed.
    pub changed_lines: u32,
    /// Failure message (null on success).
    pub error: Option<String>,
}

/// Change summary for one pipeline stage.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct StageChange {
    /// Stage name (`numbering` or `footnotes`).
    pub stage: String,
    /// Lines the stage changed relative to its own input.
    pub changed_lines: u32,
}

/// Result of running the full formatting pipeline.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct FormatResult {
    /// Whether every stage completed.
    pub success: bool,
    /// Rewritten document text (null on failure).
    pub text: Option<String>,
    /// Lines changed between the input and the final text.
    pub changed_lines: u32,
    /// Per-stage change summaries in run order (empty on failure).
    pub stages: Vec<StageChange>,
    /// Failure message naming the failing stage (null on success).
    pub error: Option<String>,
}

/// Configuration accepted by the formatting functions.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct FormatConfig {
    /// Columns per tab when measuring list indentation. Defaults to 4.
    pub tab_width: Option<u32>,
    /// Run the section and list numbering stage. Defaults to true.
    pub numbering: Option<bool>,
    /// Run the footnote renumbering stage. Defaults to true.
    pub footnotes: Option<bool>,
}

impl FormatConfig {
    /// Resolve the config into core pipeline options.
    pub(crate) fn to_options(&self) -> FormatOptions {
        let mut numbering = NumberingOptions::standard();
        if let Some(tab_width) = self.tab_width {
            numbering.tab_width = tab_width as usize;
        }
        FormatOptions {
            numbering,
            fix_numbering: self.numbering.unwrap_or(true),
            fix_footnotes: self.footnotes.unwrap_or(true),
        }
    }
}

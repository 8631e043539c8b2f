//! Staged document formatting.
//!
//! A pipeline runs named rewrite stages in order, feeding each stage the
//! previous stage's output. Stages are pure text transforms; a panicking
//! stage is caught and reported as a [`StageFailure`] so callers keep their
//! original document.

use std::panic::{self, AssertUnwindSafe};

use crate::diff::count_changed_text_lines;
use crate::error::StageFailure;
use crate::footnotes::renumber_footnotes;
use crate::numbering::{DocumentRewrite, NumberingOptions, renumber_outline};

/// Name of the section and list numbering stage.
pub const NUMBERING_STAGE: &str = "numbering";
/// Name of the footnote renumbering stage.
pub const FOOTNOTES_STAGE: &str = "footnotes";

/// A single document rewrite stage.
///
/// Implemented for free by any `Fn(&str) -> DocumentRewrite`, so plain
/// functions and closures can be added to a pipeline directly.
pub trait DocumentTransform {
    /// Rewrite `input`, reporting how many lines changed.
    fn apply(&self, input: &str) -> DocumentRewrite;
}

impl<F> DocumentTransform for F
where
    F: Fn(&str) -> DocumentRewrite,
{
    fn apply(&self, input: &str) -> DocumentRewrite {
        self(input)
    }
}

/// Change summary for one completed stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    /// Stage name as registered with the pipeline.
    pub stage: String,
    /// Lines the stage changed relative to its own input.
    pub changed_lines: usize,
}

/// Result of a completed pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatReport {
    /// Final document text.
    pub text: String,
    /// Lines changed between the pipeline's input and its final output.
    /// This is a fresh comparison, not a sum: stages may touch the same
    /// line, and a later stage may undo an earlier edit.
    pub changed_lines: usize,
    /// Per-stage change summaries, in run order.
    pub stages: Vec<StageReport>,
}

/// Ordered collection of named rewrite stages.
#[derive(Default)]
pub struct FormatPipeline {
    stages: Vec<(String, Box<dyn DocumentTransform>)>,
}

impl FormatPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named stage to the end of the pipeline.
    pub fn add_stage<T>(&mut self, name: impl Into<String>, stage: T)
    where
        T: DocumentTransform + 'static,
    {
        self.stages.push((name.into(), Box::new(stage)));
    }

    /// Run every stage over `input`.
    ///
    /// Stops at the first stage that fails; the error names that stage and
    /// no partial text is returned.
    pub fn run(&self, input: &str) -> Result<FormatReport, StageFailure> {
        let mut text = input.to_string();
        let mut stages = Vec::with_capacity(self.stages.len());

        for (name, stage) in &self.stages {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| stage.apply(&text)));
            match outcome {
                Ok(rewrite) => {
                    stages.push(StageReport {
                        stage: name.clone(),
                        changed_lines: rewrite.changed_lines,
                    });
                    text = rewrite.text;
                }
                Err(payload) => {
                    let failure = StageFailure::new(name.clone(), panic_message(payload));
                    log::warn!("{}", failure);
                    return Err(failure);
                }
            }
        }

        Ok(FormatReport {
            changed_lines: count_changed_text_lines(input, &text),
            text,
            stages,
        })
    }
}

/// Options for the standard formatting pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Options forwarded to the numbering stage.
    pub numbering: NumberingOptions,
    /// Run the section and list numbering stage.
    pub fix_numbering: bool,
    /// Run the footnote renumbering stage.
    pub fix_footnotes: bool,
}

impl FormatOptions {
    /// Run both stages with default numbering options.
    pub const fn standard() -> Self {
        Self {
            numbering: NumberingOptions::standard(),
            fix_numbering: true,
            fix_footnotes: true,
        }
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Build the standard pipeline: numbering first, then footnotes, with
/// either stage omitted when its toggle is off.
pub fn standard_pipeline(options: FormatOptions) -> FormatPipeline {
    let mut pipeline = FormatPipeline::new();
    if options.fix_numbering {
        let numbering = options.numbering;
        pipeline.add_stage(NUMBERING_STAGE, move |text: &str| {
            renumber_outline(text, numbering)
        });
    }
    if options.fix_footnotes {
        pipeline.add_stage(FOOTNOTES_STAGE, renumber_footnotes);
    }
    pipeline
}

/// Run the standard formatting pipeline over a document.
pub fn format_document(text: &str, options: FormatOptions) -> Result<FormatReport, StageFailure> {
    standard_pipeline(options).run(text)
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unexpected panic".to_string()
    }
}

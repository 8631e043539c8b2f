#![deny(missing_docs)]
//! Node.js bindings that surface outfix's renumbering engine.

use napi_derive::napi;
use outfix_core::FormatOptions;

/// Batch processing types.
pub mod batch;
/// NAPI-exposed data structures.
pub mod types;

pub use batch::*;
pub use types::*;

/// Fixes section and list numbering across a whole document.
///
/// Runs only the numbering stage; footnotes are left alone. Failures are
/// reported in the result object rather than thrown, so callers can keep
/// the original text.
///
/// # Arguments
///
/// * `source` - The full document text
/// * `config` - Optional configuration (only `tabWidth` applies here)
///
/// # Returns
///
/// Returns a `FixResult` with the rewritten text and changed-line count.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const { fixNumbering } = require('outfix-napi');
///
/// const result = fixNumbering('1. a\n1. b');
/// console.log(result.text); // '1. a\n2. b'
/// ```
#[napi(js_name = "fixNumbering")]
pub fn fix_numbering(source: String, config: Option<FormatConfig>) -> napi::Result<FixResult> {
    let mut options = config.unwrap_or_default().to_options();
    options.fix_numbering = true;
    options.fix_footnotes = false;
    Ok(run_fix(&source, options))
}

/// Renumbers footnote declarations and their references to a contiguous
/// sequence, assigned in declaration order.
#[napi(js_name = "fixFootnotes")]
pub fn fix_footnotes(source: String) -> napi::Result<FixResult> {
    let mut options = FormatOptions::standard();
    options.fix_numbering = false;
    Ok(run_fix(&source, options))
}

/// Runs the full formatting pipeline: numbering first, then footnotes.
///
/// # Arguments
///
/// * `source` - The full document text
/// * `config` - Optional configuration (tab width and per-stage toggles)
///
/// # Returns
///
/// Returns a `FormatResult` with the rewritten text, an overall changed-line
/// count, and a per-stage breakdown.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const { formatDocument } = require('outfix-napi');
///
/// const result = formatDocument(text, { tabWidth: 8 });
/// for (const stage of result.stages) {
///   console.log(`${stage.stage}: ${stage.changedLines} lines`);
/// }
/// ```
#[napi(js_name = "formatDocument")]
pub fn format_document(source: String, config: Option<FormatConfig>) -> napi::Result<FormatResult> {
    let options = config.unwrap_or_default().to_options();
    Ok(run_format(&source, options))
}

/// Counts how many line positions differ between two documents.
///
/// Lines are compared index by index; when the documents have different
/// line counts, the surplus lines all count as changed.
#[napi(js_name = "countChangedLines")]
pub fn count_changed_lines(original: String, fixed: String) -> u32 {
    clamp_count(outfix_core::count_changed_text_lines(&original, &fixed))
}

/// Formats multiple documents in parallel using Rayon.
///
/// This function processes documents concurrently, leveraging all available
/// CPU cores (or a specified maximum). Each document still gets the plain
/// single-threaded pipeline.
///
/// # Arguments
///
/// * `inputs` - Array of documents to format, each with an id and source
/// * `options` - Optional batch processing options (thread count, error handling, config)
///
/// # Returns
///
/// Returns a `BatchProcessingResult` containing individual results and statistics.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const { formatBatch } = require('outfix-napi');
///
/// const inputs = [
///   { id: 'notes.txt', source: '1. a\n1. b' },
///   { id: 'draft.txt', source: '2. Overview' },
/// ];
///
/// const result = formatBatch(inputs, { continueOnError: true });
/// console.log(`Processed ${result.stats.total} documents in ${result.stats.processingTimeMs}ms`);
/// ```
#[napi(js_name = "formatBatch")]
pub fn format_batch(
    inputs: Vec<BatchInput>,
    options: Option<BatchOptions>,
) -> napi::Result<BatchProcessingResult> {
    use rayon::prelude::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Instant;

    let start = Instant::now();
    let opts = options.unwrap_or_default();
    let continue_on_error = opts.continue_on_error.unwrap_or(true);
    let format_options = opts.config.unwrap_or_default().to_options();

    // Configure thread pool if max_threads is specified
    let pool = if let Some(max_threads) = opts.max_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(max_threads as usize)
            .build()
            .ok()
    } else {
        None
    };

    let total = inputs.len() as u32;
    let succeeded = AtomicU32::new(0);
    let failed = AtomicU32::new(0);

    let process_input = |input: BatchInput| -> BatchResult {
        match outfix_core::format_document(&input.source, format_options) {
            Ok(report) => {
                succeeded.fetch_add(1, Ordering::Relaxed);
                BatchResult {
                    id: input.id,
                    result: Some(report_to_result(report)),
                    error: None,
                }
            }
            Err(failure) => {
                failed.fetch_add(1, Ordering::Relaxed);
                BatchResult {
                    id: input.id,
                    result: None,
                    error: Some(failure.to_string()),
                }
            }
        }
    };

    let results: Vec<BatchResult> = if continue_on_error {
        // Process all documents regardless of errors
        if let Some(pool) = pool {
            pool.install(|| inputs.into_par_iter().map(process_input).collect())
        } else {
            inputs.into_par_iter().map(process_input).collect()
        }
    } else {
        // Stop on first error
        let mut results = Vec::with_capacity(inputs.len());
        let mut had_error = false;

        for input in inputs {
            if had_error {
                break;
            }
            let result = process_input(input);
            if result.error.is_some() {
                had_error = true;
            }
            results.push(result);
        }
        results
    };

    let elapsed = start.elapsed();

    Ok(BatchProcessingResult {
        results,
        stats: BatchStats {
            total,
            succeeded: succeeded.load(Ordering::Relaxed),
            failed: failed.load(Ordering::Relaxed),
            processing_time_ms: elapsed.as_secs_f64() * 1000.0,
        },
    })
}

fn run_fix(source: &str, options: FormatOptions) -> FixResult {
    match outfix_core::format_document(source, options) {
        Ok(report) => FixResult {
            success: true,
            changed_lines: clamp_count(report.changed_lines),
            text: Some(report.text),
            error: None,
        },
        Err(failure) => FixResult {
            success: false,
            text: None,
            changed_lines: 0,
            error: Some(failure.to_string()),
        },
    }
}

fn run_format(source: &str, options: FormatOptions) -> FormatResult {
    match outfix_core::format_document(source, options) {
        Ok(report) => report_to_result(report),
        Err(failure) => FormatResult {
            success: false,
            text: None,
            changed_lines: 0,
            stages: Vec::new(),
            error: Some(failure.to_string()),
        },
    }
}

fn report_to_result(report: outfix_core::FormatReport) -> FormatResult {
    FormatResult {
        success: true,
        changed_lines: clamp_count(report.changed_lines),
        stages: report
            .stages
            .into_iter()
            .map(|stage| StageChange {
                stage: stage.stage,
                changed_lines: clamp_count(stage.changed_lines),
            })
            .collect(),
        text: Some(report.text),
        error: None,
    }
}

fn clamp_count(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

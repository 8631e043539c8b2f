use outfix_core::{FormatOptions, FormatReport, NumberingOptions};
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

// ============================================================================
// Format Config
// ============================================================================

/// Configuration accepted by the WASM formatting functions.
/// Mirrors the NAPI `FormatConfig` for parity.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct WasmFormatConfig {
    #[serde(default, alias = "tabWidth")]
    pub tab_width: Option<u32>,
    #[serde(default)]
    pub numbering: Option<bool>,
    #[serde(default)]
    pub footnotes: Option<bool>,
}

fn parse_config(config: JsValue) -> WasmFormatConfig {
    if config.is_undefined() || config.is_null() {
        return WasmFormatConfig::default();
    }
    serde_wasm_bindgen::from_value(config).unwrap_or_default()
}

fn build_format_options(cfg: &WasmFormatConfig) -> FormatOptions {
    let mut numbering = NumberingOptions::standard();
    if let Some(tab_width) = cfg.tab_width {
        numbering.tab_width = tab_width as usize;
    }
    FormatOptions {
        numbering,
        fix_numbering: cfg.numbering.unwrap_or(true),
        fix_footnotes: cfg.footnotes.unwrap_or(true),
    }
}

// ============================================================================
// Format API Types
// ============================================================================

/// Change summary for one pipeline stage.
#[derive(Debug, Clone, Serialize)]
pub struct StageEntry {
    /// Stage name (`numbering` or `footnotes`).
    pub stage: String,
    /// Lines the stage changed relative to its own input.
    pub changed_lines: u32,
}

/// Result of a formatting run.
#[derive(Debug, Clone, Serialize)]
pub struct FormatOutcome {
    /// Whether every stage completed.
    pub success: bool,
    /// Rewritten document text (null on failure).
    pub text: Option<String>,
    /// Lines changed between the input and the final text.
    pub changed_lines: u32,
    /// Per-stage change summaries in run order (empty on failure).
    pub stages: Vec<StageEntry>,
    /// Failure message naming the failing stage (null on success).
    pub error: Option<String>,
}

// ============================================================================
// Format API
// ============================================================================

/// Fixes section and list numbering across a whole document.
///
/// Runs only the numbering stage; footnotes are left alone. Engine failures
/// are reported in the result object rather than thrown.
///
/// # Arguments
///
/// * `source` - The full document text
/// * `config` - Optional configuration (JsValue; only `tabWidth` applies)
///
/// # Returns
///
/// Returns a `FormatOutcome` with the rewritten text and change counts.
#[wasm_bindgen]
pub fn fix_numbering(source: &str, config: JsValue) -> Result<JsValue, JsError> {
    let mut options = build_format_options(&parse_config(config));
    options.fix_numbering = true;
    options.fix_footnotes = false;
    to_js(run_pipeline(source, options))
}

/// Renumbers footnote declarations and their references to a contiguous
/// sequence, assigned in declaration order.
#[wasm_bindgen]
pub fn fix_footnotes(source: &str) -> Result<JsValue, JsError> {
    let mut options = FormatOptions::standard();
    options.fix_numbering = false;
    to_js(run_pipeline(source, options))
}

/// Runs the full formatting pipeline: numbering first, then footnotes.
///
/// # Arguments
///
/// * `source` - The full document text
/// * `config` - Optional configuration (JsValue)
///
/// # Returns
///
/// Returns a `FormatOutcome` with the rewritten text, an overall
/// changed-line count, and a per-stage breakdown.
///
/// # Example (JavaScript)
///
/// ```javascript
/// import { format_document } from './outfix_wasm';
///
/// const result = format_document('1. a\n1. b', { tabWidth: 4 });
/// // result = { success: true, text: '1. a\n2. b', changed_lines: 1, ... }
/// ```
#[wasm_bindgen]
pub fn format_document(source: &str, config: JsValue) -> Result<JsValue, JsError> {
    let options = build_format_options(&parse_config(config));
    to_js(run_pipeline(source, options))
}

fn run_pipeline(source: &str, options: FormatOptions) -> FormatOutcome {
    match outfix_core::format_document(source, options) {
        Ok(report) => from_report(report),
        Err(failure) => FormatOutcome {
            success: false,
            text: None,
            changed_lines: 0,
            stages: Vec::new(),
            error: Some(failure.to_string()),
        },
    }
}

fn from_report(report: FormatReport) -> FormatOutcome {
    FormatOutcome {
        success: true,
        changed_lines: clamp_count(report.changed_lines),
        stages: report
            .stages
            .into_iter()
            .map(|stage| StageEntry {
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

fn to_js(outcome: FormatOutcome) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(&outcome)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

#![deny(missing_docs)]
//! Outfix core: structural renumbering for plain-text outline documents.
//!
//! The engine rewrites three line-oriented constructs so their numbering is
//! contiguous again after edits: hierarchical section headers (`2.1. Title`),
//! nested list markers (`a.`, `3.`), and footnote declarations with their
//! in-text references (`[4]`). Everything else in the document passes
//! through byte-for-byte.

/// Changed-line accounting between document revisions.
pub mod diff;
/// Failure type for formatting stages.
pub mod error;
/// Footnote renumbering.
pub mod footnotes;
/// Section and list renumbering.
pub mod numbering;
/// Staged document formatting.
pub mod pipeline;
/// Line classification for the outline markup grammar.
pub mod scan;

pub use diff::{count_changed_lines, count_changed_text_lines};
pub use error::StageFailure;
pub use footnotes::{DeclarationSite, collect_declarations, renumber_footnotes};
pub use numbering::{
    DocumentRewrite, NumberingOptions, NumberingOutcome, renumber_lines, renumber_outline,
};
pub use pipeline::{
    DocumentTransform, FOOTNOTES_STAGE, FormatOptions, FormatPipeline, FormatReport,
    NUMBERING_STAGE, StageReport, format_document, standard_pipeline,
};
pub use scan::{
    FootnoteDeclaration, ListItem, SectionHeading, leading_whitespace_info,
    parse_footnote_declaration, parse_list_item, parse_section_heading,
};

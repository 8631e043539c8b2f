//! Footnote renumbering.
//!
//! Declarations (`[3] Body`) are collected with their byte offsets, assigned
//! fresh sequential numbers in document order, and every bracketed numeric
//! token with a declared identifier is rewritten in one left-to-right scan.
//! Text outside the remapped tokens is copied byte-for-byte.

use std::collections::HashMap;

use crate::numbering::DocumentRewrite;
use crate::scan::parse_footnote_declaration;

/// A footnote declaration located in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationSite {
    /// Identifier between the brackets, exactly as written.
    pub identifier: String,
    /// Declaration body text.
    pub body: String,
    /// Byte offset of the declaration within the document.
    pub source_position: usize,
}

/// Collect every footnote declaration in `text`, in document order.
pub fn collect_declarations(text: &str) -> Vec<DeclarationSite> {
    let mut sites = Vec::new();
    let mut offset = 0;
    for raw in text.split_inclusive('\n') {
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);
        if let Some(declaration) = parse_footnote_declaration(line) {
            sites.push(DeclarationSite {
                identifier: declaration.identifier.to_string(),
                body: declaration.body.to_string(),
                source_position: offset,
            });
        }
        offset += raw.len();
    }
    // Positions establish document order; the textual numbers may be shuffled.
    sites.sort_by_key(|site| site.source_position);
    sites
}

/// Renumber footnote declarations and references to a contiguous `1..k`.
///
/// New numbers are assigned in order of first declaration. Every `[digits]`
/// token whose identifier has a declaration is rewritten, at the declaration
/// and at each in-text reference alike; tokens without a declaration are
/// left untouched. A document with no declarations comes back unchanged.
pub fn renumber_footnotes(text: &str) -> DocumentRewrite {
    let sites = collect_declarations(text);
    if sites.is_empty() {
        return DocumentRewrite {
            text: text.to_string(),
            changed_lines: 0,
        };
    }

    let map = number_map(&sites);
    let rewritten = rewrite_bracket_tokens(text, &map);
    let changed_lines = crate::diff::count_changed_text_lines(text, &rewritten);

    DocumentRewrite {
        text: rewritten,
        changed_lines,
    }
}

/// Maps each declared identifier to its new sequential number. The first
/// declaration of a duplicated identifier wins.
fn number_map(sites: &[DeclarationSite]) -> HashMap<String, String> {
    let mut map = HashMap::new();
    let mut next = 1u64;
    for site in sites {
        if !map.contains_key(&site.identifier) {
            map.insert(site.identifier.clone(), next.to_string());
            next += 1;
        }
    }
    map
}

/// Rewrites every `[digits]` token present in `map`, copying all other text
/// verbatim.
fn rewrite_bracket_tokens(text: &str, map: &HashMap<String, String>) -> String {
    let bytes = text.as_bytes();
    let mut output = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'[' {
            i += 1;
            continue;
        }
        let digits_start = i + 1;
        let mut j = digits_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j == digits_start || bytes.get(j) != Some(&b']') {
            i += 1;
            continue;
        }
        if let Some(new_number) = map.get(&text[digits_start..j]) {
            output.push_str(&text[copied..digits_start]);
            output.push_str(new_number);
            copied = j;
        }
        i = j + 1;
    }

    output.push_str(&text[copied..]);
    output
}

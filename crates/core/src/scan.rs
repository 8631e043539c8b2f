//! Line classification for the outline markup grammar.
//!
//! Hand-rolled predicates for the three line shapes the engine rewrites:
//! numbered section headers, ordered or lettered list items, and footnote
//! declarations. Each predicate returns `Some` with the structured parts of
//! the match, or `None` when the line has a different shape. Indentation is
//! measured over spaces and tabs only.

/// Parsed representation of a numbered section header line (`2.1. Title`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeading<'a> {
    /// Numeric path exactly as written (`2.1` in `2.1. Title`).
    pub path: &'a str,
    /// Count of dot-separated path components.
    pub depth: usize,
    /// Header title with the numbering and separating whitespace removed.
    pub title: &'a str,
}

/// Parsed representation of an ordered or lettered list item line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem<'a> {
    /// Leading whitespace exactly as written.
    pub indent: &'a str,
    /// Indentation width in visual columns, tabs expanded.
    pub indent_columns: usize,
    /// Marker token as written: a digit run or a single ASCII letter.
    pub marker: &'a str,
    /// Whitespace between the marker's dot and the content, as written.
    pub gap: &'a str,
    /// Item text after the gap.
    pub content: &'a str,
}

/// Parsed representation of a footnote declaration line (`[3] Body text`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FootnoteDeclaration<'a> {
    /// Digit string between the brackets, exactly as written.
    pub identifier: &'a str,
    /// Body text after the brackets and separating whitespace.
    pub body: &'a str,
}

/// Parse a section header: digit runs separated by dots, an optional
/// trailing dot, whitespace, then a non-empty title. Headers start at
/// column 0; an indented line never matches.
pub fn parse_section_heading(line: &str) -> Option<SectionHeading<'_>> {
    let bytes = line.as_bytes();
    let mut i = 0;
    let mut depth = 0usize;

    loop {
        let component_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == component_start {
            return None;
        }
        depth += 1;
        if i < bytes.len() && bytes[i] == b'.' && bytes.get(i + 1).is_some_and(|b| b.is_ascii_digit())
        {
            i += 1;
            continue;
        }
        break;
    }

    let path = &line[..i];
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
    }

    let title = eat_whitespace_then_rest(line, i)?;
    Some(SectionHeading { path, depth, title })
}

/// Parse an ordered or lettered list item: optional indentation, a digit run
/// or single ASCII letter, a dot, whitespace, then non-empty content.
pub fn parse_list_item(line: &str, tab_width: usize) -> Option<ListItem<'_>> {
    let (indent_columns, indent_end) = leading_whitespace_info(line, tab_width);
    let bytes = line.as_bytes();

    let marker_start = indent_end;
    let mut i = marker_start;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == marker_start {
        // No digits, so the marker must be exactly one letter.
        if bytes.get(i).is_some_and(|b| b.is_ascii_alphabetic()) {
            i += 1;
        } else {
            return None;
        }
    }

    if bytes.get(i) != Some(&b'.') {
        return None;
    }
    let marker = &line[marker_start..i];
    i += 1;

    let gap_start = i;
    let content = eat_whitespace_then_rest(line, gap_start)?;
    let content_start = line.len() - content.len();

    Some(ListItem {
        indent: &line[..indent_end],
        indent_columns,
        marker,
        gap: &line[gap_start..content_start],
        content,
    })
}

/// Parse a footnote declaration: `[` at column 0, a digit run, `]`,
/// whitespace, then a non-empty body.
pub fn parse_footnote_declaration(line: &str) -> Option<FootnoteDeclaration<'_>> {
    let bytes = line.as_bytes();
    if bytes.first() != Some(&b'[') {
        return None;
    }
    let mut i = 1;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == 1 || bytes.get(i) != Some(&b']') {
        return None;
    }
    let identifier = &line[1..i];
    let body = eat_whitespace_then_rest(line, i + 1)?;
    Some(FootnoteDeclaration { identifier, body })
}

/// Returns `(visual_columns, byte_offset)` for a line's leading whitespace.
/// Tabs advance to the next multiple of `tab_width` columns.
pub fn leading_whitespace_info(line: &str, tab_width: usize) -> (usize, usize) {
    let tab_width = tab_width.max(1);
    let mut col = 0;
    let mut bytes = 0;
    for b in line.bytes() {
        match b {
            b' ' => {
                col += 1;
                bytes += 1;
            }
            b'\t' => {
                col += tab_width - (col % tab_width);
                bytes += 1;
            }
            _ => break,
        }
    }
    (col, bytes)
}

/// Skips at least one whitespace character at `from` and returns the
/// remainder when it is non-empty.
fn eat_whitespace_then_rest(line: &str, from: usize) -> Option<&str> {
    let rest = &line[from..];
    let trimmed = rest.trim_start();
    if trimmed.len() == rest.len() || trimmed.is_empty() {
        return None;
    }
    Some(trimmed)
}

//! Section and list renumbering.
//!
//! A single forward pass over document lines rebuilds hierarchical section
//! numbering and nested list markers from scratch. Counter state lives in
//! one struct threaded through the pass; lines that match neither shape pass
//! through unchanged.

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::scan::{parse_list_item, parse_section_heading};

/// Indentation columns per list nesting level.
const COLUMNS_PER_LEVEL: usize = 4;

/// Options for the renumbering pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberingOptions {
    /// Columns a tab occupies when measuring list indentation.
    pub tab_width: usize,
}

impl NumberingOptions {
    /// Editor-facing defaults: 4-column tabs.
    pub const fn standard() -> Self {
        Self { tab_width: 4 }
    }
}

impl Default for NumberingOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Result of renumbering a pre-split sequence of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberingOutcome {
    /// Rewritten lines, same length and order as the input.
    pub lines: Vec<String>,
    /// Count of line positions whose text changed.
    pub changed_lines: usize,
}

/// Rewritten document text plus its change summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRewrite {
    /// Rewritten document text.
    pub text: String,
    /// Count of line positions whose text changed.
    pub changed_lines: usize,
}

/// Counter state threaded through a single renumbering pass.
#[derive(Debug, Default)]
struct NumberingState {
    /// One counter per section depth; `[2, 3]` renders as `2.3`.
    section_stack: Vec<u64>,
    /// Running counter per list depth.
    list_counters: HashMap<usize, u64>,
    /// Depth of the most recent item while a list is active.
    active_list_depth: Option<usize>,
}

impl NumberingState {
    /// Advances the section counters for a header at `depth` and terminates
    /// any active list. Counters deeper than `depth` are discarded, so a
    /// later subsection under the new header restarts from 1.
    fn enter_section(&mut self, depth: usize) -> &[u64] {
        self.section_stack.truncate(depth);
        while self.section_stack.len() < depth {
            self.section_stack.push(0);
        }
        self.section_stack[depth - 1] += 1;
        self.reset_list();
        &self.section_stack
    }

    /// Advances the list counter at `depth` and returns its new value.
    /// Counters strictly deeper than `depth` are dropped when the active
    /// depth changes; shallower counters keep running, so a later sibling of
    /// an outer item resumes that item's count.
    fn enter_list_item(&mut self, depth: usize) -> u64 {
        if self.active_list_depth != Some(depth) {
            self.list_counters.retain(|&d, _| d <= depth);
            self.active_list_depth = Some(depth);
        }
        let counter = self.list_counters.entry(depth).or_insert(0);
        *counter += 1;
        *counter
    }

    /// Terminates the active list and forgets all list counters.
    fn reset_list(&mut self) {
        self.list_counters.clear();
        self.active_list_depth = None;
    }
}

/// Renumber section headers and list items across `lines`.
///
/// Headers rebuild the hierarchical counter path. List items get markers in
/// the depth-parity alphabet: decimal at odd depths, lowercase letters at
/// even depths, where depth is `indent_columns / 4 + 1`. Every other line is
/// returned unchanged, and blank or indented text keeps the surrounding list
/// alive while flush-left text ends it.
pub fn renumber_lines<S: AsRef<str>>(lines: &[S], options: NumberingOptions) -> NumberingOutcome {
    let mut state = NumberingState::default();
    let mut fixed = Vec::with_capacity(lines.len());
    let mut changed_lines = 0usize;

    for (index, original) in lines.iter().enumerate() {
        let original = original.as_ref();
        let line = renumber_one_line(original, &mut state, options);
        if line != original {
            log::debug!("line {}: {:?} -> {:?}", index + 1, original, line);
            changed_lines += 1;
        }
        fixed.push(line);
    }

    NumberingOutcome {
        lines: fixed,
        changed_lines,
    }
}

/// Renumber a whole document, preserving its exact line structure.
///
/// Lines are split on `\n`, so carriage returns stay inside their line and
/// the rewritten text round-trips byte-for-byte wherever nothing changed.
pub fn renumber_outline(text: &str, options: NumberingOptions) -> DocumentRewrite {
    let lines: Vec<&str> = text.split('\n').collect();
    let outcome = renumber_lines(&lines, options);
    DocumentRewrite {
        text: outcome.lines.join("\n"),
        changed_lines: outcome.changed_lines,
    }
}

fn renumber_one_line(line: &str, state: &mut NumberingState, options: NumberingOptions) -> String {
    if let Some(heading) = parse_section_heading(line) {
        let path = render_section_path(state.enter_section(heading.depth));
        return format!("{}. {}", path, heading.title);
    }

    if let Some(item) = parse_list_item(line, options.tab_width) {
        let depth = item.indent_columns / COLUMNS_PER_LEVEL + 1;
        let marker = render_list_marker(depth, state.enter_list_item(depth));
        return format!("{}{}.{}{}", item.indent, marker, item.gap, item.content);
    }

    if line.trim().is_empty() {
        // Blank lines keep the current list alive.
        return line.to_string();
    }

    if !line.starts_with([' ', '\t']) {
        // Flush-left paragraph text ends the list; indented text is
        // continuation inside the current item.
        state.reset_list();
    }

    line.to_string()
}

fn render_section_path(stack: &[u64]) -> String {
    let mut path = String::new();
    for (i, counter) in stack.iter().enumerate() {
        if i > 0 {
            path.push('.');
        }
        write!(path, "{}", counter).ok();
    }
    path
}

/// Renders a list marker: decimal at odd depths, lowercase letters at even.
fn render_list_marker(depth: usize, counter: u64) -> String {
    if depth % 2 == 1 {
        counter.to_string()
    } else {
        letter_marker(counter)
    }
}

/// Renders `1, 2, .. 26, 27, 28` as `a, b, .. z, aa, ab` (bijective base-26).
fn letter_marker(mut n: u64) -> String {
    let mut marker = String::new();
    while n > 0 {
        n -= 1;
        marker.insert(0, (b'a' + (n % 26) as u8) as char);
        n /= 26;
    }
    marker
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renumbers_repeated_flat_items() {
        let outcome = renumber_lines(
            &["1. First item", "1. Second item", "1. Third item"],
            NumberingOptions::standard(),
        );
        assert_eq!(
            outcome.lines,
            vec!["1. First item", "2. Second item", "3. Third item"]
        );
        assert_eq!(outcome.changed_lines, 2);
    }

    #[test]
    fn renumbers_nested_letter_items() {
        let outcome = renumber_lines(
            &["1. Parent", "    a. Child", "    a. Child"],
            NumberingOptions::standard(),
        );
        assert_eq!(
            outcome.lines,
            vec!["1. Parent", "    a. Child", "    b. Child"]
        );
        assert_eq!(outcome.changed_lines, 1);
    }

    #[test]
    fn rebuilds_section_hierarchy() {
        let outcome = renumber_lines(
            &["3. Intro", "3.7. Goals", "3.9. Scope", "9. Design", "9.9. Layout"],
            NumberingOptions::standard(),
        );
        assert_eq!(
            outcome.lines,
            vec!["1. Intro", "1.1. Goals", "1.2. Scope", "2. Design", "2.1. Layout"]
        );
        assert_eq!(outcome.changed_lines, 5);
    }

    #[test]
    fn correctly_numbered_sections_pass_through() {
        let outcome = renumber_lines(
            &["1. A", "1.1. B", "1.1.1. C", "2. D", "2.1. E"],
            NumberingOptions::standard(),
        );
        assert_eq!(
            outcome.lines,
            vec!["1. A", "1.1. B", "1.1.1. C", "2. D", "2.1. E"]
        );
        assert_eq!(outcome.changed_lines, 0);
    }

    #[test]
    fn deep_first_header_pads_with_zeros() {
        let outcome = renumber_lines(&["2.5.1. Details"], NumberingOptions::standard());
        assert_eq!(outcome.lines, vec!["0.0.1. Details"]);
    }

    #[test]
    fn header_rewrite_normalizes_marker_spacing() {
        let outcome = renumber_lines(
            &["1   Overview", "2.2.   Alignment"],
            NumberingOptions::standard(),
        );
        assert_eq!(outcome.lines, vec!["1. Overview", "1.1. Alignment"]);
        assert_eq!(outcome.changed_lines, 2);
    }

    #[test]
    fn section_header_terminates_list_numbering() {
        let outcome = renumber_lines(
            &["1. Section", "    a. Item", "2. Section", "    a. Item"],
            NumberingOptions::standard(),
        );
        assert_eq!(
            outcome.lines,
            vec!["1. Section", "    a. Item", "2. Section", "    a. Item"]
        );
        assert_eq!(outcome.changed_lines, 0);
    }

    #[test]
    fn blank_and_indented_lines_preserve_list_state() {
        let outcome = renumber_lines(
            &[
                "1. Section",
                "    a. First",
                "",
                "        wrapped continuation",
                "    a. Second",
            ],
            NumberingOptions::standard(),
        );
        assert_eq!(
            outcome.lines,
            vec![
                "1. Section",
                "    a. First",
                "",
                "        wrapped continuation",
                "    b. Second",
            ]
        );
        assert_eq!(outcome.changed_lines, 1);
    }

    #[test]
    fn flush_left_text_ends_the_list() {
        let outcome = renumber_lines(
            &["1. Section", "    a. First", "Paragraph text.", "    a. Again"],
            NumberingOptions::standard(),
        );
        assert_eq!(
            outcome.lines,
            vec!["1. Section", "    a. First", "Paragraph text.", "    a. Again"]
        );
        assert_eq!(outcome.changed_lines, 0);
    }

    #[test]
    fn returning_to_a_shallower_depth_resumes_its_count() {
        let outcome = renumber_lines(
            &[
                "1. Section",
                "    a. Alpha",
                "        1. Deep",
                "        1. Deep",
                "    a. Beta",
            ],
            NumberingOptions::standard(),
        );
        assert_eq!(
            outcome.lines,
            vec![
                "1. Section",
                "    a. Alpha",
                "        1. Deep",
                "        2. Deep",
                "    b. Beta",
            ]
        );
    }

    #[test]
    fn marker_alphabet_follows_depth_parity() {
        let outcome = renumber_lines(
            &[
                "1. Outline",
                "    b. Second level",
                "        7. Third level",
                "            q. Fourth level",
            ],
            NumberingOptions::standard(),
        );
        assert_eq!(
            outcome.lines,
            vec![
                "1. Outline",
                "    a. Second level",
                "        1. Third level",
                "            a. Fourth level",
            ]
        );
    }

    #[test]
    fn flush_left_letter_markers_become_decimal() {
        let outcome = renumber_lines(&["a. First", "b. Second"], NumberingOptions::standard());
        assert_eq!(outcome.lines, vec!["1. First", "2. Second"]);
        assert_eq!(outcome.changed_lines, 2);
    }

    #[test]
    fn letter_markers_normalize_to_lowercase() {
        let outcome = renumber_lines(
            &["1. Top", "    A. First", "    B. Second"],
            NumberingOptions::standard(),
        );
        assert_eq!(
            outcome.lines,
            vec!["1. Top", "    a. First", "    b. Second"]
        );
        assert_eq!(outcome.changed_lines, 2);
    }

    #[test]
    fn tab_indentation_expands_to_configured_width() {
        let standard = renumber_lines(&["1. Top", "\ta. Child"], NumberingOptions::standard());
        assert_eq!(standard.lines[1], "\ta. Child");

        let wide = renumber_lines(&["1. Top", "\ta. Child"], NumberingOptions { tab_width: 8 });
        assert_eq!(wide.lines[1], "\t1. Child");
    }

    #[test]
    fn letter_markers_continue_past_z() {
        let mut input = vec!["1. Top".to_string()];
        for _ in 0..28 {
            input.push("    x. Item".to_string());
        }
        let outcome = renumber_lines(&input, NumberingOptions::standard());
        assert_eq!(outcome.lines[26], "    z. Item");
        assert_eq!(outcome.lines[27], "    aa. Item");
        assert_eq!(outcome.lines[28], "    ab. Item");

        // Multi-letter markers no longer parse as list items, so a second
        // pass leaves them alone instead of restarting the count.
        let again = renumber_lines(&outcome.lines, NumberingOptions::standard());
        assert_eq!(again.lines, outcome.lines);
        assert_eq!(again.changed_lines, 0);
    }

    #[test]
    fn renumbering_is_idempotent() {
        let input = [
            "2. Overview",
            "Some intro text.",
            "",
            "2.3. Goals",
            "    c. Ship",
            "    a. Iterate",
            "        4. Fast",
            "        4. Safe",
            "    a. Done",
            "9. Close",
            "1. Flat item",
            "1. Flat item",
        ];
        let first = renumber_lines(&input, NumberingOptions::standard());
        let second = renumber_lines(&first.lines, NumberingOptions::standard());
        assert_eq!(second.lines, first.lines);
        assert_eq!(second.changed_lines, 0);
    }

    #[test]
    fn fixed_headers_increment_by_one_at_their_depth() {
        let input = [
            "4. One",
            "4.4. Two",
            "4.4.4. Three",
            "4.4. Four",
            "7. Five",
            "7.7.7. Six",
        ];
        let outcome = renumber_lines(&input, NumberingOptions::standard());

        let mut stack: Vec<u64> = Vec::new();
        for line in &outcome.lines {
            let Some(heading) = parse_section_heading(line) else {
                continue;
            };
            let components: Vec<u64> = heading
                .path
                .split('.')
                .map(|c| c.parse().unwrap())
                .collect();
            assert_eq!(components.len(), heading.depth);
            stack.truncate(components.len());
            while stack.len() < components.len() {
                stack.push(0);
            }
            stack[components.len() - 1] += 1;
            assert_eq!(components, stack);
        }
    }

    #[test]
    fn outline_rewrite_preserves_line_endings() {
        let rewritten = renumber_outline("1. First\r\n1. Second\r\n", NumberingOptions::standard());
        assert_eq!(rewritten.text, "1. First\r\n2. Second\r\n");
        assert_eq!(rewritten.changed_lines, 1);

        let trailing = renumber_outline("1. Solo\n", NumberingOptions::standard());
        assert_eq!(trailing.text, "1. Solo\n");
        assert_eq!(trailing.changed_lines, 0);
    }

    #[test]
    fn document_without_numbering_passes_through() {
        let source = "Plain paragraph.\n\n> quoted\n";
        let rewritten = renumber_outline(source, NumberingOptions::standard());
        assert_eq!(rewritten.text, source);
        assert_eq!(rewritten.changed_lines, 0);
    }

    #[test]
    fn renders_bijective_letter_markers() {
        assert_eq!(letter_marker(1), "a");
        assert_eq!(letter_marker(26), "z");
        assert_eq!(letter_marker(27), "aa");
        assert_eq!(letter_marker(52), "az");
        assert_eq!(letter_marker(53), "ba");
        assert_eq!(letter_marker(702), "zz");
        assert_eq!(letter_marker(703), "aaa");
    }
}

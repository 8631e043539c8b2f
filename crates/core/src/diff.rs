//! Changed-line accounting between document revisions.

/// Count line positions whose text differs between `original` and `fixed`,
/// comparing index by index. When the revisions have different line counts,
/// the surplus lines all count as changed.
pub fn count_changed_lines<A: AsRef<str>, B: AsRef<str>>(original: &[A], fixed: &[B]) -> usize {
    let differing = original
        .iter()
        .zip(fixed.iter())
        .filter(|(a, b)| a.as_ref() != b.as_ref())
        .count();
    differing + original.len().abs_diff(fixed.len())
}

/// [`count_changed_lines`] over whole documents, split on `\n`.
pub fn count_changed_text_lines(original: &str, fixed: &str) -> usize {
    let original: Vec<&str> = original.split('\n').collect();
    let fixed: Vec<&str> = fixed.split('\n').collect();
    count_changed_lines(&original, &fixed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_documents_count_zero() {
        assert_eq!(count_changed_lines(&["a", "b"], &["a", "b"]), 0);
        assert_eq!(count_changed_text_lines("a\nb", "a\nb"), 0);
    }

    #[test]
    fn counts_positions_that_differ() {
        assert_eq!(count_changed_lines(&["a", "b", "c"], &["a", "x", "y"]), 2);
    }

    #[test]
    fn surplus_lines_count_as_changed() {
        assert_eq!(count_changed_lines(&["a"], &["a", "b", "c"]), 2);
        assert_eq!(count_changed_lines(&["a", "b", "c"], &["a"]), 2);
        assert_eq!(count_changed_lines::<&str, &str>(&[], &[]), 0);
    }

    #[test]
    fn trailing_newline_shows_up_as_one_line() {
        assert_eq!(count_changed_text_lines("a\nb", "a\nb\n"), 1);
        assert_eq!(count_changed_text_lines("", ""), 0);
    }
}

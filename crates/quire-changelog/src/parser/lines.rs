//! Line classification.
//!
//! Whether a line is a header title, an underline, or content depends on its
//! neighbours, so lines are classified in one left-to-right pass with one line
//! of lookahead rather than one pattern per line.

use super::comments::is_comment_line;

/// The role a line plays in fragment text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineRole {
    /// An RST comment
    Comment,
    /// Empty or whitespace-only separator
    Blank,
    /// A section title, followed by its underline
    HeaderTitle,
    /// The underline of the preceding title
    HeaderUnderline,
    /// First line of an entry
    BulletStart,
    /// Indented line continuing the current entry
    Continuation,
}

/// Classify lines, returning one role per input line.
///
/// Comment lines are tagged first and then ignored entirely, so the lookahead
/// for an underline sees the next non-comment line.
pub fn classify_lines(lines: &[&str]) -> Vec<LineRole> {
    let mut roles = vec![LineRole::Comment; lines.len()];
    let content: Vec<usize> = (0..lines.len())
        .filter(|&i| !is_comment_line(lines[i]))
        .collect();

    let mut in_entry = false;
    let mut pos = 0;
    while pos < content.len() {
        let index = content[pos];
        let line = lines[index];

        if is_blank(line) {
            roles[index] = LineRole::Blank;
            in_entry = false;
            pos += 1;
            continue;
        }

        if in_entry && starts_with_whitespace(line) {
            roles[index] = LineRole::Continuation;
            pos += 1;
            continue;
        }

        if let Some(&next) = content.get(pos + 1) {
            if underlines(lines[next], line) {
                roles[index] = LineRole::HeaderTitle;
                roles[next] = LineRole::HeaderUnderline;
                in_entry = false;
                pos += 2;
                continue;
            }
        }

        roles[index] = LineRole::BulletStart;
        in_entry = true;
        pos += 1;
    }

    roles
}

/// Check whether `underline` is a valid underline for `title`: a single
/// repeated non-whitespace character at least as long as the title.
pub fn underlines(underline: &str, title: &str) -> bool {
    let underline = underline.trim_end();
    let mut chars = underline.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if first.is_whitespace() || !chars.all(|c| c == first) {
        return false;
    }

    underline.chars().count() >= title.trim_end().chars().count()
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn starts_with_whitespace(line: &str) -> bool {
    line.chars().next().is_some_and(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use LineRole::*;

    #[test]
    fn test_underlines() {
        assert!(underlines("-----", "Added"));
        assert!(underlines("^^^^^^^^", "Added"));
        assert!(underlines(".....", "Fixed"));
        assert!(underlines("xxxxx", "Fixed"));
        assert!(!underlines("----", "Added"));
        assert!(!underlines("--=--", "Added"));
        assert!(!underlines("", "Added"));
        assert!(!underlines("  -----", "Added"));
    }

    #[test]
    fn test_classify_header_and_bullets() {
        let lines = ["Added", "-----", "- One.", "  more.", "", "- Two."];
        assert_eq!(
            classify_lines(&lines),
            vec![HeaderTitle, HeaderUnderline, BulletStart, Continuation, Blank, BulletStart]
        );
    }

    #[test]
    fn test_header_directly_after_entry() {
        let lines = ["- One.", "Fixed", "^^^^^", "- Two."];
        assert_eq!(
            classify_lines(&lines),
            vec![BulletStart, HeaderTitle, HeaderUnderline, BulletStart]
        );
    }

    #[test]
    fn test_short_underline_is_content() {
        let lines = ["Added", "---"];
        assert_eq!(classify_lines(&lines), vec![BulletStart, BulletStart]);
    }

    #[test]
    fn test_comments_are_skipped_by_lookahead() {
        let lines = [".. intro", "Added", ".. between", "-----", "- One."];
        assert_eq!(
            classify_lines(&lines),
            vec![Comment, HeaderTitle, Comment, HeaderUnderline, BulletStart]
        );
    }

    #[test]
    fn test_periods_underline_is_not_a_comment() {
        let lines = ["Fixed", ".....", "- One."];
        assert_eq!(
            classify_lines(&lines),
            vec![HeaderTitle, HeaderUnderline, BulletStart]
        );
    }

    #[test]
    fn test_indented_line_after_blank_starts_entry() {
        let lines = ["- One.", "", "  stray"];
        assert_eq!(classify_lines(&lines), vec![BulletStart, Blank, BulletStart]);
    }
}

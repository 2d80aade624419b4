//! Fragment parsing
//!
//! Text goes through three steps: line endings are normalized to `\n`,
//! comment lines are dropped, and the remaining lines are classified with one
//! line of lookahead and grouped into sections.

mod comments;
mod lines;
mod sections;

pub use comments::{is_comment_line, strip_comments};
pub use lines::{classify_lines, underlines, LineRole};
pub use sections::parse_sections;

use std::borrow::Cow;

/// Normalize `\r\n` and lone `\r` line terminators to `\n`
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
        assert!(matches!(normalize_newlines("a\nb"), Cow::Borrowed(_)));
    }
}

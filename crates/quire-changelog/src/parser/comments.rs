//! Comment line removal

use tracing::trace;

use super::normalize_newlines;

/// Marker that starts an RST comment
const COMMENT_MARKER: &str = "..";

/// Check whether a line is an RST comment.
///
/// A comment starts with `..` and is either exactly that or followed by
/// whitespace. A run of periods is not a comment; it may underline a header.
pub fn is_comment_line(line: &str) -> bool {
    line.strip_prefix(COMMENT_MARKER)
        .is_some_and(|rest| rest.chars().next().map_or(true, char::is_whitespace))
}

/// Remove comment lines, leaving every other line (blank ones included)
/// exactly as it was.
pub fn strip_comments(text: &str) -> String {
    let text = normalize_newlines(text);
    let mut out = String::with_capacity(text.len());
    let mut dropped = 0usize;

    for line in text.split_inclusive('\n') {
        if is_comment_line(line.strip_suffix('\n').unwrap_or(line)) {
            dropped += 1;
        } else {
            out.push_str(line);
        }
    }

    trace!(dropped, "comment lines removed");
    out
}

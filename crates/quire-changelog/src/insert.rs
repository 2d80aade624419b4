//! Inserting collected entries into a changelog

use tracing::debug;

use crate::parser::{is_comment_line, normalize_newlines};

/// Insert `entry` into `changelog`.
///
/// The entry goes directly after the first `.. <marker>` comment line. If the
/// changelog has no such line, the entry is placed at the top.
pub fn insert_entry(changelog: &str, entry: &str, marker: &str) -> String {
    let changelog = normalize_newlines(changelog);
    let mut offset = 0;

    for line in changelog.split_inclusive('\n') {
        let end = offset + line.len();
        let text = line.strip_suffix('\n').unwrap_or(line);
        if is_marker_line(text, marker) {
            debug!(offset = end, "insert marker found");
            let mut output = String::with_capacity(changelog.len() + entry.len() + 1);
            output.push_str(&changelog[..end]);
            if !line.ends_with('\n') {
                output.push('\n');
            }
            output.push_str(entry);
            output.push_str(&changelog[end..]);
            return output;
        }
        offset = end;
    }

    debug!("no insert marker, prepending entry");
    format!("{}{}", entry, changelog)
}

fn is_marker_line(line: &str, marker: &str) -> bool {
    is_comment_line(line) && line[2..].trim() == marker.trim()
}

//! Section parsing

use tracing::{debug, instrument};

use super::comments::strip_comments;
use super::lines::{classify_lines, LineRole};
use crate::types::ParsedSections;

/// Parse fragment text into sections.
///
/// Entries are grouped under the nearest preceding header, or under the
/// `None` key when no header has been seen yet. A header registers its title
/// when it is seen, even if no entries follow it. Any text parses; malformed
/// headers are treated as plain content.
#[instrument(skip(text), fields(text_len = text.len()))]
pub fn parse_sections(text: &str) -> ParsedSections {
    let text = strip_comments(text);
    let lines: Vec<&str> = text.lines().collect();
    let roles = classify_lines(&lines);

    let mut sections = ParsedSections::new();
    let mut current: Option<&str> = None;
    let mut entry: Vec<&str> = Vec::new();

    for (&line, role) in lines.iter().zip(&roles) {
        match role {
            LineRole::Continuation => entry.push(line),
            LineRole::BulletStart => {
                flush(&mut sections, current, &mut entry);
                entry.push(line);
            }
            LineRole::HeaderTitle => {
                flush(&mut sections, current, &mut entry);
                let title = line.trim();
                sections.register(Some(title));
                current = Some(title);
            }
            LineRole::Blank | LineRole::HeaderUnderline | LineRole::Comment => {
                flush(&mut sections, current, &mut entry);
            }
        }
    }
    flush(&mut sections, current, &mut entry);

    debug!(
        sections = sections.len(),
        entries = sections.entry_count(),
        "fragment text parsed"
    );
    sections
}

fn flush(sections: &mut ParsedSections, title: Option<&str>, entry: &mut Vec<&str>) {
    if !entry.is_empty() {
        sections.push(title, entry.join("\n"));
        entry.clear();
    }
}

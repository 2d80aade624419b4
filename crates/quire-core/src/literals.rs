//! Read literal values out of source files.
//!
//! Used to pick up a project's version string (for example `__version__` in a
//! Python package) without importing or executing anything.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument};

use crate::error::{LiteralError, Result};

/// A simple assignment of a string constant to one or more bare names
static PY_STRING_ASSIGN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^[ \t]*(?P<targets>(?:[A-Za-z_][A-Za-z0-9_]*[ \t]*=[ \t]*)+)(?P<prefix>[rRuU]?)(?:"(?P<dq>[^"\\\n]*(?:\\.[^"\\\n]*)*)"|'(?P<sq>[^'\\\n]*(?:\\.[^'\\\n]*)*)')[ \t]*(?:#.*)?$"#,
    )
    .expect("Invalid regex")
});

/// Look inside a file's text for a literal assigned to `name`.
///
/// Returns the string value of the last matching assignment, or `None` if
/// there is none.
#[instrument(skip(source), fields(file = %file_name.display()))]
pub fn find_literal(file_name: &Path, source: &str, name: &str) -> Result<Option<String>> {
    match file_name.extension().and_then(|e| e.to_str()) {
        Some("py") => Ok(find_python_literal(source, name)),
        _ => Err(LiteralError::UnsupportedFile(file_name.to_path_buf()).into()),
    }
}

/// Read `path` and look for a literal assigned to `name`
pub fn find_literal_in_file(path: &Path, name: &str) -> Result<Option<String>> {
    let source = std::fs::read_to_string(path).map_err(|source| LiteralError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    find_literal(path, &source, name)
}

fn find_python_literal(source: &str, name: &str) -> Option<String> {
    let mut value = None;
    for line in statement_lines(source) {
        let Some(caps) = PY_STRING_ASSIGN.captures(line) else {
            continue;
        };
        let targets = &caps["targets"];
        let assigns_name = targets
            .split('=')
            .map(str::trim)
            .any(|target| target == name);
        if !assigns_name {
            continue;
        }

        let raw = caps
            .name("dq")
            .or_else(|| caps.name("sq"))
            .map(|m| m.as_str())
            .unwrap_or_default();
        let is_raw = caps["prefix"].eq_ignore_ascii_case("r");
        value = Some(if is_raw { raw.to_string() } else { unescape(raw) });
    }

    debug!(name, found = value.is_some(), "python literal lookup");
    value
}

/// Lines that begin a new statement: not inside a string, an open bracket,
/// or a backslash continuation.
fn statement_lines(source: &str) -> Vec<&str> {
    let mut scanner = PyLineScanner::default();
    let mut starts = Vec::new();
    for line in source.lines() {
        if scanner.at_statement_start() {
            starts.push(line);
        }
        scanner.scan(line);
    }
    starts
}

/// Lexical state carried from one physical line to the next
#[derive(Debug, Default)]
struct PyLineScanner {
    depth: usize,
    triple_quote: Option<u8>,
    continued: bool,
}

impl PyLineScanner {
    fn at_statement_start(&self) -> bool {
        self.depth == 0 && self.triple_quote.is_none() && !self.continued
    }

    fn scan(&mut self, line: &str) {
        let bytes = line.as_bytes();
        let mut i = 0;
        self.continued = false;

        while i < bytes.len() {
            if let Some(quote) = self.triple_quote {
                match triple_quote_end(bytes, i, quote) {
                    Some(end) => {
                        self.triple_quote = None;
                        i = end;
                        continue;
                    }
                    None => return,
                }
            }

            match bytes[i] {
                b'#' => return,
                b'\\' if i + 1 == bytes.len() => {
                    self.continued = true;
                    return;
                }
                b'(' | b'[' | b'{' => self.depth += 1,
                b')' | b']' | b'}' => self.depth = self.depth.saturating_sub(1),
                quote @ (b'"' | b'\'') => {
                    if bytes[i..].starts_with(&[quote; 3]) {
                        self.triple_quote = Some(quote);
                        i += 3;
                    } else {
                        i = string_end(bytes, i + 1, quote);
                    }
                    continue;
                }
                _ => {}
            }
            i += 1;
        }
    }
}

/// Index just past the closing `quote` of a one-line string, or the end of
/// the line if it is unterminated
fn string_end(bytes: &[u8], mut i: usize, quote: u8) -> usize {
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Index just past the closing triple quote, if it is on this line
fn triple_quote_end(bytes: &[u8], mut i: usize, quote: u8) -> Option<usize> {
    while i < bytes.len() {
        if bytes[i] == b'\\' {
            i += 2;
        } else if bytes[i..].starts_with(&[quote; 3]) {
            return Some(i + 3);
        } else {
            i += 1;
        }
    }
    None
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other @ ('\\' | '\'' | '"')) => out.push(other),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"""Our package."""

import os

__version__ = "1.2.3"

def f():
    thing = 'inner'

other = 17
"#;

    #[test]
    fn test_find_version() {
        let found = find_literal(Path::new("pkg/__init__.py"), SAMPLE, "__version__").unwrap();
        assert_eq!(found.as_deref(), Some("1.2.3"));
    }

    #[test]
    fn test_nested_assignment_is_found() {
        let found = find_literal(Path::new("a.py"), SAMPLE, "thing").unwrap();
        assert_eq!(found.as_deref(), Some("inner"));
    }

    #[test]
    fn test_non_string_is_ignored() {
        let found = find_literal(Path::new("a.py"), SAMPLE, "other").unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn test_missing_name() {
        let found = find_literal(Path::new("a.py"), SAMPLE, "nope").unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn test_last_assignment_wins() {
        let source = "v = '1.0'\nv = \"2.0\"  # bumped\nv = 3\n";
        let found = find_literal(Path::new("a.py"), source, "v").unwrap();
        assert_eq!(found.as_deref(), Some("2.0"));
    }

    #[test]
    fn test_chained_targets_and_escapes() {
        let source = "a = b = 'it\\'s'\nr = r'\\d+'\n";
        assert_eq!(
            find_literal(Path::new("a.py"), source, "b").unwrap().as_deref(),
            Some("it's")
        );
        assert_eq!(
            find_literal(Path::new("a.py"), source, "r").unwrap().as_deref(),
            Some("\\d+")
        );
    }

    #[test]
    fn test_assignment_inside_docstring_is_ignored() {
        let source = "__version__ = \"1.2.3\"\n\n\"\"\"\nUsage:\n    __version__ = \"0.0.0\"\n\"\"\"\n";
        let found = find_literal(Path::new("a.py"), source, "__version__").unwrap();
        assert_eq!(found.as_deref(), Some("1.2.3"));
    }

    #[test]
    fn test_keyword_argument_is_not_an_assignment() {
        let source = "setup(\n    name=\"x\",\n    version=\"9.9\"\n)\n";
        let found = find_literal(Path::new("setup.py"), source, "version").unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn test_statements_after_strings_brackets_and_continuations() {
        let source = r#"DOC = '''one
version = 'in docstring'
two'''
DATA = {
    'version': '0.1',
}
msg = "has ( and \" inside"
total = 1 + \
    2
version = '2.0'
"#;
        let found = find_literal(Path::new("a.py"), source, "version").unwrap();
        assert_eq!(found.as_deref(), Some("2.0"));
        let msg = find_literal(Path::new("a.py"), source, "msg").unwrap();
        assert_eq!(msg.as_deref(), Some("has ( and \" inside"));
    }

    #[test]
    fn test_statement_lines() {
        let source = "a = (\n  1)\nb = 2 \\\n  + 3\nc = 4\n";
        assert_eq!(statement_lines(source), vec!["a = (", "b = 2 \\", "c = 4"]);
    }

    #[test]
    fn test_unsupported_file() {
        let err = find_literal(Path::new("version.js"), "", "version").unwrap_err();
        assert!(err.to_string().contains("version.js"));
    }

    #[test]
    fn test_find_literal_in_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("version.py");
        std::fs::write(&path, "VERSION = '0.9'\n").unwrap();

        let found = find_literal_in_file(&path, "VERSION").unwrap();
        assert_eq!(found.as_deref(), Some("0.9"));
    }

    #[test]
    fn test_find_literal_in_missing_file() {
        let temp = TempDir::new().unwrap();
        assert!(find_literal_in_file(&temp.path().join("nope.py"), "VERSION").is_err());
    }
}

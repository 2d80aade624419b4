//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::literals::find_literal;

/// Prefix marking a version setting that must be read from a source file
pub const LITERAL_VERSION_PREFIX: &str = "literal:";

/// Main configuration for quire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Fragment format (rst)
    pub format: String,

    /// Underline characters: top-level header first, section headers second
    pub rst_header_chars: String,

    /// Preferred order of sections in a collected entry
    pub categories: Vec<String>,

    /// Comment text marking where collected entries are inserted
    pub insert_marker: String,

    /// Title template for collected entries
    pub entry_title_template: String,

    /// Project version, or `literal: <file>: <name>`
    pub version: Option<String>,

    /// Changelog file path
    pub changelog: PathBuf,

    /// Directory holding fragment files
    pub fragment_directory: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: "rst".to_string(),
            rst_header_chars: "=-".to_string(),
            categories: ["Removed", "Added", "Changed", "Deprecated", "Fixed", "Security"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            insert_marker: "quire:insert-here".to_string(),
            entry_title_template: "{version} — {date}".to_string(),
            version: None,
            changelog: PathBuf::from("CHANGELOG.rst"),
            fragment_directory: PathBuf::from("changelog.d"),
        }
    }
}

impl Config {
    /// Validated header characters
    pub fn header_chars(&self) -> Result<HeaderChars> {
        HeaderChars::new(&self.rst_header_chars)
    }

    /// Resolve the configured version.
    ///
    /// A plain value is returned as-is. A `literal: <file>: <name>` value is
    /// looked up in the file contents returned by `read`, relative to `root`.
    pub fn resolve_version<F>(&self, root: &Path, read: F) -> Result<Option<String>>
    where
        F: FnOnce(&Path) -> std::io::Result<String>,
    {
        let Some(version) = self.version.as_deref().map(str::trim) else {
            return Ok(None);
        };
        let Some(spec) = version.strip_prefix(LITERAL_VERSION_PREFIX) else {
            return Ok(Some(version.to_string()));
        };

        let (file, name) = spec.split_once(':').ok_or_else(|| ConfigError::InvalidValue {
            field: "version".to_string(),
            message: "literal versions must look like 'literal: <file>: <name>'".to_string(),
        })?;
        let path = root.join(file.trim());
        let source = read(&path).map_err(|source| crate::error::LiteralError::Io {
            path: path.clone(),
            source,
        })?;
        find_literal(&path, &source, name.trim())
    }
}

/// The two underline characters used for RST headers.
///
/// Index 0 underlines the single top-level (dated) header, index 1 underlines
/// section headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderChars {
    top: char,
    section: char,
}

impl HeaderChars {
    /// Parse a two-character style string
    pub fn new(chars: &str) -> Result<Self> {
        let mut iter = chars.chars();
        match (iter.next(), iter.next(), iter.next()) {
            (Some(top), Some(section), None)
                if !top.is_whitespace() && !section.is_whitespace() =>
            {
                Ok(Self { top, section })
            }
            _ => Err(ConfigError::InvalidValue {
                field: "rst_header_chars".to_string(),
                message: format!(
                    "must be exactly two non-whitespace characters, got {:?}",
                    chars
                ),
            }
            .into()),
        }
    }

    /// Underline character for the top-level header
    pub fn top(&self) -> char {
        self.top
    }

    /// Underline character for section headers
    pub fn section(&self) -> char {
        self.section
    }
}

impl Default for HeaderChars {
    fn default() -> Self {
        Self {
            top: '=',
            section: '-',
        }
    }
}

//! reStructuredText format

use quire_core::{Config, HeaderChars, Result};
use tracing::{debug, instrument};

use super::FragmentFormat;
use crate::parser::parse_sections;
use crate::types::ParsedSections;

/// reStructuredText fragment format
#[derive(Debug, Clone, Default)]
pub struct RstFormat {
    header_chars: HeaderChars,
}

impl RstFormat {
    /// Create a format with the default `=-` header characters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a format with explicit header characters
    pub fn with_header_chars(header_chars: HeaderChars) -> Self {
        Self { header_chars }
    }

    /// Create a format from a two-character style string such as `"*-"`
    pub fn from_style(style: &str) -> Result<Self> {
        Ok(Self::with_header_chars(HeaderChars::new(style)?))
    }

    /// Create a format from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::with_header_chars(config.header_chars()?))
    }

    /// Header characters in use
    pub fn header_chars(&self) -> HeaderChars {
        self.header_chars
    }
}

impl FragmentFormat for RstFormat {
    fn parse_text(&self, text: &str) -> ParsedSections {
        parse_sections(text)
    }

    fn format_sections(&self, sections: &ParsedSections) -> String {
        format_sections(sections, self.header_chars.section())
    }

    fn format_header(&self, text: &str) -> String {
        format_header(text, self.header_chars.top())
    }

    fn extension(&self) -> &'static str {
        "rst"
    }
}

/// Render sections as RST.
///
/// Each header (title plus underline) and each entry is a block, and every
/// block is written as a blank line followed by the block and a line break.
/// Entries under the `None` key are written without a header.
#[instrument(skip(sections), fields(section_count = sections.len()))]
pub fn format_sections(sections: &ParsedSections, underline: char) -> String {
    let mut output = String::new();

    for section in sections {
        if let Some(title) = &section.title {
            push_block(&mut output, &header_block(title, underline));
        }
        for entry in &section.entries {
            push_block(&mut output, entry);
        }
    }

    debug!(output_len = output.len(), "rst sections formatted");
    output
}

/// Render a single top-level header, such as the date of a release
pub fn format_header(text: &str, underline: char) -> String {
    format!("\n{}\n", header_block(text, underline))
}

fn header_block(title: &str, underline: char) -> String {
    let rule: String = std::iter::repeat(underline)
        .take(title.chars().count())
        .collect();
    format!("{}\n{}", title, rule)
}

fn push_block(output: &mut String, block: &str) {
    output.push('\n');
    output.push_str(block);
    output.push('\n');
}

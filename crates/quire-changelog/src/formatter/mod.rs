//! Fragment formats

mod registry;
mod rst;

pub use registry::FormatterRegistry;
pub use rst::{format_header, format_sections, RstFormat};

use crate::types::ParsedSections;

/// A markup format that fragments are written in
pub trait FragmentFormat: Send + Sync {
    /// Parse fragment text into sections
    fn parse_text(&self, text: &str) -> ParsedSections;

    /// Render sections as text
    fn format_sections(&self, sections: &ParsedSections) -> String;

    /// Render a standalone top-level header
    fn format_header(&self, text: &str) -> String;

    /// Name of the format, also used as the fragment file extension
    fn extension(&self) -> &'static str;
}

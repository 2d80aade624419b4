//! Collecting fragments into a changelog entry

use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use quire_core::config::load_config_or_default;
use quire_core::{Config, ConfigError, Result};
use tracing::{debug, info, instrument};

use crate::formatter::{FormatterRegistry, FragmentFormat};
use crate::types::ParsedSections;

/// Date format used in entry titles
pub const ENTRY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Merge parsed fragments, in order, into one set of sections
pub fn merge_sections<I>(parts: I) -> ParsedSections
where
    I: IntoIterator<Item = ParsedSections>,
{
    let mut merged = ParsedSections::new();
    for part in parts {
        merged.merge(part);
    }
    merged
}

/// Order sections for output.
///
/// Entries without a header come first, then the configured categories in
/// configured order, then any other sections in the order they were first
/// seen.
pub fn order_sections(mut sections: ParsedSections, categories: &[String]) -> ParsedSections {
    let mut ordered = ParsedSections::new();

    if let Some(unheaded) = sections.remove(None) {
        ordered.register(None).entries.extend(unheaded.entries);
    }
    for category in categories {
        if let Some(section) = sections.remove(Some(category.as_str())) {
            ordered
                .register(section.title.as_deref())
                .entries
                .extend(section.entries);
        }
    }
    ordered.merge(sections);
    ordered
}

/// Render an entry title from a template with `{version}` and `{date}`
/// placeholders.
///
/// Without a version, `{version}` is dropped together with the separator
/// that joins it to the rest of the title, so `"{version} — {date}"` becomes
/// just the date.
pub fn entry_title(template: &str, version: Option<&str>, date: NaiveDate) -> String {
    let date = date.format(ENTRY_DATE_FORMAT).to_string();
    let template = match version {
        Some(version) => template.replace("{version}", version),
        None => drop_version_placeholder(template),
    };
    template.replace("{date}", &date).trim().to_string()
}

fn drop_version_placeholder(template: &str) -> String {
    const PLACEHOLDER: &str = "{version}";
    let is_separator = |c: char| !c.is_alphanumeric() && c != '{' && c != '}';

    let mut rest = template;
    let mut output = String::with_capacity(template.len());
    while let Some(start) = rest.find(PLACEHOLDER) {
        let before = &rest[..start];
        let after = &rest[start + PLACEHOLDER.len()..];
        let trailing = after.len() - after.trim_start_matches(is_separator).len();

        if trailing == after.len() {
            // Nothing follows: the separator before the placeholder goes too.
            output.push_str(before.trim_end_matches(is_separator));
            rest = "";
        } else {
            output.push_str(before);
            rest = &after[trailing..];
        }
    }
    output.push_str(rest);
    output
}

/// Collects fragment texts into a single rendered changelog entry
pub struct EntryCollector {
    format: Arc<dyn FragmentFormat>,
    categories: Vec<String>,
}

impl EntryCollector {
    /// Create a collector for the configured format and categories
    pub fn new(config: &Config) -> Result<Self> {
        let registry = FormatterRegistry::from_config(config)?;
        let format = registry
            .get(&config.format)
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "format".to_string(),
                message: format!(
                    "unknown format '{}', expected one of: {}",
                    config.format,
                    registry.extensions().join(", ")
                ),
            })?;

        Ok(Self {
            format,
            categories: config.categories.clone(),
        })
    }

    /// Create a collector for the project containing `dir`, using its
    /// configuration file or the defaults when it has none
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let (config, path) = load_config_or_default(dir)?;
        debug!(config = ?path, "collector configured");
        Self::new(&config)
    }

    /// Use a custom format
    pub fn with_format<F: FragmentFormat + 'static>(mut self, format: F) -> Self {
        self.format = Arc::new(format);
        self
    }

    /// The format fragments are parsed and rendered with
    pub fn format(&self) -> &dyn FragmentFormat {
        self.format.as_ref()
    }

    /// Parse and merge fragment texts into ordered sections
    pub fn sections<S: AsRef<str>>(&self, fragments: &[S]) -> ParsedSections {
        let merged = merge_sections(
            fragments
                .iter()
                .map(|fragment| self.format.parse_text(fragment.as_ref())),
        );
        order_sections(merged, &self.categories)
    }

    /// Render fragments as one entry, preceded by `title` as a top-level
    /// header when given
    #[instrument(skip(self, fragments), fields(fragment_count = fragments.len()))]
    pub fn collect<S: AsRef<str>>(&self, fragments: &[S], title: Option<&str>) -> String {
        let sections = self.sections(fragments);
        debug!(
            sections = sections.len(),
            entries = sections.entry_count(),
            "fragments merged"
        );

        let mut output = title
            .map(|title| self.format.format_header(title))
            .unwrap_or_default();
        output.push_str(&self.format.format_sections(&sections));

        info!(output_len = output.len(), "changelog entry collected");
        output
    }
}

//! Changelog types

use serde::{Deserialize, Serialize};

/// A section of a changelog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section title, or `None` for entries that appear before any header
    pub title: Option<String>,
    /// Entry texts in source order
    pub entries: Vec<String>,
}

impl Section {
    /// Create a new section
    pub fn new(title: Option<String>) -> Self {
        Self {
            title,
            entries: Vec::new(),
        }
    }

    /// Add an entry to the section
    pub fn add_entry(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// Check if section is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sections of a changelog, keyed by title in first-seen order.
///
/// Each title appears at most once. Entries for a title keep the order they
/// were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedSections {
    sections: Vec<Section>,
}

impl ParsedSections {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure a section exists, adding it at the end if it is new
    pub fn register(&mut self, title: Option<&str>) -> &mut Section {
        let index = match self.position(title) {
            Some(index) => index,
            None => {
                self.sections.push(Section::new(title.map(str::to_string)));
                self.sections.len() - 1
            }
        };
        &mut self.sections[index]
    }

    /// Append an entry to a section, registering it first if needed
    pub fn push(&mut self, title: Option<&str>, entry: impl Into<String>) {
        self.register(title).add_entry(entry);
    }

    /// Entries for a section
    pub fn get(&self, title: Option<&str>) -> Option<&[String]> {
        self.position(title)
            .map(|index| self.sections[index].entries.as_slice())
    }

    /// Section titles in order
    pub fn keys(&self) -> impl Iterator<Item = Option<&str>> {
        self.sections.iter().map(|s| s.title.as_deref())
    }

    /// Iterate over sections in order
    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if there are no sections
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of entries across all sections
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    /// Append every section of `other`, keeping this mapping's order for
    /// titles it already has
    pub fn merge(&mut self, other: ParsedSections) {
        for section in other {
            let target = self.register(section.title.as_deref());
            target.entries.extend(section.entries);
        }
    }

    /// Remove a section, returning it if present
    pub fn remove(&mut self, title: Option<&str>) -> Option<Section> {
        self.position(title).map(|index| self.sections.remove(index))
    }

    fn position(&self, title: Option<&str>) -> Option<usize> {
        self.sections
            .iter()
            .position(|s| s.title.as_deref() == title)
    }
}

impl IntoIterator for ParsedSections {
    type Item = Section;
    type IntoIter = std::vec::IntoIter<Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParsedSections {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

impl<T, E, S> FromIterator<(Option<T>, E)> for ParsedSections
where
    T: AsRef<str>,
    E: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (Option<T>, E)>>(iter: I) -> Self {
        let mut sections = ParsedSections::new();
        for (title, entries) in iter {
            let title: Option<&str> = title.as_ref().map(|t| t.as_ref());
            let section = sections.register(title);
            section.entries.extend(entries.into_iter().map(Into::into));
        }
        sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section() {
        let mut section = Section::new(Some("Added".to_string()));
        assert!(section.is_empty());

        section.add_entry("- A thing.");
        assert!(!section.is_empty());
    }

    #[test]
    fn test_first_seen_order() {
        let mut sections = ParsedSections::new();
        sections.push(Some("Fixed"), "- One.");
        sections.push(Some("Added"), "- Two.");
        sections.push(Some("Fixed"), "- Three.");

        let keys: Vec<_> = sections.keys().collect();
        assert_eq!(keys, vec![Some("Fixed"), Some("Added")]);
        assert_eq!(
            sections.get(Some("Fixed")).unwrap(),
            &["- One.".to_string(), "- Three.".to_string()]
        );
        assert_eq!(sections.entry_count(), 3);
    }

    #[test]
    fn test_none_key_is_distinct() {
        let mut sections = ParsedSections::new();
        sections.push(None, "- Loose.");
        sections.register(Some("None"));

        assert_eq!(sections.len(), 2);
        assert_eq!(sections.get(None).unwrap().len(), 1);
        assert!(sections.get(Some("None")).unwrap().is_empty());
    }

    #[test]
    fn test_merge() {
        let mut left: ParsedSections = [(Some("Added"), vec!["- a"])].into_iter().collect();
        let right: ParsedSections = [(Some("Fixed"), vec!["- f"]), (Some("Added"), vec!["- b"])]
            .into_iter()
            .collect();
        left.merge(right);

        let keys: Vec<_> = left.keys().collect();
        assert_eq!(keys, vec![Some("Added"), Some("Fixed")]);
        assert_eq!(left.get(Some("Added")).unwrap(), &["- a", "- b"]);
    }

    #[test]
    fn test_remove() {
        let mut sections: ParsedSections = [(None::<&str>, vec!["- x"])].into_iter().collect();
        let removed = sections.remove(None).unwrap();
        assert_eq!(removed.entries, vec!["- x"]);
        assert!(sections.is_empty());
    }
}

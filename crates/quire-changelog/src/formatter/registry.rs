//! Format registry

use std::sync::Arc;

use quire_core::{Config, Result};

use super::{FragmentFormat, RstFormat};

/// The fragment formats available to a project, configured from its settings
pub struct FormatterRegistry {
    formats: Vec<Arc<dyn FragmentFormat>>,
}

impl FormatterRegistry {
    /// Build every supported format with the project's header styles
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            formats: vec![Arc::new(RstFormat::from_config(config)?)],
        })
    }

    /// Look a format up by name, which is also its fragment file extension
    pub fn get(&self, extension: &str) -> Option<Arc<dyn FragmentFormat>> {
        self.formats
            .iter()
            .find(|f| f.extension() == extension)
            .cloned()
    }

    /// Names of the supported formats
    pub fn extensions(&self) -> Vec<&'static str> {
        self.formats.iter().map(|f| f.extension()).collect()
    }
}

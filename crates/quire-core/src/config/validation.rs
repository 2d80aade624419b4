//! Configuration validation

use std::collections::HashSet;

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::{Config, HeaderChars};

/// Fragment formats quire knows how to read and write
pub const SUPPORTED_FORMATS: &[&str] = &["rst"];

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_format(config)?;
    validate_categories(config)?;
    validate_entry(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_format(config: &Config) -> Result<()> {
    if !SUPPORTED_FORMATS.contains(&config.format.as_str()) {
        return Err(ConfigError::InvalidValue {
            field: "format".to_string(),
            message: format!("must be one of: {}", SUPPORTED_FORMATS.join(", ")),
        }
        .into());
    }

    HeaderChars::new(&config.rst_header_chars)?;
    Ok(())
}

fn validate_categories(config: &Config) -> Result<()> {
    let mut seen = HashSet::new();
    for (i, category) in config.categories.iter().enumerate() {
        if category.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("categories[{}]", i),
                message: "category name cannot be empty".to_string(),
            }
            .into());
        }
        if !seen.insert(category.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: format!("categories[{}]", i),
                message: format!("duplicate category '{}'", category),
            }
            .into());
        }
    }

    Ok(())
}

fn validate_entry(config: &Config) -> Result<()> {
    if config.insert_marker.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "insert_marker".to_string(),
            message: "insert marker cannot be empty".to_string(),
        }
        .into());
    }

    let template = &config.entry_title_template;
    if !template.contains("{date}") && !template.contains("{version}") {
        return Err(ConfigError::InvalidValue {
            field: "entry_title_template".to_string(),
            message: "must contain a {date} or {version} placeholder".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_invalid_format() {
        let mut config = Config::default();
        config.format = "md".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_invalid_header_chars() {
        let mut config = Config::default();
        config.rst_header_chars = "===".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_empty_categories() {
        let mut config = Config::default();
        config.categories.clear();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_blank_category() {
        let mut config = Config::default();
        config.categories.push(" ".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_duplicate_category() {
        let mut config = Config::default();
        config.categories.push("Added".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_blank_marker() {
        let mut config = Config::default();
        config.insert_marker = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_title_template_placeholder() {
        let mut config = Config::default();
        config.entry_title_template = "Release".to_string();
        assert!(validate_config(&config).is_err());
    }
}

//! Configuration loading
//!
//! Settings live in a dedicated file (`quire.toml`, `quire.yaml` or a dotted
//! variant) at the project root or inside the fragment directory, or in the
//! `[tool.quire]` table of a Python project's `pyproject.toml`.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ConfigError, Result};

use super::defaults::config_file_names;
use super::types::Config;
use super::validation::validate_config;

/// Python project file that may carry a `[tool.quire]` table
pub const PYPROJECT_FILE: &str = "pyproject.toml";

/// Where a configuration file keeps its settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// A whole TOML document
    Toml,
    /// A whole YAML document
    Yaml,
    /// The `[tool.quire]` table of `pyproject.toml`
    Pyproject,
}

impl ConfigSource {
    /// Pick the source kind from a file path
    pub fn of(path: &Path) -> Self {
        if path.file_name().is_some_and(|n| n == PYPROJECT_FILE) {
            Self::Pyproject
        } else if path.extension().is_some_and(|e| e == "toml") {
            Self::Toml
        } else {
            Self::Yaml
        }
    }
}

/// Parse configuration text.
///
/// Unknown keys are rejected. Returns `None` for a `pyproject.toml` without a
/// `[tool.quire]` table.
pub fn parse_config(source: ConfigSource, content: &str) -> Result<Option<Config>> {
    let config: Config = match source {
        ConfigSource::Toml => toml::from_str(content).map_err(ConfigError::TomlError)?,
        ConfigSource::Yaml => serde_yaml::from_str(content).map_err(ConfigError::YamlError)?,
        ConfigSource::Pyproject => match quire_table(content)? {
            Some(table) => table.try_into().map_err(ConfigError::TomlError)?,
            None => return Ok(None),
        },
    };
    Ok(Some(config))
}

/// Load and validate configuration from a file
pub fn load_config(path: &Path) -> Result<Config> {
    let source = ConfigSource::of(path);
    info!(path = %path.display(), ?source, "loading config");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config =
        parse_config(source, &content)?.ok_or_else(|| ConfigError::NotFound(path.to_path_buf()))?;

    validate_config(&config)?;
    debug!(path = %path.display(), "config loaded and validated");
    Ok(config)
}

/// Find the configuration for a project, starting at `start_dir` and walking
/// up through its ancestors.
///
/// In each directory a dedicated config file wins over one in the fragment
/// directory, which wins over `pyproject.toml`.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for config file");
    let fragment_dir = Config::default().fragment_directory;
    let found = start_dir
        .ancestors()
        .find_map(|dir| config_in_dir(dir, &fragment_dir));

    match &found {
        Some(path) => info!(path = %path.display(), "found config file"),
        None => debug!("no config file found"),
    }
    found
}

/// Load configuration for the project containing `dir`
pub fn load_config_from_dir(dir: &Path) -> Result<(Config, PathBuf)> {
    let config_path = find_config(dir).ok_or_else(|| ConfigError::NotFound(dir.to_path_buf()))?;
    let config = load_config(&config_path)?;
    Ok((config, config_path))
}

/// Load configuration for the project containing `dir`, falling back to the
/// defaults only when no config file exists. A config file that fails to
/// load is an error.
pub fn load_config_or_default(dir: &Path) -> Result<(Config, Option<PathBuf>)> {
    match find_config(dir) {
        Some(path) => Ok((load_config(&path)?, Some(path))),
        None => {
            warn!(dir = %dir.display(), "no config found, using defaults");
            Ok((Config::default(), None))
        }
    }
}

fn config_in_dir(dir: &Path, fragment_dir: &Path) -> Option<PathBuf> {
    let dedicated = config_file_names()
        .into_iter()
        .flat_map(|name| [dir.join(name), dir.join(fragment_dir).join(name)])
        .find(|path| path.is_file());
    if dedicated.is_some() {
        return dedicated;
    }

    let pyproject = dir.join(PYPROJECT_FILE);
    let has_table = std::fs::read_to_string(&pyproject)
        .ok()
        .is_some_and(|content| matches!(quire_table(&content), Ok(Some(_))));
    has_table.then_some(pyproject)
}

fn quire_table(content: &str) -> Result<Option<toml::Value>> {
    let mut document: toml::Table = toml::from_str(content).map_err(ConfigError::TomlError)?;
    Ok(match document.remove("tool") {
        Some(toml::Value::Table(mut tool)) => tool.remove("quire"),
        _ => None,
    })
}

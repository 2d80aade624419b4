//! Error types for quire

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using QuireError
pub type Result<T> = std::result::Result<T, QuireError>;

/// Main error type for quire operations
#[derive(Debug, Error)]
pub enum QuireError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Literal lookup errors
    #[error(transparent)]
    Literal(#[from] LiteralError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from reading literal values out of source files
#[derive(Debug, Error)]
pub enum LiteralError {
    /// No literal reader for this kind of file
    #[error("Can't read literals from files like {0}")]
    UnsupportedFile(PathBuf),

    /// IO error
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl QuireError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_is_transparent() {
        let err: QuireError = ConfigError::InvalidValue {
            field: "rst_header_chars".to_string(),
            message: "must be exactly two characters".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: rst_header_chars - must be exactly two characters"
        );
    }

    #[test]
    fn test_unsupported_literal_file_message() {
        let err = LiteralError::UnsupportedFile(PathBuf::from("version.js"));
        assert_eq!(
            err.to_string(),
            "Can't read literals from files like version.js"
        );
    }

    #[test]
    fn test_other() {
        assert_eq!(QuireError::other("boom").to_string(), "boom");
    }
}

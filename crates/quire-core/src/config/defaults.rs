//! Default configuration values

use super::types::Config;

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "quire.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "quire.yaml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".quire.toml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ALT_CONFIG_FILE,
        ".quire.yaml",
    ]
}

/// Generate default configuration YAML
pub fn default_config_yaml() -> String {
    let config = Config::default();
    serde_yaml::to_string(&config).unwrap_or_else(|_| DEFAULT_CONFIG_TEMPLATE.to_string())
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# quire configuration

format: rst
rst_header_chars: "=-"
categories:
  - Removed
  - Added
  - Changed
  - Deprecated
  - Fixed
  - Security
insert_marker: "quire:insert-here"
entry_title_template: "{version} — {date}"
changelog: CHANGELOG.rst
fragment_directory: changelog.d
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_to_defaults() {
        let config: Config = serde_yaml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_default_yaml_round_trips() {
        let config: Config = serde_yaml::from_str(&default_config_yaml()).unwrap();
        assert_eq!(config, Config::default());
    }
}

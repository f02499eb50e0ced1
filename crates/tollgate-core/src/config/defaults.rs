//! Default configuration values

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "tollgate.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "tollgate.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".tollgate.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_YAML,
        DEFAULT_CONFIG_TOML,
        ALT_CONFIG_FILE,
        ".tollgate.toml",
    ]
}

/// Generate default configuration TOML
pub fn default_config_toml() -> Result<String> {
    let content = toml::to_string_pretty(&Config::default()).map_err(ConfigError::TomlSerialize)?;
    Ok(content)
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Tollgate Configuration
#
# Commits starting with "release" are excluded, "merge" commits land under
# "Merges", and "type!:" headers are breaking. Everything else goes through
# the parser below.

parser:
  default_bump: none
  types:
    feat:
      section: Features
      bump: minor
    fix:
      section: Bug Fixes
      bump: patch
    perf:
      section: Performance Improvements
      bump: patch
    docs:
      section: Documentation
    style:
      section: Styles
    refactor:
      section: Code Refactoring
    test:
      section: Tests
    build:
      section: Build System
    ci:
      section: Continuous Integration
    chore:
      section: Chores
    revert:
      section: Reverts
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_matches_defaults() {
        let config: Config = serde_yaml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.parser, Config::default().parser);
    }

    #[test]
    fn test_generated_toml_round_trips() {
        let content = default_config_toml().unwrap();
        let config: Config = toml::from_str(&content).unwrap();
        assert_eq!(config.parser, Config::default().parser);
    }
}

//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_parser(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_parser(config: &Config) -> Result<()> {
    debug!(count = config.parser.types.len(), "validating commit types");
    for (name, type_config) in &config.parser.types {
        if name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "parser.types".to_string(),
                message: "type name cannot be empty".to_string(),
            }
            .into());
        }

        if !name.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(ConfigError::InvalidValue {
                field: format!("parser.types.{}", name),
                message: "type name must contain only lowercase ASCII letters".to_string(),
            }
            .into());
        }

        if type_config.section.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("parser.types.{}.section", name),
                message: "section cannot be empty".to_string(),
            }
            .into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CommitTypeConfig;
    use crate::types::BumpLevel;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_empty_section() {
        let mut config = Config::default();
        config
            .parser
            .types
            .insert("wip".to_string(), CommitTypeConfig::new("  ", BumpLevel::None));
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_invalid_type_name() {
        let mut config = Config::default();
        config
            .parser
            .types
            .insert("feat(x)".to_string(), CommitTypeConfig::new("X", BumpLevel::None));
        assert!(validate_config(&config).is_err());
    }
}

pub mod schema;

use schema::{ConfigSchemaError, Validate};
use thiserror::Error as ThisError;

pub use schema::ConfigModel;

/// Errors related to configuration parsing.
#[derive(Debug, ThisError)]
pub enum ConfigError {
    /// TOML could not be parsed into the expected structure.
    #[error("toml error: {0}")]
    CannotParseToml(String),

    /// Wrapper for data schema-level errors.
    #[error(transparent)]
    ConfigSchema(#[from] ConfigSchemaError),
}

///
/// Config
///
/// Loads and validates configuration. The parsed model is returned to the
/// caller rather than stored, so several engines in one process can each
/// carry their own table.
///

pub struct Config {}

impl Config {
    /// Parse and validate a configuration from a TOML string.
    pub fn from_toml(config_str: &str) -> Result<ConfigModel, ConfigError> {
        let config: ConfigModel = toml::from_str(config_str).map_err(|e| {
            log::warn!("config: cannot parse toml: {e}");
            ConfigError::CannotParseToml(e.to_string())
        })?;

        // validate
        config.validate().map_err(|e| {
            log::warn!("config: {e}");
            ConfigError::from(e)
        })?;

        log::debug!(
            "config: loaded {} builtin score(s): {}",
            config.builtin_scores.len(),
            config.builtin_scores.names().collect::<Vec<_>>().join(", ")
        );

        Ok(config)
    }

    /// Render a configuration back to TOML.
    pub fn to_toml(config: &ConfigModel) -> Result<String, ConfigError> {
        toml::to_string_pretty(config).map_err(|e| ConfigError::CannotParseToml(e.to_string()))
    }
}

///
/// TESTS
///

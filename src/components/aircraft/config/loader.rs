use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use super::{AircraftConfig, AircraftConfigBuilder};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl AircraftConfig {
    /// Loads a configuration file, JSON for `.json` files and YAML otherwise.
    ///
    /// Keys follow [`AircraftConfigBuilder::from_json`]; invalid values fall
    /// back to defaults. Only unreadable or unparsable files are errors.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let value: Value = if is_json {
            serde_json::from_str(&contents)?
        } else {
            serde_yaml::from_str(&contents)?
        };

        Ok(AircraftConfigBuilder::from_json(&value).build())
    }
}

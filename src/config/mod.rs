mod defaults;
mod types;

pub use defaults::default_config_path;
pub use types::*;

use crate::error::ConfigError;
use defaults::*;
use std::path::Path;

/// Upper bound on in-flight GitHub requests.
pub const MAX_CONCURRENCY: usize = 64;

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: None,
            concurrency: default_concurrency(),
            per_page: default_per_page(),
            all_pages: false,
            format: OutputFormat::default(),
            aliases: default_aliases(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load config, falling back to defaults when an implicit path does not exist
    pub fn load_or_default(path: &Path, explicit: bool) -> Result<Self, ConfigError> {
        if !explicit && !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_CONCURRENCY).contains(&self.concurrency) {
            return Err(ConfigError::Invalid(format!(
                "concurrency must be between 1 and {}, got {}",
                MAX_CONCURRENCY, self.concurrency
            )));
        }

        if !(1..=100).contains(&self.per_page) {
            return Err(ConfigError::Invalid(format!(
                "per_page must be between 1 and 100, got {}",
                self.per_page
            )));
        }

        if let Some(base) = &self.api_base {
            if base.trim().is_empty() {
                return Err(ConfigError::Invalid("api_base must not be empty".to_string()));
            }
        }

        Ok(())
    }
}

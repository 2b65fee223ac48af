//! Config loading and validation.

use super::model::Config;
use crate::error::{ChainError, Result};
use std::path::Path;
use tracing::debug;

/// Config file looked up at the repository root when no path is given.
pub const CONFIG_FILE_NAME: &str = ".chainup.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(ChainError::Config)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ChainError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path must exist. Otherwise `<repo_root>/.chainup.yaml` is
    /// used when present, and defaults when it is not.
    pub fn discover(repo_root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }

        let default_path = repo_root.join(CONFIG_FILE_NAME);
        if default_path.is_file() {
            debug!(path = %default_path.display(), "loading config");
            Self::load(&default_path)
        } else {
            debug!("no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document, treat it as all defaults.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| ChainError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// `remote` must be a non-empty remote name without whitespace or `/`.
    pub fn validate(&self) -> Result<()> {
        if self.remote.is_empty() {
            return Err(ChainError::Config(
                "config validation failed: remote must not be empty".to_string(),
            ));
        }

        if self.remote.contains('/') || self.remote.chars().any(char::is_whitespace) {
            return Err(ChainError::Config(format!(
                "config validation failed: remote '{}' must be a plain remote name (no '/' or whitespace)",
                self.remote
            )));
        }

        Ok(())
    }
}

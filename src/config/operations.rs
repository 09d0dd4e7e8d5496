//! Config loading, validation, and path resolution.

use super::model::{CONFIG_FILE_NAME, Config};
use crate::error::{Result, WtmError};
use std::path::{Path, PathBuf};
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(WtmError::ConfigError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            WtmError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load `.wtm.yml` from the main worktree, falling back to defaults when
    /// the file does not exist. A file that exists but is invalid is an error.
    pub fn load_for_repo<P: AsRef<Path>>(repo_root: P) -> Result<Self> {
        let path = repo_root.as_ref().join(CONFIG_FILE_NAME);
        if path.is_file() {
            debug!(path = %path.display(), "loading config");
            Self::load(&path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document; treat it as "all defaults".
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| WtmError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// - `defaults.base_dir` must be non-empty
    /// - `defaults.remote` must be non-empty and contain no whitespace
    pub fn validate(&self) -> Result<()> {
        if self.defaults.base_dir.trim().is_empty() {
            return Err(WtmError::ConfigError(
                "defaults.base_dir must not be empty".to_string(),
            ));
        }

        let remote = &self.defaults.remote;
        if remote.is_empty() || remote.chars().any(char::is_whitespace) {
            return Err(WtmError::ConfigError(format!(
                "defaults.remote must be a non-empty remote name, got '{}'",
                remote
            )));
        }

        Ok(())
    }

    /// Absolute managed root: `base_dir` as-is when absolute, otherwise
    /// joined onto the main worktree path.
    pub fn resolve_base_dir<P: AsRef<Path>>(&self, repo_root: P) -> PathBuf {
        let base = PathBuf::from(&self.defaults.base_dir);
        if base.is_absolute() {
            base
        } else {
            repo_root.as_ref().join(base)
        }
    }
}

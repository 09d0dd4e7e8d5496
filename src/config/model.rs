//! Config struct definitions and default values.

use serde::{Deserialize, Serialize};

/// File name of the per-repository configuration.
pub const CONFIG_FILE_NAME: &str = ".wtm.yml";

/// Configuration for wtm.
///
/// This struct represents the contents of `.wtm.yml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Config format version (informational).
    #[serde(default = "default_version")]
    pub version: String,

    /// Defaults applied to every command.
    pub defaults: Defaults,
}

/// The `defaults:` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Directory holding managed worktrees, absolute or relative to the main
    /// worktree (default: "../worktrees").
    #[serde(default = "default_base_dir")]
    pub base_dir: String,

    /// Remote used for the unpushed-commits check (default: "origin").
    #[serde(default = "default_remote")]
    pub remote: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            defaults: Defaults::default(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            remote: default_remote(),
        }
    }
}

// Default value functions for serde
pub(crate) fn default_version() -> String {
    "1.0".to_string()
}
pub(crate) fn default_base_dir() -> String {
    "../worktrees".to_string()
}
pub(crate) fn default_remote() -> String {
    "origin".to_string()
}

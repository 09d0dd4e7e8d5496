//! Configuration model for wtm.
//!
//! This module defines the Config struct that represents `.wtm.yml` at the
//! main worktree root. It supports forward-compatible YAML parsing (unknown
//! fields are ignored), sensible defaults for every field, and validation of
//! config values.

mod model;
mod operations;


// Re-export public API
pub use model::{CONFIG_FILE_NAME, Config};

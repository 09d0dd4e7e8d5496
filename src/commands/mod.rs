//! Command implementations for wtm.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command receives the invocation directory
//! explicitly.

mod add;
mod clean;
mod list;
mod remove;

use crate::cli::Command;
use crate::error::Result;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, cwd: &Path) -> Result<()> {
    match command {
        Command::Clean(args) => clean::cmd_clean(args, cwd),
        Command::List => list::cmd_list(cwd),
        Command::Add(args) => add::cmd_add(args, cwd),
        Command::Remove(args) => remove::cmd_remove(args, cwd),
    }
}

//! Repository context resolution for wtm.
//!
//! Finds the main worktree from any working directory, loads `.wtm.yml`, and
//! resolves the managed base directory. The working directory is always
//! passed in explicitly; nothing below `main` reads the process directory.

use crate::config::Config;
use crate::error::Result;
use crate::exec::Executor;
use crate::git;
use crate::worktree::WorktreeNamer;
use std::path::{Path, PathBuf};

/// Resolved paths and configuration for one invocation.
#[derive(Debug, Clone)]
pub struct RepoContext {
    /// Directory the command was invoked from.
    pub cwd: PathBuf,

    /// Absolute path to the main worktree (original clone location).
    pub repo_root: PathBuf,

    /// Loaded configuration (defaults when `.wtm.yml` is absent).
    pub config: Config,

    /// Absolute path to the managed worktree root.
    pub base_dir: PathBuf,
}

impl RepoContext {
    /// Resolve the context for a command invoked from `cwd`.
    ///
    /// This handles being invoked from the main worktree, from any linked
    /// worktree, or from a subdirectory of either.
    ///
    /// # Returns
    ///
    /// * `Ok(RepoContext)` - Successfully resolved context
    /// * `Err(WtmError::UserError)` - If not in a git repository (exit code 1)
    /// * `Err(WtmError::ConfigError)` - If `.wtm.yml` exists but is invalid
    pub fn resolve_from<P: AsRef<Path>>(exec: &dyn Executor, cwd: P) -> Result<Self> {
        let cwd = cwd.as_ref().to_path_buf();
        let repo_root = git::get_main_worktree(exec, &cwd)?;
        let config = Config::load_for_repo(&repo_root)?;
        Ok(Self::with_config(cwd, repo_root, config))
    }

    /// Build a context from already-known parts.
    pub fn with_config(cwd: PathBuf, repo_root: PathBuf, config: Config) -> Self {
        let base_dir = config.resolve_base_dir(&repo_root);
        Self {
            cwd,
            repo_root,
            config,
            base_dir,
        }
    }

    /// Remote used for unpushed-commit checks.
    pub fn remote(&self) -> &str {
        &self.config.defaults.remote
    }

    /// Display-name renderer rooted at this context's base directory.
    pub fn namer(&self) -> WorktreeNamer {
        WorktreeNamer::new(&self.base_dir)
    }
}

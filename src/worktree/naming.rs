//! Display names for worktrees.

use super::managed::relative_to_base;
use super::parse::Worktree;
use std::path::PathBuf;

/// Display name of the main worktree.
pub const MAIN_WORKTREE_NAME: &str = "@";

/// Renders worktrees as the short names operators type and select.
///
/// - main worktree: `@`
/// - worktree under the base directory: its path relative to the base, `/`-separated
/// - anything else: its path as reported by git
#[derive(Debug, Clone)]
pub struct WorktreeNamer {
    base_dir: PathBuf,
}

impl WorktreeNamer {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn name(&self, worktree: &Worktree) -> String {
        if worktree.is_main {
            return MAIN_WORKTREE_NAME.to_string();
        }
        relative_to_base(&worktree.path, &self.base_dir)
            .unwrap_or_else(|| worktree.path.display().to_string())
    }
}

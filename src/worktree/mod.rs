//! Worktree inventory and path helpers for wtm.
//!
//! - Parsing `git worktree list --porcelain` into [`Worktree`] values
//! - Deciding which worktrees live under the managed base directory
//! - Choosing the baseline branch for merge/push checks
//! - Rendering display names
//! - Adding and removing worktrees
//!
//! All git failures are mapped to exit code 3 (`WtmError::GitError`).

mod main_branch;
mod managed;
mod naming;
mod operations;
mod parse;

// Re-export public API
pub use main_branch::resolve_main_branch;
pub use managed::is_managed;
pub use naming::{MAIN_WORKTREE_NAME, WorktreeNamer};
pub use operations::{add_worktree, list_worktrees, remove_worktree};
pub use parse::Worktree;

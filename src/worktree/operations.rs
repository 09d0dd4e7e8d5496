//! Worktree listing, creation, and removal.

use super::parse::{Worktree, parse_worktree_list};
use crate::error::{Result, WtmError};
use crate::exec::Executor;
use crate::git::{run_git, run_git_interactive};
use std::path::Path;

/// List all worktrees in the repository, main worktree first.
///
/// # Returns
///
/// * `Ok(Vec<Worktree>)` - Parsed inventory (empty output yields an empty list)
/// * `Err(WtmError::GitError)` - The inventory command failed (exit code 3)
pub fn list_worktrees<P: AsRef<Path>>(exec: &dyn Executor, repo_root: P) -> Result<Vec<Worktree>> {
    let output = run_git(exec, repo_root, &["worktree", "list", "--porcelain"])
        .map_err(|e| WtmError::GitError(format!("failed to list worktrees: {}", e)))?;

    Ok(parse_worktree_list(&output.stdout))
}

/// Create a new worktree at `worktree_path`.
///
/// With `new_branch`, the branch is created from the current HEAD
/// (`git worktree add -b <branch> <path>`); otherwise the branch must
/// already exist.
pub fn add_worktree<P: AsRef<Path>>(
    exec: &dyn Executor,
    repo_root: P,
    worktree_path: &Path,
    branch: &str,
    new_branch: bool,
) -> Result<()> {
    let worktree_str = worktree_path.to_string_lossy();

    if let Some(parent) = worktree_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            WtmError::UserError(format!(
                "failed to create worktree directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let args: Vec<&str> = if new_branch {
        vec!["worktree", "add", "-b", branch, &worktree_str]
    } else {
        vec!["worktree", "add", &worktree_str, branch]
    };

    // Attached to the terminal so checkout progress and hook output are visible.
    run_git_interactive(exec, repo_root, &args).map_err(|e| {
        WtmError::GitError(format!(
            "failed to create worktree at '{}' for branch '{}': {}",
            worktree_str, branch, e
        ))
    })?;

    Ok(())
}

/// Remove a worktree.
///
/// Uses `git worktree remove <path>`, adding `--force` only when asked.
pub fn remove_worktree<P: AsRef<Path>>(
    exec: &dyn Executor,
    repo_root: P,
    worktree_path: &Path,
    force: bool,
) -> Result<()> {
    let worktree_str = worktree_path.to_string_lossy();

    let args: Vec<&str> = if force {
        vec!["worktree", "remove", "--force", &worktree_str]
    } else {
        vec!["worktree", "remove", &worktree_str]
    };

    run_git(exec, repo_root, &args).map_err(|e| {
        let force_hint = if !force {
            "\n\nIf the worktree has uncommitted changes and you want to remove it anyway,\n\
             re-run with --force (review the changes first)."
        } else {
            ""
        };

        WtmError::GitError(format!(
            "failed to remove worktree '{}': {}{}",
            worktree_str, e, force_hint
        ))
    })?;

    Ok(())
}

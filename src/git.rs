//! Git command helpers for wtm.
//!
//! Thin wrappers that build git invocations and run them through an
//! [`Executor`]. All git operations should go through this module or
//! [`crate::worktree`].

use crate::error::{Result, WtmError};
use crate::exec::{CommandOutput, Executor, ShellCommand, run_one};
use std::path::{Path, PathBuf};

/// Run a git command with the specified working directory.
///
/// # Returns
///
/// * `Ok(CommandOutput)` - On successful execution (exit code 0)
/// * `Err(WtmError::GitError)` - On non-zero exit code (mapped to exit code 3)
pub fn run_git<P: AsRef<Path>>(
    exec: &dyn Executor,
    cwd: P,
    args: &[&str],
) -> Result<CommandOutput> {
    run_one(exec, ShellCommand::git(args).current_dir(cwd))
}

/// Run a git command attached to the terminal so its progress output
/// reaches the user. Nothing is captured.
pub fn run_git_interactive<P: AsRef<Path>>(
    exec: &dyn Executor,
    cwd: P,
    args: &[&str],
) -> Result<CommandOutput> {
    run_one(exec, ShellCommand::git(args).current_dir(cwd).interactive(true))
}

/// Get the top-level directory of the worktree containing `cwd`.
///
/// Returns a `UserError` (exit 1) rather than a `GitError` when `cwd` is not
/// inside a repository.
pub fn get_repo_root<P: AsRef<Path>>(exec: &dyn Executor, cwd: P) -> Result<PathBuf> {
    let output = run_git(exec, cwd, &["rev-parse", "--show-toplevel"]).map_err(not_a_repo)?;
    Ok(PathBuf::from(&output.stdout))
}

/// Get the path to the main worktree (the original clone location).
///
/// The main worktree owns the common `.git` directory, so its path is the
/// parent of `git rev-parse --git-common-dir`. Falls back to the current
/// worktree's top level for layouts where the common directory is not named
/// `.git` (bare repositories, separate git dirs).
pub fn get_main_worktree<P: AsRef<Path>>(exec: &dyn Executor, cwd: P) -> Result<PathBuf> {
    let cwd = cwd.as_ref();
    let toplevel = get_repo_root(exec, cwd)?;

    let common = run_git(
        exec,
        cwd,
        &["rev-parse", "--path-format=absolute", "--git-common-dir"],
    )
    .map_err(not_a_repo)?;

    let common_dir = PathBuf::from(&common.stdout);
    match (common_dir.file_name(), common_dir.parent()) {
        (Some(name), Some(parent)) if name == ".git" => Ok(parent.to_path_buf()),
        _ => Ok(toplevel),
    }
}

/// Delete a local branch.
///
/// Uses `git branch -d` (requires the branch to be merged) unless `force`
/// is set, in which case `-D` is used.
pub fn delete_branch<P: AsRef<Path>>(
    exec: &dyn Executor,
    repo_root: P,
    branch: &str,
    force: bool,
) -> Result<()> {
    let delete_flag = if force { "-D" } else { "-d" };

    run_git(exec, repo_root, &["branch", delete_flag, branch]).map_err(|e| {
        let force_hint = if !force {
            "\n\nIf the branch is not fully merged and you want to delete it anyway,\n\
             re-run with --force."
        } else {
            ""
        };
        WtmError::GitError(format!(
            "failed to delete branch '{}': {}{}",
            branch, e, force_hint
        ))
    })?;

    Ok(())
}

fn not_a_repo(e: WtmError) -> WtmError {
    let msg = e.to_string();
    if msg.contains("not a git repository") || msg.contains("fatal:") {
        WtmError::UserError(
            "not inside a git repository. Run this command from within a git repository."
                .to_string(),
        )
    } else {
        WtmError::UserError(format!("git command failed: {}", msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::ProcessExecutor;
    use crate::test_support::{add_worktree, create_test_repo, git};
    use tempfile::TempDir;

    #[test]
    fn test_run_git_failure_returns_git_error() {
        let temp_dir = create_test_repo();
        let result = run_git(&ProcessExecutor, temp_dir.path(), &["checkout", "nonexistent"]);
        assert!(matches!(result, Err(WtmError::GitError(_))));
    }

    #[test]
    fn test_run_git_interactive_runs_in_directory() {
        let temp_dir = create_test_repo();
        git(temp_dir.path(), &["branch", "merged-topic"]);

        let output = run_git_interactive(
            &ProcessExecutor,
            temp_dir.path(),
            &["branch", "-d", "merged-topic"],
        )
        .unwrap();
        assert!(output.stdout.is_empty());

        let err = run_git_interactive(&ProcessExecutor, temp_dir.path(), &["branch", "-d", "gone"])
            .unwrap_err();
        assert!(matches!(err, WtmError::GitError(_)));
    }

    #[test]
    fn test_get_repo_root_from_subdirectory() {
        let temp_dir = create_test_repo();
        let subdir = temp_dir.path().join("subdir").join("nested");
        std::fs::create_dir_all(&subdir).unwrap();

        let root = get_repo_root(&ProcessExecutor, &subdir).unwrap();
        let expected = temp_dir.path().canonicalize().unwrap();
        assert_eq!(root.canonicalize().unwrap(), expected);
    }

    #[test]
    fn test_get_repo_root_outside_repo_returns_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = get_repo_root(&ProcessExecutor, temp_dir.path()).unwrap_err();
        // UserError (exit 1), not GitError (exit 3)
        assert!(matches!(err, WtmError::UserError(_)));
        assert!(err.to_string().contains("not inside a git repository"));
    }

    #[test]
    fn test_get_main_worktree_from_linked_worktree() {
        let temp_dir = create_test_repo();
        let linked = add_worktree(temp_dir.path(), "linked", "linked-branch");

        let main = get_main_worktree(&ProcessExecutor, &linked).unwrap();
        assert_eq!(
            main.canonicalize().unwrap(),
            temp_dir.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_delete_branch() {
        let temp_dir = create_test_repo();
        let path = temp_dir.path();
        git(path, &["branch", "deletable"]);

        delete_branch(&ProcessExecutor, path, "deletable", false).unwrap();

        let result = run_git(
            &ProcessExecutor,
            path,
            &["rev-parse", "--verify", "refs/heads/deletable"],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_unmerged_branch_without_force_hints_at_force() {
        let temp_dir = create_test_repo();
        let path = temp_dir.path();
        let wt = add_worktree(path, "unmerged", "unmerged");
        std::fs::write(wt.join("new.txt"), "new\n").unwrap();
        git(&wt, &["add", "."]);
        git(&wt, &["commit", "-m", "unmerged work"]);
        git(path, &["worktree", "remove", wt.to_str().unwrap()]);

        let err = delete_branch(&ProcessExecutor, path, "unmerged", false).unwrap_err();
        assert!(err.to_string().contains("--force"));

        delete_branch(&ProcessExecutor, path, "unmerged", true).unwrap();
    }
}

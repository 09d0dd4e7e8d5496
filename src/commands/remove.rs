//! Implementation of the `wtm remove` command.

use crate::cli::RemoveArgs;
use crate::config::CONFIG_FILE_NAME;
use crate::context::RepoContext;
use crate::error::{Result, WtmError};
use crate::exec::{Executor, ProcessExecutor};
use crate::git::delete_branch;
use crate::worktree::{MAIN_WORKTREE_NAME, Worktree, is_managed, list_worktrees, remove_worktree};
use std::io::Write;
use std::path::Path;

/// Execute the `wtm remove` command.
pub fn cmd_remove(args: RemoveArgs, cwd: &Path) -> Result<()> {
    let exec = ProcessExecutor;
    let ctx = RepoContext::resolve_from(&exec, cwd)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_remove(&ctx, &exec, &args, &mut out)
}

/// Remove the managed worktree named `args.name`.
///
/// Only non-main worktrees under the base directory can be removed. With
/// `with_branch`, the worktree's branch is deleted after the worktree is
/// gone; a detached worktree has no branch to delete.
pub fn run_remove(
    ctx: &RepoContext,
    exec: &dyn Executor,
    args: &RemoveArgs,
    out: &mut dyn Write,
) -> Result<()> {
    if args.name == MAIN_WORKTREE_NAME {
        return Err(WtmError::UserError(
            "refusing to remove the main worktree".to_string(),
        ));
    }

    let worktree = find_managed(ctx, exec, &args.name)?;

    remove_worktree(exec, &ctx.repo_root, &worktree.path, args.force)?;
    writeln!(out, "Removed worktree: {}", args.name)?;

    if args.with_branch && worktree.has_branch() {
        delete_branch(exec, &ctx.repo_root, &worktree.branch, args.force)?;
        writeln!(out, "Deleted branch: {}", worktree.branch)?;
    }

    Ok(())
}

fn find_managed(ctx: &RepoContext, exec: &dyn Executor, name: &str) -> Result<Worktree> {
    let namer = ctx.namer();
    list_worktrees(exec, &ctx.repo_root)?
        .into_iter()
        .filter(|wt| !wt.is_main)
        .filter(|wt| is_managed(&wt.path, &ctx.base_dir, &ctx.repo_root))
        .find(|wt| namer.name(wt) == name)
        .ok_or_else(|| {
            WtmError::UserError(format!(
                "no managed worktree named '{}'.\n\n\
                 Use `wtm list` to see available worktrees. Managed worktrees live under \
                 '{}' (set `defaults.base_dir` in {}).",
                name,
                ctx.base_dir.display(),
                CONFIG_FILE_NAME
            ))
        })
}

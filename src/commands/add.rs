//! Implementation of the `wtm add` command.
//!
//! Creates `<base_dir>/<branch>` as a linked worktree so that it is picked
//! up by `list`, `remove` and `clean`.

use crate::cli::AddArgs;
use crate::context::RepoContext;
use crate::error::{Result, WtmError};
use crate::exec::{Executor, ProcessExecutor};
use crate::worktree::add_worktree;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

/// Execute the `wtm add` command.
pub fn cmd_add(args: AddArgs, cwd: &Path) -> Result<()> {
    let exec = ProcessExecutor;
    let ctx = RepoContext::resolve_from(&exec, cwd)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_add(&ctx, &exec, &args.branch, args.new_branch, &mut out)?;
    Ok(())
}

/// Create the worktree and print its path. Returns the new worktree path.
pub fn run_add(
    ctx: &RepoContext,
    exec: &dyn Executor,
    branch: &str,
    new_branch: bool,
    out: &mut dyn Write,
) -> Result<PathBuf> {
    let worktree_path = worktree_path_for(&ctx.base_dir, branch)?;

    if worktree_path.exists() {
        return Err(WtmError::UserError(format!(
            "'{}' already exists.\n\n\
             Remove it first or pick a different branch name.",
            worktree_path.display()
        )));
    }

    add_worktree(exec, &ctx.repo_root, &worktree_path, branch, new_branch)?;

    writeln!(out, "Created worktree: {}", worktree_path.display())?;
    Ok(worktree_path)
}

/// `<base_dir>/<branch>`, rejecting names that would escape the base directory.
fn worktree_path_for(base_dir: &Path, branch: &str) -> Result<PathBuf> {
    let relative = Path::new(branch);
    let escapes = branch.trim().is_empty()
        || branch.contains('\\')
        || relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));

    if escapes {
        return Err(WtmError::UserError(format!(
            "invalid branch name '{}': it must be a relative name without '.' or '..' segments",
            branch
        )));
    }

    Ok(base_dir.join(relative))
}

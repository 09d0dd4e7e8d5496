//! Implementation of the `wtm list` command.

use crate::context::RepoContext;
use crate::error::Result;
use crate::exec::{Executor, ProcessExecutor};
use crate::worktree::{Worktree, is_managed, list_worktrees};
use std::io::Write;
use std::path::Path;

const DETACHED_LABEL: &str = "(detached)";
const UNMANAGED_LABEL: &str = "(unmanaged)";

/// Execute the `wtm list` command.
pub fn cmd_list(cwd: &Path) -> Result<()> {
    let exec = ProcessExecutor;
    let ctx = RepoContext::resolve_from(&exec, cwd)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_list(&ctx, &exec, &mut out)
}

/// Print one row per worktree, in inventory order.
///
/// The main worktree is marked with `*`; worktrees outside the base
/// directory are flagged as unmanaged since `clean` and `remove` ignore them.
pub fn run_list(ctx: &RepoContext, exec: &dyn Executor, out: &mut dyn Write) -> Result<()> {
    let worktrees = list_worktrees(exec, &ctx.repo_root)?;
    let namer = ctx.namer();

    let rows: Vec<(String, &Worktree)> = worktrees
        .iter()
        .map(|wt| (namer.name(wt), wt))
        .collect();

    let name_width = rows
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);
    let branch_width = worktrees
        .iter()
        .map(|wt| branch_label(wt).chars().count())
        .max()
        .unwrap_or(0);

    for (name, wt) in &rows {
        let marker = if wt.is_main { '*' } else { ' ' };
        let suffix = if wt.is_main || is_managed(&wt.path, &ctx.base_dir, &ctx.repo_root) {
            String::new()
        } else {
            format!("  {}", UNMANAGED_LABEL)
        };
        let line = format!(
            "{} {:<name_width$}  {:<branch_width$}  {}{}",
            marker,
            name,
            branch_label(wt),
            wt.short_head(),
            suffix,
            name_width = name_width,
            branch_width = branch_width,
        );
        writeln!(out, "{}", line.trim_end())?;
    }

    Ok(())
}

fn branch_label(wt: &Worktree) -> &str {
    if wt.has_branch() {
        &wt.branch
    } else {
        DETACHED_LABEL
    }
}

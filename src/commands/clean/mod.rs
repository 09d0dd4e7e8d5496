//! Implementation of the `wtm clean` command.
//!
//! Classifies every managed worktree as safe or unsafe to delete and removes
//! the ones the operator confirms:
//! - Merged: the branch is an ancestor of the main branch
//! - Clean: `git status --porcelain` is empty
//! - Pushed: no commits missing from `<remote>/<branch>`
//!
//! # Safety
//!
//! - The main worktree is never offered
//! - Only worktrees under the configured base directory are offered
//! - Only safe worktrees are pre-selected
//! - `git worktree remove` runs without `--force` unless asked
//! - A failed removal is reported and the rest of the batch continues

mod classify;
mod execution;
mod options;
mod selector;
mod types;


use crate::cli::CleanArgs;
use crate::context::RepoContext;
use crate::error::{Result, WtmError};
use crate::exec::{Executor, ProcessExecutor};
use crate::worktree::{Worktree, is_managed, list_worktrees};
use std::io::Write;
use std::path::Path;
use tracing::debug;

use classify::classify_all;
use execution::remove_selected;
use options::build_options;
use selector::{PreselectedSelector, PromptSelector, Selector};
use types::RemovalSummary;

/// Execute the `wtm clean` command.
///
/// # Behavior
///
/// - Without `--yes`: interactive multi-select with safe worktrees pre-selected
/// - With `--yes`: removes exactly the safe worktrees without prompting
/// - `--force`: passes `--force` to `git worktree remove`
pub fn cmd_clean(args: CleanArgs, cwd: &Path) -> Result<()> {
    let exec = ProcessExecutor;
    let ctx = RepoContext::resolve_from(&exec, cwd)?;

    let selector: Box<dyn Selector> = if args.yes {
        Box::new(PreselectedSelector)
    } else {
        Box::new(PromptSelector)
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_clean(&ctx, &exec, selector.as_ref(), args.force, &mut out)?;
    Ok(())
}

/// The cleanup flow: inventory, filter, classify, select, remove.
///
/// An inventory failure is returned as an error. Everything after that is
/// best-effort: a cancelled prompt or an empty selection removes nothing and
/// still succeeds, and removal failures are reported per worktree.
pub fn run_clean(
    ctx: &RepoContext,
    exec: &dyn Executor,
    selector: &dyn Selector,
    force: bool,
    out: &mut dyn Write,
) -> Result<RemovalSummary> {
    let worktrees = list_worktrees(exec, &ctx.repo_root)?;
    let candidates = cleanup_candidates(ctx, worktrees);
    debug!(
        count = candidates.len(),
        cwd = %ctx.cwd.display(),
        base_dir = %ctx.base_dir.display(),
        "cleanup candidates"
    );

    let statuses = classify_all(exec, &ctx.repo_root, ctx.remote(), &candidates);

    let namer = ctx.namer();
    let options = build_options(&statuses, |wt| namer.name(wt));
    if options.is_empty() {
        writeln!(out, "No worktrees to clean.")?;
        return Ok(RemovalSummary::default());
    }

    let selected = match selector.select(&options.header, &options.items) {
        Ok(selected) => selected,
        Err(WtmError::Cancelled) => {
            writeln!(out, "Cleanup cancelled. No worktrees were removed.")?;
            return Ok(RemovalSummary::default());
        }
        Err(e) => return Err(e),
    };

    if selected.is_empty() {
        writeln!(out, "No worktrees selected.")?;
        return Ok(RemovalSummary::default());
    }

    let summary = remove_selected(
        exec,
        &ctx.repo_root,
        &candidates,
        &selected,
        |wt| namer.name(wt),
        force,
        out,
    )?;

    writeln!(out)?;
    writeln!(
        out,
        "Cleanup complete: {} removed, {} failed.",
        summary.removed, summary.failed
    )?;
    if summary.failed > 0 && !force {
        writeln!(
            out,
            "Worktrees with uncommitted changes can be removed with `wtm clean --force`."
        )?;
    }

    Ok(summary)
}

/// Managed, non-main worktrees, in inventory order.
fn cleanup_candidates(ctx: &RepoContext, worktrees: Vec<Worktree>) -> Vec<Worktree> {
    worktrees
        .into_iter()
        .filter(|wt| !wt.is_main)
        .filter(|wt| is_managed(&wt.path, &ctx.base_dir, &ctx.repo_root))
        .collect()
}

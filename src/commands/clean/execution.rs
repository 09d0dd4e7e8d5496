//! Removal of the selected worktrees.

use super::types::RemovalSummary;
use crate::error::{Result, WtmError};
use crate::exec::Executor;
use crate::worktree::{Worktree, remove_worktree};
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// Remove each selected worktree in selection order.
///
/// Selections are resolved back to worktrees by display name. A name that
/// matches nothing, the main worktree, or a failing removal is reported on
/// its own single line and the batch continues. Each line is flushed as
/// soon as it is written. Only failures to write output are returned as errors.
pub fn remove_selected<F>(
    exec: &dyn Executor,
    repo_root: &Path,
    candidates: &[Worktree],
    selected: &[String],
    name_of: F,
    force: bool,
    out: &mut dyn Write,
) -> Result<RemovalSummary>
where
    F: Fn(&Worktree) -> String,
{
    let mut summary = RemovalSummary::default();

    for name in selected {
        let outcome = candidates
            .iter()
            .find(|wt| name_of(wt) == *name)
            .ok_or_else(|| WtmError::UserError("worktree not found".to_string()))
            .and_then(|wt| remove_one(exec, repo_root, wt, force));

        match outcome {
            Ok(()) => {
                summary.removed += 1;
                writeln!(out, "Removed: {}", name)?;
            }
            Err(e) => {
                summary.failed += 1;
                warn!(worktree = %name, error = %e, "failed to remove worktree");
                let message = e.to_string();
                let first_line = message.lines().next().unwrap_or_default();
                writeln!(out, "Failed:  {}: {}", name, first_line)?;
            }
        }
        out.flush()?;
    }

    Ok(summary)
}

fn remove_one(
    exec: &dyn Executor,
    repo_root: &Path,
    worktree: &Worktree,
    force: bool,
) -> Result<()> {
    if worktree.is_main {
        return Err(WtmError::UserError(
            "refusing to remove the main worktree".to_string(),
        ));
    }
    remove_worktree(exec, repo_root, &worktree.path, force)
}

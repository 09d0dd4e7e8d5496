//! Selection of the baseline branch for merge and push comparisons.

use crate::exec::Executor;
use crate::git::run_git;
use std::path::Path;
use tracing::debug;

/// Branch used when nothing better is found.
pub const DEFAULT_MAIN_BRANCH: &str = "main";

/// Fallback branch for repositories that predate `main`.
pub const LEGACY_MAIN_BRANCH: &str = "master";

/// Pick the branch that worktree branches are compared against.
///
/// 1. Resolve `main`; if git reports a non-empty name other than `main`, use it.
/// 2. Otherwise, if `master` verifies, use `master`.
/// 3. Otherwise, `main`.
///
/// Step 1 only yields a different name if `main` resolves to something else
/// (for example an ambiguous ref), which plain git does not do.
pub fn resolve_main_branch(exec: &dyn Executor, repo_root: &Path) -> String {
    if let Ok(output) = run_git(
        exec,
        repo_root,
        &["rev-parse", "--abbrev-ref", DEFAULT_MAIN_BRANCH],
    ) {
        let name = output.stdout.trim();
        if !name.is_empty() && name != DEFAULT_MAIN_BRANCH {
            debug!(branch = name, "using resolved main branch");
            return name.to_string();
        }
    }

    if run_git(exec, repo_root, &["rev-parse", "--verify", LEGACY_MAIN_BRANCH]).is_ok() {
        debug!(branch = LEGACY_MAIN_BRANCH, "using legacy main branch");
        return LEGACY_MAIN_BRANCH.to_string();
    }

    DEFAULT_MAIN_BRANCH.to_string()
}

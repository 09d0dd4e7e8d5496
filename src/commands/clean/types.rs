//! Data types for the clean command.

use crate::worktree::Worktree;

/// Reason recorded when a worktree has no branch.
pub const REASON_DETACHED: &str = "detached HEAD";
/// Reason recorded when the branch is not an ancestor of the main branch.
pub const REASON_UNMERGED: &str = "unmerged";
/// Reason recorded when `git status` reports changes.
pub const REASON_DIRTY: &str = "uncommitted changes";
/// Reason recorded when the branch has commits missing from its remote.
pub const REASON_UNPUSHED: &str = "unpushed commits";
/// Summary shown for worktrees that pass every check.
pub const SAFE_DETAILS: &str = "merged, clean, pushed";

/// Safety verdict for one worktree.
///
/// Built once by the classifier and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanStatus {
    worktree: Worktree,
    is_merged: bool,
    is_clean: bool,
    is_pushed: bool,
    is_safe: bool,
    reasons: Vec<String>,
    reason: String,
}

impl CleanStatus {
    /// Aggregate the three check results into a verdict.
    ///
    /// `reasons` must be in evaluation order (merge, clean, push).
    pub fn from_checks(
        worktree: Worktree,
        is_merged: bool,
        is_clean: bool,
        is_pushed: bool,
        reasons: Vec<String>,
    ) -> Self {
        let is_safe = is_merged && is_clean && is_pushed;
        let reason = if is_safe {
            format!("safe: {}", SAFE_DETAILS)
        } else {
            format!("unsafe: {}", reasons.join(", "))
        };

        Self {
            worktree,
            is_merged,
            is_clean,
            is_pushed,
            is_safe,
            reasons,
            reason,
        }
    }

    pub fn worktree(&self) -> &Worktree {
        &self.worktree
    }

    pub fn is_merged(&self) -> bool {
        self.is_merged
    }

    pub fn is_clean(&self) -> bool {
        self.is_clean
    }

    pub fn is_pushed(&self) -> bool {
        self.is_pushed
    }

    pub fn is_safe(&self) -> bool {
        self.is_safe
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    /// One-line summary, e.g. `unsafe: unmerged, uncommitted changes`.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Outcome of a removal batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RemovalSummary {
    /// Number of worktrees successfully removed.
    pub removed: usize,
    /// Number of selections that could not be removed.
    pub failed: usize,
}

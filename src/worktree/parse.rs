//! Parsing of `git worktree list --porcelain` output.

use std::path::PathBuf;

/// Branch marker for worktrees checked out at a bare commit.
pub const DETACHED: &str = "detached";

/// One worktree attached to the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worktree {
    /// Path to the worktree as reported by git.
    pub path: PathBuf,
    /// Branch name without `refs/heads/`; empty or [`DETACHED`] when there is none.
    pub branch: String,
    /// HEAD commit SHA.
    pub head: String,
    /// True only for the first record of the inventory.
    pub is_main: bool,
}

impl Worktree {
    /// Whether the worktree has a branch checked out.
    pub fn has_branch(&self) -> bool {
        !self.branch.is_empty() && self.branch != DETACHED
    }

    /// Abbreviated HEAD SHA for display.
    pub fn short_head(&self) -> &str {
        self.head.get(..7).unwrap_or(&self.head)
    }
}

#[derive(Default)]
struct Record {
    path: Option<PathBuf>,
    branch: String,
    head: String,
}

impl Record {
    fn flush_into(&mut self, worktrees: &mut Vec<Worktree>) {
        let record = std::mem::take(self);
        if let Some(path) = record.path {
            worktrees.push(Worktree {
                path,
                branch: record.branch,
                head: record.head,
                is_main: worktrees.is_empty(),
            });
        }
    }
}

/// Parse porcelain worktree output into worktrees, in inventory order.
///
/// Records are separated by blank lines. A trailing record without a blank
/// line is still emitted when it carries a path; records without a path are
/// dropped. Unknown lines (`bare`, `locked`, `prunable ...`) are ignored.
pub fn parse_worktree_list(output: &str) -> Vec<Worktree> {
    let mut worktrees = Vec::new();
    let mut record = Record::default();

    for line in output.lines() {
        let line = line.trim_end_matches('\r');

        if line.trim().is_empty() {
            record.flush_into(&mut worktrees);
        } else if let Some(path) = line.strip_prefix("worktree ") {
            // A new record started without a separating blank line.
            if record.path.is_some() {
                record.flush_into(&mut worktrees);
            }
            record.path = Some(PathBuf::from(path));
        } else if let Some(sha) = line.strip_prefix("HEAD ") {
            record.head = sha.to_string();
        } else if let Some(branch_ref) = line.strip_prefix("branch ") {
            record.branch = branch_ref
                .strip_prefix("refs/heads/")
                .unwrap_or(branch_ref)
                .to_string();
        } else if line == DETACHED {
            record.branch = DETACHED.to_string();
        }
    }

    record.flush_into(&mut worktrees);
    worktrees
}

//! Worktree safety classification.
//!
//! Each worktree gets three independent checks (merged, clean, pushed).
//! Check failures never abort classification: an errored merge check counts
//! as unmerged, while errored clean and push checks fall back to the
//! permissive answer (clean, pushed).

use super::types::{
    CleanStatus, REASON_DETACHED, REASON_DIRTY, REASON_UNMERGED, REASON_UNPUSHED,
};
use crate::exec::Executor;
use crate::git::run_git;
use crate::worktree::{Worktree, resolve_main_branch};
use std::path::Path;
use std::thread;
use tracing::debug;

/// Runs the per-worktree checks against one baseline branch.
pub struct Classifier<'a> {
    exec: &'a dyn Executor,
    repo_root: &'a Path,
    main_branch: String,
    remote: &'a str,
}

impl<'a> Classifier<'a> {
    pub fn new(
        exec: &'a dyn Executor,
        repo_root: &'a Path,
        main_branch: impl Into<String>,
        remote: &'a str,
    ) -> Self {
        Self {
            exec,
            repo_root,
            main_branch: main_branch.into(),
            remote,
        }
    }

    /// Classify one worktree.
    pub fn classify(&self, worktree: &Worktree) -> CleanStatus {
        let mut reasons = Vec::new();

        let is_merged = self.check_merged(worktree, &mut reasons);
        let is_clean = self.check_clean(worktree, &mut reasons);
        let is_pushed = self.check_pushed(worktree, &mut reasons);

        let status =
            CleanStatus::from_checks(worktree.clone(), is_merged, is_clean, is_pushed, reasons);
        debug!(
            path = %worktree.path.display(),
            merged = status.is_merged(),
            clean = status.is_clean(),
            pushed = status.is_pushed(),
            verdict = status.reason(),
            "classified worktree"
        );
        status
    }

    fn check_merged(&self, worktree: &Worktree, reasons: &mut Vec<String>) -> bool {
        if !worktree.has_branch() {
            reasons.push(REASON_DETACHED.to_string());
            return false;
        }

        let ancestor = run_git(
            self.exec,
            self.repo_root,
            &[
                "merge-base",
                "--is-ancestor",
                &worktree.branch,
                &self.main_branch,
            ],
        );

        if ancestor.is_ok() {
            true
        } else {
            reasons.push(REASON_UNMERGED.to_string());
            false
        }
    }

    fn check_clean(&self, worktree: &Worktree, reasons: &mut Vec<String>) -> bool {
        match run_git(self.exec, &worktree.path, &["status", "--porcelain"]) {
            Ok(output) if !output.is_empty() => {
                reasons.push(REASON_DIRTY.to_string());
                false
            }
            Ok(_) => true,
            Err(e) => {
                // A failed status query does not mark the worktree dirty.
                debug!(
                    path = %worktree.path.display(),
                    error = %e,
                    "status check failed, treating as clean"
                );
                true
            }
        }
    }

    fn check_pushed(&self, worktree: &Worktree, reasons: &mut Vec<String>) -> bool {
        if !worktree.has_branch() {
            return true;
        }

        let branch = &worktree.branch;
        let range = format!("{}/{}..{}", self.remote, branch, branch);
        let unpushed = match self.count_commits(&range) {
            Some(count) if count > 0 => count,
            _ => return true,
        };
        debug!(branch = %branch, unpushed, "branch has unpushed commits");

        let ahead_range = format!("{}..{}", self.main_branch, branch);
        let reason = match self.count_commits(&ahead_range) {
            Some(ahead) => format!("{} ({} ahead)", REASON_UNPUSHED, ahead),
            None => REASON_UNPUSHED.to_string(),
        };
        reasons.push(reason);
        false
    }

    /// `git rev-list --count <range>`; `None` when the command fails or the
    /// output is empty or not a number.
    fn count_commits(&self, range: &str) -> Option<u64> {
        match run_git(self.exec, self.repo_root, &["rev-list", "--count", range]) {
            Ok(output) => output.stdout.trim().parse().ok(),
            Err(e) => {
                debug!(range, error = %e, "commit count failed");
                None
            }
        }
    }
}

/// Classify every worktree concurrently, preserving input order.
///
/// The main branch is resolved once. Each worktree is classified on its own
/// scoped thread, which writes only to its own pre-allocated slot; the scope
/// joins every thread before results are collected.
pub fn classify_all(
    exec: &dyn Executor,
    repo_root: &Path,
    remote: &str,
    worktrees: &[Worktree],
) -> Vec<CleanStatus> {
    let main_branch = resolve_main_branch(exec, repo_root);
    debug!(main_branch = %main_branch, count = worktrees.len(), "classifying worktrees");

    let classifier = Classifier::new(exec, repo_root, main_branch, remote);
    let mut slots: Vec<Option<CleanStatus>> = vec![None; worktrees.len()];

    thread::scope(|scope| {
        for (slot, worktree) in slots.iter_mut().zip(worktrees) {
            let classifier = &classifier;
            scope.spawn(move || {
                *slot = Some(classifier.classify(worktree));
            });
        }
    });

    slots.into_iter().flatten().collect()
}

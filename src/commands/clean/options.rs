//! Choice list rendering for the cleanup prompt.

use super::types::{CleanStatus, SAFE_DETAILS};
use crate::worktree::Worktree;

const NAME_HEADER: &str = "WORKTREE";
const STATUS_HEADER: &str = "STATUS";
const DETAILS_HEADER: &str = "DETAILS";
const STATUS_WIDTH: usize = 6;

/// One selectable row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupOption {
    /// Display name; what the selector hands back.
    pub key: String,
    /// Column-aligned row text.
    pub label: String,
    /// Pre-selected in the prompt (safe worktrees only).
    pub selected: bool,
}

/// Header plus rows, sharing column widths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupOptions {
    pub header: String,
    pub items: Vec<CleanupOption>,
}

impl CleanupOptions {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Build the pre-selected choice list, one row per status, in status order.
///
/// Returns an empty set (no header) when there are no statuses.
pub fn build_options<F>(statuses: &[CleanStatus], name_of: F) -> CleanupOptions
where
    F: Fn(&Worktree) -> String,
{
    if statuses.is_empty() {
        return CleanupOptions::default();
    }

    let names: Vec<String> = statuses.iter().map(|s| name_of(s.worktree())).collect();
    let name_width = names
        .iter()
        .map(|n| n.chars().count())
        .chain(std::iter::once(NAME_HEADER.len()))
        .max()
        .unwrap_or(NAME_HEADER.len());

    let header = format_row(NAME_HEADER, STATUS_HEADER, DETAILS_HEADER, name_width);

    let items = statuses
        .iter()
        .zip(names)
        .map(|(status, name)| {
            let (word, details) = if status.is_safe() {
                ("safe", SAFE_DETAILS.to_string())
            } else {
                ("unsafe", status.reasons().join(", "))
            };
            CleanupOption {
                label: format_row(&name, word, &details, name_width),
                key: name,
                selected: status.is_safe(),
            }
        })
        .collect();

    CleanupOptions { header, items }
}

fn format_row(name: &str, status: &str, details: &str, name_width: usize) -> String {
    format!(
        "{:<name_width$}  {:<status_width$}  {}",
        name,
        status,
        details,
        name_width = name_width,
        status_width = STATUS_WIDTH
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::clean::types::{REASON_DETACHED, REASON_DIRTY, REASON_UNMERGED};
    use std::path::PathBuf;

    fn status(name: &str, safe: bool, reasons: &[&str]) -> CleanStatus {
        let wt = Worktree {
            path: PathBuf::from(format!("/trees/{}", name)),
            branch: name.to_string(),
            head: "abc".to_string(),
            is_main: false,
        };
        CleanStatus::from_checks(
            wt,
            safe,
            true,
            true,
            reasons.iter().map(|r| r.to_string()).collect(),
        )
    }

    fn name_of(wt: &Worktree) -> String {
        wt.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_empty_statuses_yield_no_options() {
        let options = build_options(&[], name_of);
        assert!(options.is_empty());
        assert!(options.header.is_empty());
    }

    #[test]
    fn test_only_safe_worktrees_are_preselected() {
        let statuses = vec![
            status("done", true, &[]),
            status("wip", false, &[REASON_UNMERGED, REASON_DIRTY]),
            status("also-done", true, &[]),
            status("probe", false, &[REASON_DETACHED]),
        ];
        let options = build_options(&statuses, name_of);

        let selected: Vec<&str> = options
            .items
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.key.as_str())
            .collect();
        assert_eq!(selected, vec!["done", "also-done"]);
        assert_eq!(options.items.len(), 4);
    }

    #[test]
    fn test_labels_are_column_aligned() {
        let statuses = vec![
            status("a-very-long-worktree-name", true, &[]),
            status("wip", false, &[REASON_UNMERGED, REASON_DIRTY]),
        ];
        let options = build_options(&statuses, name_of);

        assert_eq!(
            options.items[0].label,
            "a-very-long-worktree-name  safe    merged, clean, pushed"
        );
        assert_eq!(
            options.items[1].label,
            "wip                        unsafe  unmerged, uncommitted changes"
        );
        assert_eq!(
            options.header,
            "WORKTREE                   STATUS  DETAILS"
        );
    }

    #[test]
    fn test_short_names_pad_to_header_width() {
        let options = build_options(&[status("x", true, &[])], name_of);
        assert_eq!(options.header, "WORKTREE  STATUS  DETAILS");
        assert_eq!(options.items[0].label, "x         safe    merged, clean, pushed");
    }

    #[test]
    fn test_keys_preserve_status_order() {
        let statuses = vec![status("b", true, &[]), status("a", true, &[])];
        let keys: Vec<String> = build_options(&statuses, name_of)
            .items
            .into_iter()
            .map(|o| o.key)
            .collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}

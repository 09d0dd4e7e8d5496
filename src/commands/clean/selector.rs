//! Operator confirmation of which worktrees to remove.

use super::options::CleanupOption;
use crate::error::{Result, WtmError};
use dialoguer::MultiSelect;
use dialoguer::theme::ColorfulTheme;

const PROMPT: &str =
    "Select worktrees to remove (space to toggle, enter to confirm, esc to cancel)";

/// Presents the choice list and returns the confirmed keys, in list order.
///
/// Returns `WtmError::Cancelled` when the operator dismisses the prompt.
pub trait Selector {
    fn select(&self, header: &str, options: &[CleanupOption]) -> Result<Vec<String>>;
}

/// Interactive multi-select prompt on the terminal.
#[derive(Debug, Default)]
pub struct PromptSelector;

impl Selector for PromptSelector {
    fn select(&self, header: &str, options: &[CleanupOption]) -> Result<Vec<String>> {
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        let defaults: Vec<bool> = options.iter().map(|o| o.selected).collect();

        let chosen = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{}\n    {}", PROMPT, header))
            .items(&labels)
            .defaults(&defaults)
            .interact_opt()
            .map_err(|e| {
                WtmError::UserError(format!(
                    "interactive selection failed: {}\n\n\
                     Not running in a terminal? Use `wtm clean --yes` to remove \
                     all safe worktrees.",
                    e
                ))
            })?;

        match chosen {
            Some(indices) => Ok(indices
                .into_iter()
                .filter_map(|i| options.get(i))
                .map(|o| o.key.clone())
                .collect()),
            None => Err(WtmError::Cancelled),
        }
    }
}

/// Accepts the pre-selection without prompting (`--yes`).
#[derive(Debug, Default)]
pub struct PreselectedSelector;

impl Selector for PreselectedSelector {
    fn select(&self, _header: &str, options: &[CleanupOption]) -> Result<Vec<String>> {
        Ok(options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.key.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(key: &str, selected: bool) -> CleanupOption {
        CleanupOption {
            key: key.to_string(),
            label: format!("{} row", key),
            selected,
        }
    }

    #[test]
    fn test_preselected_selector_returns_safe_keys_in_order() {
        let options = vec![option("a", true), option("b", false), option("c", true)];
        let keys = PreselectedSelector.select("header", &options).unwrap();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn test_preselected_selector_with_nothing_selected() {
        let options = vec![option("a", false)];
        assert!(PreselectedSelector.select("header", &options).unwrap().is_empty());
    }
}

//! CLI argument parsing for wtm.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};

/// wtm: Git worktree manager.
///
/// Worktrees live under a managed base directory (`../worktrees` by default,
/// configurable in `.wtm.yml`). `wtm clean` finds the ones that are merged,
/// clean and pushed, and removes the ones you confirm.
#[derive(Parser, Debug)]
#[command(name = "wtm")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for wtm.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactively remove managed worktrees.
    ///
    /// Each worktree is checked for being merged into the main branch,
    /// free of uncommitted changes, and pushed to the remote. Safe
    /// worktrees are pre-selected.
    Clean(CleanArgs),

    /// List all worktrees with their display names.
    #[command(alias = "ls")]
    List,

    /// Create a managed worktree for a branch.
    Add(AddArgs),

    /// Remove one managed worktree by name.
    #[command(alias = "rm")]
    Remove(RemoveArgs),
}

/// Arguments for the `clean` command.
#[derive(Parser, Debug)]
pub struct CleanArgs {
    /// Pass --force to `git worktree remove` (discards uncommitted changes).
    #[arg(long, short = 'f')]
    pub force: bool,

    /// Remove the safe worktrees without prompting.
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Arguments for the `add` command.
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Branch to check out; also the worktree's name under the base directory.
    pub branch: String,

    /// Create the branch from the current HEAD.
    #[arg(long, short = 'b')]
    pub new_branch: bool,
}

/// Arguments for the `remove` command.
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Display name of the worktree (as shown by `wtm list`).
    pub name: String,

    /// Remove even with uncommitted changes; with --with-branch, delete an
    /// unmerged branch too.
    #[arg(long, short = 'f')]
    pub force: bool,

    /// Delete the worktree's branch after removing it.
    #[arg(long)]
    pub with_branch: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_clean_defaults() {
        let cli = Cli::try_parse_from(["wtm", "clean"]).unwrap();
        if let Command::Clean(args) = cli.command {
            assert!(!args.force);
            assert!(!args.yes);
        } else {
            panic!("Expected Clean command");
        }
    }

    #[test]
    fn parse_clean_flags() {
        let cli = Cli::try_parse_from(["wtm", "clean", "--force", "-y"]).unwrap();
        if let Command::Clean(args) = cli.command {
            assert!(args.force);
            assert!(args.yes);
        } else {
            panic!("Expected Clean command");
        }
    }

    #[test]
    fn parse_list_and_alias() {
        let cli = Cli::try_parse_from(["wtm", "list"]).unwrap();
        assert!(matches!(cli.command, Command::List));

        let cli = Cli::try_parse_from(["wtm", "ls"]).unwrap();
        assert!(matches!(cli.command, Command::List));
    }

    #[test]
    fn parse_add_new_branch() {
        let cli = Cli::try_parse_from(["wtm", "add", "feature/login", "-b"]).unwrap();
        if let Command::Add(args) = cli.command {
            assert_eq!(args.branch, "feature/login");
            assert!(args.new_branch);
        } else {
            panic!("Expected Add command");
        }
    }

    #[test]
    fn parse_add_requires_branch() {
        assert!(Cli::try_parse_from(["wtm", "add"]).is_err());
    }

    #[test]
    fn parse_remove_full() {
        let cli =
            Cli::try_parse_from(["wtm", "rm", "feature", "--force", "--with-branch"]).unwrap();
        if let Command::Remove(args) = cli.command {
            assert_eq!(args.name, "feature");
            assert!(args.force);
            assert!(args.with_branch);
        } else {
            panic!("Expected Remove command");
        }
    }

    #[test]
    fn parse_unknown_command_fails() {
        assert!(Cli::try_parse_from(["wtm", "approve"]).is_err());
    }
}

use crate::error::{Result, WtmError};
use crate::exec::{CommandOutput, Executor, ShellCommand};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Mutex;
use tempfile::TempDir;

/// Directory (relative to the test repo) that tests use as the managed root.
pub(crate) const TEST_WORKTREES_DIR: &str = ".worktrees";

pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    // Ensure the repo uses a deterministic default branch name across environments.
    // This sets HEAD to an unborn `main` branch before the first commit.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    std::fs::write(path.join(".gitignore"), format!("{}/\n", TEST_WORKTREES_DIR)).unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    temp_dir
}

/// Create a linked worktree on a new branch under `.worktrees/<name>`.
pub(crate) fn add_worktree(repo: &Path, name: &str, branch: &str) -> PathBuf {
    let worktree_path = repo.join(TEST_WORKTREES_DIR).join(name);
    git(
        repo,
        &[
            "worktree",
            "add",
            "-b",
            branch,
            worktree_path.to_str().unwrap(),
        ],
    );
    worktree_path
}

pub(crate) fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}

/// Scripted executor keyed by command line.
///
/// Responses registered with [`FakeExecutor::on_in`] only match commands run
/// in that directory and take precedence over directory-agnostic ones.
/// Unscripted commands fail with a `GitError`. Every invocation is recorded.
#[derive(Default)]
pub(crate) struct FakeExecutor {
    responses: HashMap<String, std::result::Result<String, String>>,
    calls: Mutex<Vec<String>>,
}

impl FakeExecutor {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn on(mut self, command_line: &str, stdout: &str) -> Self {
        self.responses
            .insert(command_line.to_string(), Ok(stdout.to_string()));
        self
    }

    pub(crate) fn on_in(mut self, dir: &Path, command_line: &str, stdout: &str) -> Self {
        self.responses
            .insert(dir_key(dir, command_line), Ok(stdout.to_string()));
        self
    }

    pub(crate) fn fail(mut self, command_line: &str, message: &str) -> Self {
        self.responses
            .insert(command_line.to_string(), Err(message.to_string()));
        self
    }

    pub(crate) fn fail_in(mut self, dir: &Path, command_line: &str, message: &str) -> Self {
        self.responses
            .insert(dir_key(dir, command_line), Err(message.to_string()));
        self
    }

    /// All command lines run so far, in invocation order.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .clone()
    }

    /// Number of recorded calls whose command line starts with `prefix`.
    pub(crate) fn count(&self, prefix: &str) -> usize {
        self.calls()
            .iter()
            .filter(|line| line.starts_with(prefix))
            .count()
    }

    fn respond(&self, command: &ShellCommand) -> Result<CommandOutput> {
        let line = command.command_line();
        self.calls
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .push(line.clone());

        let scoped = command
            .dir
            .as_ref()
            .and_then(|dir| self.responses.get(&dir_key(dir, &line)));

        match scoped.or_else(|| self.responses.get(&line)) {
            Some(Ok(stdout)) => Ok(CommandOutput {
                stdout: stdout.trim().to_string(),
                stderr: String::new(),
            }),
            Some(Err(message)) => Err(WtmError::GitError(message.clone())),
            None => Err(WtmError::GitError(format!("unexpected command: {}", line))),
        }
    }
}

impl Executor for FakeExecutor {
    fn execute(&self, commands: &[ShellCommand]) -> Vec<Result<CommandOutput>> {
        commands.iter().map(|c| self.respond(c)).collect()
    }
}

fn dir_key(dir: &Path, command_line: &str) -> String {
    format!("{}$ {}", dir.display(), command_line)
}

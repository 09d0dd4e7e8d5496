//! External command execution for wtm.
//!
//! Every git invocation goes through an [`Executor`]. The production
//! implementation spawns real processes; tests substitute a scripted one.
//! Executors are shared across classification threads, so implementations
//! must be `Send + Sync`.

use crate::error::{Result, WtmError};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tracing::debug;

/// A single external command to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    /// Program name (e.g. `git`).
    pub name: String,
    /// Arguments passed to the program.
    pub args: Vec<String>,
    /// Working directory; inherits the process directory when `None`.
    pub dir: Option<PathBuf>,
    /// Attach the child to the terminal instead of capturing its output.
    pub interactive: bool,
}

impl ShellCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            dir: None,
            interactive: false,
        }
    }

    /// Build a `git` command from string arguments.
    pub fn git(args: &[&str]) -> Self {
        Self::new("git").args(args)
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|a| a.to_string()));
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// The command as it would be typed, e.g. `git status --porcelain`.
    pub fn command_line(&self) -> String {
        if self.args.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.args.join(" "))
        }
    }
}

/// Captured output of a successful command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl CommandOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns true if stdout is empty.
    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty()
    }
}

/// Runs batches of external commands.
///
/// The returned vector is parallel to `commands`: entry `i` is the outcome of
/// `commands[i]`. A non-zero exit status is reported as an `Err` entry, never
/// by dropping the entry.
pub trait Executor: Send + Sync {
    fn execute(&self, commands: &[ShellCommand]) -> Vec<Result<CommandOutput>>;
}

/// Run a single command through an executor.
pub fn run_one(exec: &dyn Executor, command: ShellCommand) -> Result<CommandOutput> {
    let line = command.command_line();
    exec.execute(std::slice::from_ref(&command))
        .into_iter()
        .next()
        .unwrap_or_else(|| {
            Err(WtmError::GitError(format!(
                "executor returned no result for `{}`",
                line
            )))
        })
}

/// Executor backed by `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl Executor for ProcessExecutor {
    fn execute(&self, commands: &[ShellCommand]) -> Vec<Result<CommandOutput>> {
        commands.iter().map(run_process).collect()
    }
}

fn run_process(command: &ShellCommand) -> Result<CommandOutput> {
    debug!(command = %command.command_line(), dir = ?command.dir, "running command");

    let mut process = Command::new(&command.name);
    process.args(&command.args);
    if let Some(dir) = &command.dir {
        process.current_dir(dir);
    }

    let subcommand = command.args.first().map(String::as_str).unwrap_or("");

    if command.interactive {
        let status = process
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| spawn_error(command, subcommand, e))?;

        return if status.success() {
            Ok(CommandOutput::default())
        } else {
            Err(WtmError::GitError(format!(
                "{} {} failed (exit code {})",
                command.name,
                subcommand,
                status.code().unwrap_or(-1)
            )))
        };
    }

    let output = process
        .output()
        .map_err(|e| spawn_error(command, subcommand, e))?;

    let captured = CommandOutput::from_output(&output);

    if output.status.success() {
        Ok(captured)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if captured.stderr.is_empty() {
            captured.stdout
        } else {
            captured.stderr
        };

        Err(WtmError::GitError(format!(
            "{} {} failed (exit code {}): {}",
            command.name, subcommand, exit_code, error_msg
        )))
    }
}

fn spawn_error(command: &ShellCommand, subcommand: &str, e: std::io::Error) -> WtmError {
    WtmError::GitError(format!(
        "failed to execute {} {}: {}",
        command.name, subcommand, e
    ))
}

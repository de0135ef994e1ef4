//! Process execution seam for the orchestrator.

use crate::error::{FfdepsError, Result};
use crate::shell::{execute, CommandOptions, CommandResult};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag that stops further process launches once set.
///
/// A running process is never interrupted; the flag is checked before each
/// launch.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Runs one command line to completion.
pub trait CommandRunner {
    /// Run `command` in `cwd` (the current directory when `None`).
    ///
    /// Returns `Err(Cancelled)` if the launch was refused, `Err(CommandFailed)`
    /// if the process could not be started, and `Ok` with the exit status
    /// otherwise.
    fn run(&mut self, command: &str, cwd: Option<&Path>) -> Result<CommandResult>;
}

/// Runs commands through the platform shell.
#[derive(Debug, Clone, Default)]
pub struct ShellRunner {
    token: CancellationToken,
    capture_output: bool,
}

impl ShellRunner {
    /// `capture_output` hides subprocess output; failures still report stderr.
    pub fn new(token: CancellationToken, capture_output: bool) -> Self {
        Self {
            token,
            capture_output,
        }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&mut self, command: &str, cwd: Option<&Path>) -> Result<CommandResult> {
        if self.token.is_cancelled() {
            return Err(FfdepsError::Cancelled {
                command: command.to_string(),
            });
        }

        let options = CommandOptions {
            cwd: cwd.map(Path::to_path_buf),
            capture_stdout: self.capture_output,
            capture_stderr: self.capture_output,
        };
        execute(command, &options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_clones_share_state() {
        let token = CancellationToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn shell_runner_runs_commands() {
        let mut runner = ShellRunner::new(CancellationToken::new(), true);
        let result = runner.run("echo ran", None).unwrap();
        assert!(result.success);
        assert!(result.stdout.contains("ran"));
    }

    #[test]
    fn cancelled_runner_refuses_to_launch() {
        let token = CancellationToken::new();
        let mut runner = ShellRunner::new(token.clone(), true);
        token.cancel();
        let err = runner.run("echo never", None).unwrap_err();
        assert!(matches!(err, FfdepsError::Cancelled { ref command } if command == "echo never"));
    }

    #[test]
    fn runner_honours_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut runner = ShellRunner::new(CancellationToken::new(), true);
        let cmd = if cfg!(target_os = "windows") {
            "echo x> marker.txt"
        } else {
            "touch marker.txt"
        };
        let result = runner.run(cmd, Some(temp.path())).unwrap();
        assert!(result.success);
        assert!(temp.path().join("marker.txt").exists());
    }
}

//! External command execution.
//!
//! Commands are run directly from an argv, without a shell in between, and
//! block until the child exits. The child shares the parent's stdout and
//! stderr, so its diagnostics reach the user unchanged.

use crate::error::{Result, StageError};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,
}

/// Execute `argv[0]` with the remaining elements as arguments.
///
/// A non-zero exit is reported through [`CommandResult::success`], not as an
/// error. `Err` means the process could not be started.
pub fn execute(argv: &[String], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let Some((program, args)) = argv.split_first() else {
        return Err(StageError::SpawnFailed {
            command: String::new(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
        });
    };

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    cmd.stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    tracing::debug!("Running: {}", display_command(argv));

    let status = cmd.status().map_err(|source| StageError::SpawnFailed {
        command: display_command(argv),
        source,
    })?;

    Ok(CommandResult {
        exit_code: status.code(),
        duration: start.elapsed(),
        success: status.success(),
    })
}

/// Render an argv as a single line, quoting arguments that contain spaces.
pub fn display_command(argv: &[String]) -> String {
    argv.iter()
        .map(|arg| {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                format!("'{}'", arg)
            } else {
                arg.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[cfg(unix)]
    #[test]
    fn execute_successful_command() {
        let result = execute(&argv(&["sh", "-c", "exit 0"]), &CommandOptions::default()).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
    }

    #[cfg(unix)]
    #[test]
    fn execute_failing_command_is_not_an_error() {
        let result = execute(&argv(&["sh", "-c", "exit 3"]), &CommandOptions::default()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[cfg(unix)]
    #[test]
    fn execute_with_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        let options = CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
        };

        let result = execute(&argv(&["sh", "-c", "touch here"]), &options).unwrap();

        assert!(result.success);
        assert!(temp.path().join("here").exists());
    }

    #[cfg(unix)]
    #[test]
    fn stdin_is_closed() {
        let temp = tempfile::TempDir::new().unwrap();
        let options = CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
        };

        let result = execute(&argv(&["sh", "-c", "cat > read.txt"]), &options).unwrap();

        assert!(result.success);
        assert_eq!(std::fs::read_to_string(temp.path().join("read.txt")).unwrap(), "");
    }

    #[test]
    fn missing_program_is_spawn_failure() {
        let err = execute(
            &argv(&["layerstage-no-such-program"]),
            &CommandOptions::default(),
        )
        .unwrap_err();
        match err {
            StageError::SpawnFailed { command, .. } => {
                assert_eq!(command, "layerstage-no-such-program");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_argv_is_spawn_failure() {
        let err = execute(&[], &CommandOptions::default()).unwrap_err();
        assert!(matches!(err, StageError::SpawnFailed { .. }));
    }

    #[test]
    fn display_command_quotes_whitespace() {
        let line = display_command(&argv(&["pip", "install", "-r", "my reqs.txt"]));
        assert_eq!(line, "pip install -r 'my reqs.txt'");
    }
}

//! Shell command execution
//!
//! Every external tool ccsync drives (peer CLI, compile scripts, npm, docker)
//! goes through [`ShellRunner`], which owns dry-run handling: in dry-run mode
//! the command is reported as skipped and an empty stdout is returned.

use std::process::{Command, Stdio};
use std::sync::Arc;

use thiserror::Error;

use crate::domain::ports::{NoopEventSink, ReconcileEvent, ReconcileEventSink};

/// Error raised when a shell command cannot run or exits non-zero
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("could not start `{command}`: {message}")]
    Spawn { command: String, message: String },
    #[error("`{command}` exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },
}

/// Runs command lines with `bash -c`
#[derive(Clone)]
pub struct ShellRunner {
    dry_run: bool,
    sink: Arc<dyn ReconcileEventSink>,
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new(false, Arc::new(NoopEventSink))
    }
}

impl ShellRunner {
    pub fn new(dry_run: bool, sink: Arc<dyn ReconcileEventSink>) -> Self {
        Self { dry_run, sink }
    }

    /// Run `command` and return its stdout.
    pub fn run(&self, command: &str) -> Result<String, ShellError> {
        if self.dry_run {
            self.sink.on_event(ReconcileEvent::CommandSkipped {
                command: command.to_string(),
            });
            return Ok(String::new());
        }

        tracing::debug!(%command, "running");
        let output = Command::new("bash")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ShellError::Spawn {
                command: command.to_string(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::debug!(%command, status = %output.status, %stderr, "command failed");
            return Err(ShellError::Failed {
                command: command.to_string(),
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Quote a string for safe use in shell commands
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

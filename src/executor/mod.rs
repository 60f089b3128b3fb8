//! Child process execution and output capture.

use std::io;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

use crate::invocation::Invocation;

/// Why one invocation failed. Nothing below the entry point handles this:
/// the first failure aborts the rest of the suite.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The runtime executable could not be found or launched.
    #[error("failed to launch `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    /// The child ran but exited non-zero.
    #[error("`{command}` exited with {status}\n--- captured stdout ---\n{stdout}\n--- captured stderr ---\n{stderr}")]
    Failed {
        command: String,
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },
}

impl ExecutionError {
    /// Exit code of the failed child, when it exited with one.
    pub fn status_code(&self) -> Option<i32> {
        match self {
            ExecutionError::Spawn { .. } => None,
            ExecutionError::Failed { status, .. } => status.code(),
        }
    }
}

/// Narrow capability seam over process spawning so the suite can run
/// against a double without touching real child processes.
pub trait Execute {
    /// Run the invocation to completion and return its captured stdout.
    fn execute(&self, invocation: &Invocation) -> Result<String, ExecutionError>;
}

/// Spawns one real OS process per call and blocks until it terminates.
/// No reuse, no pooling, no timeout; a hung child hangs the harness.
pub struct ProcessExecutor;

impl Execute for ProcessExecutor {
    fn execute(&self, invocation: &Invocation) -> Result<String, ExecutionError> {
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| ExecutionError::Spawn {
                command: invocation.command_line(),
                source,
            })?;

        let stdout = normalize_newlines(&String::from_utf8_lossy(&output.stdout));
        let stderr = normalize_newlines(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(ExecutionError::Failed {
                command: invocation.command_line(),
                status: output.status,
                stdout,
                stderr,
            });
        }

        // Stderr is diagnostic only; pass it through to our own stream.
        if !stderr.is_empty() {
            eprint!("{}", stderr);
        }
        Ok(stdout)
    }
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
}

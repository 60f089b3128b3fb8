//! Invocation assembly for a single artifact execution.

use std::path::{Path, PathBuf};

use crate::runtime::RuntimeDescriptor;

/// One fully assembled command plus its working directory. Built fresh for
/// every execution and never mutated afterwards. Tokens are discrete argv
/// elements; they are never joined into a shell string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    /// Assemble the argv tokens in the fixed order: runtime executable,
    /// runtime flags, artifact path, artifact arguments. Every token passes
    /// through verbatim; there is no validation or quoting.
    pub fn assemble(
        runtime: &RuntimeDescriptor,
        artifact: &str,
        artifact_args: &[String],
        cwd: &Path,
    ) -> Self {
        let mut args = Vec::with_capacity(runtime.flags.len() + 1 + artifact_args.len());
        args.extend(runtime.flags.iter().cloned());
        args.push(artifact.to_string());
        args.extend(artifact_args.iter().cloned());
        Self {
            program: runtime.program.clone(),
            args,
            cwd: cwd.to_path_buf(),
        }
    }

    /// Display-only rendering for error messages. Not suitable for a shell.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::errors::LintError;

/// Builder for constructing external processes.
///
/// Provides a fluent API for setting program, arguments, environment
/// variables, and working directory. Execution goes through an [`Exec`]
/// implementation so callers can substitute a fake in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBuilder {
    program: String,
    args: Vec<String>,
    env: BTreeMap<String, String>,
    cwd: Option<PathBuf>,
}

impl CommandBuilder {
    /// Create a new builder for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: BTreeMap::new(),
            cwd: None,
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append multiple arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set an environment variable for the child process.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Set the working directory for the child process.
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    pub fn get_env(&self, key: &str) -> Option<&str> {
        self.env.get(key).map(String::as_str)
    }

    pub fn get_cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    /// Execute the command on the host and return its output.
    pub fn exec(&self) -> Result<Output, LintError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        for (k, v) in &self.env {
            cmd.env(k, v);
        }
        if let Some(ref dir) = self.cwd {
            cmd.current_dir(dir);
        }
        tracing::debug!(program = %self.program, args = ?self.args, "spawning process");
        cmd.output().map_err(|e| LintError::Process {
            program: self.program.clone(),
            message: e.to_string(),
        })
    }
}

/// Something that can run a [`CommandBuilder`].
pub trait Exec {
    fn run(&self, command: &CommandBuilder) -> Result<Output, LintError>;
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExec;

impl Exec for SystemExec {
    fn run(&self, command: &CommandBuilder) -> Result<Output, LintError> {
        command.exec()
    }
}

/// Turn a finished process into an error unless its exit code is one of
/// `accepted`. A process killed by a signal is always an error.
pub fn ensure_exit_code(
    command: &CommandBuilder,
    output: &Output,
    accepted: &[i32],
) -> Result<(), LintError> {
    match output.status.code() {
        Some(code) if accepted.contains(&code) => Ok(()),
        code => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let status = code.map_or_else(|| "signal".to_string(), |c| c.to_string());
            Err(LintError::Process {
                program: command.program().to_string(),
                message: format!("exited with status {status}: {}", stderr.trim()),
            })
        }
    }
}

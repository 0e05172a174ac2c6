//! Operation: run ESLint and decode its JSON report.

use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Deserialize;

use nodelint_util::errors::LintError;
use nodelint_util::process::{ensure_exit_code, CommandBuilder, Exec};

use crate::ops_modules::NODE_MODULES;

/// ESLint exits with 1 when it found problems.
const ACCEPTED_EXIT_CODES: [i32; 2] = [0, 1];

/// One problem ESLint reported.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LintMessage {
    #[serde(default, rename = "ruleId")]
    pub rule_id: Option<String>,
    pub message: String,
    #[serde(default)]
    pub line: u32,
    #[serde(default, rename = "endLine")]
    pub end_line: Option<u32>,
    #[serde(default)]
    pub severity: u8,
}

/// Problems found in a single file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileResult {
    #[serde(rename = "filePath")]
    pub file_path: String,
    #[serde(default)]
    pub messages: Vec<LintMessage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EslintReport {
    pub results: Vec<FileResult>,
}

/// `json-with-metadata` wraps the results; plain `json` is a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawReport {
    WithMetadata { results: Vec<FileResult> },
    Plain(Vec<FileResult>),
}

impl EslintReport {
    pub fn from_json(stdout: &[u8]) -> Result<Self, LintError> {
        let raw: RawReport = serde_json::from_slice(stdout).map_err(|e| LintError::Lint {
            message: format!("failed to decode eslint output: {e}"),
        })?;
        let results = match raw {
            RawReport::WithMetadata { results } | RawReport::Plain(results) => results,
        };
        Ok(Self { results })
    }

    pub fn message_count(&self) -> usize {
        self.results.iter().map(|r| r.messages.len()).sum()
    }
}

/// The project-local ESLint executable.
pub fn eslint_bin(repo: &Path) -> PathBuf {
    repo.join(NODE_MODULES).join(".bin").join("eslint")
}

/// Run the repository's ESLint with `args` and return its report.
pub fn run_eslint(
    exec: &dyn Exec,
    repo: &Path,
    path_env: &str,
    args: &[String],
) -> miette::Result<EslintReport> {
    nodelint_util::progress::status("Linting", &repo.display().to_string());
    let start = Instant::now();

    let cmd = CommandBuilder::new(eslint_bin(repo).to_string_lossy())
        .args(args.iter().cloned())
        .env("PATH", path_env)
        .cwd(repo);
    let output = exec.run(&cmd)?;
    ensure_exit_code(&cmd, &output, &ACCEPTED_EXIT_CODES).inspect_err(|e| {
        tracing::error!(error = %e, "eslint exited with unexpected status");
    })?;
    tracing::info!("Running eslint took {:.2?}", start.elapsed());

    let report = EslintReport::from_json(&output.stdout).inspect_err(|e| {
        tracing::error!(error = %e, "failed to decode eslint output");
    })?;
    Ok(report)
}

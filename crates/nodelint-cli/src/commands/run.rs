use std::path::PathBuf;

use miette::Result;

use nodelint_core::config::{dirs_path, GlobalConfig};
use nodelint_ops::ops_run;
use nodelint_util::errors::LintError;
use nodelint_util::process::SystemExec;

use crate::host::LocalHost;

pub fn exec(workdir: Option<PathBuf>, commit_sha: &str, cache_dir: Option<PathBuf>) -> Result<()> {
    let workdir = match workdir {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(LintError::Io)?,
    };
    let cache_dir = cache_dir.unwrap_or_else(|| dirs_path().join("cache"));
    let config = GlobalConfig::load()?;

    let host = LocalHost::new(workdir, commit_sha, cache_dir);
    let summary = ops_run::run(&host, &SystemExec, &config)?;

    nodelint_util::progress::status(
        "Finished",
        &format!(
            "{} issue(s) in {} project(s), {} skipped",
            summary.issues,
            summary.linted.len(),
            summary.skipped.len()
        ),
    );
    Ok(())
}

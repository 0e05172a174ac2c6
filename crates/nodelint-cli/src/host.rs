//! A [`HostContext`] backed by the local filesystem.

use std::path::{Path, PathBuf};

use nodelint_core::issue::Issue;
use nodelint_ops::host::HostContext;
use nodelint_toolchain::install::ToolCache;
use nodelint_util::errors::LintError;
use nodelint_util::{fs, hash};

/// Caches live under `cache_dir`; issues are written to stdout as JSON lines.
pub struct LocalHost {
    workdir: PathBuf,
    commit_sha: String,
    cache_dir: PathBuf,
}

impl LocalHost {
    pub fn new(workdir: PathBuf, commit_sha: &str, cache_dir: PathBuf) -> Self {
        Self {
            workdir,
            commit_sha: commit_sha.to_string(),
            cache_dir,
        }
    }

    fn tool_entry(&self, key: &str) -> PathBuf {
        self.cache_dir
            .join("tools")
            .join(hash::sha256_bytes(key.as_bytes()))
    }

    /// Artifact entries are addressed by the contents of their key files.
    fn artifact_entry(&self, keys: &[PathBuf]) -> miette::Result<PathBuf> {
        let mut fingerprint = String::new();
        for key in keys {
            let digest = hash::sha256_file(key).map_err(|e| LintError::Generic {
                message: format!("Cannot hash cache key {}: {e}", key.display()),
            })?;
            let name = key.strip_prefix(&self.workdir).unwrap_or(key);
            fingerprint.push_str(&format!("{}:{digest}\n", name.display()));
        }
        Ok(self
            .cache_dir
            .join("artifacts")
            .join(hash::sha256_bytes(fingerprint.as_bytes())))
    }
}

fn restore(entry: &Path, dest: &Path) -> miette::Result<bool> {
    if !entry.is_dir() {
        return Ok(false);
    }
    if dest.exists() {
        std::fs::remove_dir_all(dest).map_err(LintError::Io)?;
    }
    fs::copy_dir_all(entry, dest).map_err(LintError::Io)?;
    Ok(true)
}

fn save(src: &Path, entry: &Path) -> miette::Result<()> {
    if entry.exists() {
        std::fs::remove_dir_all(entry).map_err(LintError::Io)?;
    }
    fs::copy_dir_all(src, entry).map_err(LintError::Io)?;
    Ok(())
}

impl ToolCache for LocalHost {
    fn load_tool_cache(&self, key: &str, dest: &Path) -> miette::Result<bool> {
        restore(&self.tool_entry(key), dest)
    }

    fn store_tool_cache(&self, key: &str, src: &Path) -> miette::Result<()> {
        save(src, &self.tool_entry(key))
    }
}

impl HostContext for LocalHost {
    fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn commit_sha(&self) -> &str {
        &self.commit_sha
    }

    fn load_artifact_cache(&self, keys: &[PathBuf], dest: &Path) -> miette::Result<bool> {
        restore(&self.artifact_entry(keys)?, dest)
    }

    fn store_artifact_cache(&self, keys: &[PathBuf], src: &Path) -> miette::Result<()> {
        if !src.is_dir() {
            tracing::warn!("Nothing to cache at {}", src.display());
            return Ok(());
        }
        save(src, &self.artifact_entry(keys)?)
    }

    fn emit_issue(&self, issue: &Issue) -> miette::Result<()> {
        let line = serde_json::to_string(issue).map_err(|e| LintError::Generic {
            message: format!("Cannot encode issue: {e}"),
        })?;
        println!("{line}");
        Ok(())
    }
}

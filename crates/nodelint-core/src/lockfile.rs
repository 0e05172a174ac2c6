//! Package manager detection from lockfiles.

use std::fmt;
use std::path::{Path, PathBuf};

use nodelint_util::errors::LintError;

/// A JavaScript package manager the pipeline knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
}

/// Lockfile name to manager, in detection priority order.
pub const LOCKFILES: [(&str, PackageManager); 3] = [
    ("package-lock.json", PackageManager::Npm),
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("yarn.lock", PackageManager::Yarn),
];

impl PackageManager {
    /// The executable name, which is also the npm package name.
    pub fn command(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
        }
    }

    pub fn lockfile(self) -> &'static str {
        LOCKFILES
            .iter()
            .find(|(_, m)| *m == self)
            .map(|(name, _)| *name)
            .unwrap_or("package-lock.json")
    }

    /// Whether the manager ships with Node.js itself.
    pub fn is_bundled(self) -> bool {
        self == PackageManager::Npm
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// The lockfile found in a repository and the manager it implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lockfile {
    pub path: PathBuf,
    pub manager: PackageManager,
}

/// Find the lockfile directly inside `repo`.
pub fn detect(repo: &Path) -> Result<Lockfile, LintError> {
    for (name, manager) in LOCKFILES {
        let path = repo.join(name);
        if path.is_file() {
            return Ok(Lockfile { path, manager });
        }
    }

    let supported: Vec<&str> = LOCKFILES.iter().map(|(name, _)| *name).collect();
    Err(LintError::Manifest {
        message: format!(
            "lock file not found in {}. supported are: {}.",
            repo.display(),
            supported.join(", ")
        ),
    })
}

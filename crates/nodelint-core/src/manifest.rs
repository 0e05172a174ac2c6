//! The parts of `package.json` the lint pipeline reads.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use nodelint_util::errors::LintError;
use serde::Deserialize;

pub const PACKAGE_JSON: &str = "package.json";

/// Name of the linter package a repository must depend on.
pub const ESLINT_PACKAGE: &str = "eslint";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub engines: Engines,

    /// Older manifests spell the field in the singular.
    #[serde(default)]
    engine: Engines,

    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,

    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Engines {
    #[serde(default)]
    pub node: Option<String>,
}

impl PackageManifest {
    /// Read and parse the `package.json` inside `repo`.
    pub fn from_dir(repo: &Path) -> Result<Self, LintError> {
        Self::from_path(&repo.join(PACKAGE_JSON))
    }

    pub fn from_path(path: &Path) -> Result<Self, LintError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "failed to read package.json");
            LintError::Manifest {
                message: format!("package.json not found at {}", path.display()),
            }
        })?;
        Self::from_json(&content).inspect_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "failed to parse package.json");
        })
    }

    pub fn from_json(json: &str) -> Result<Self, LintError> {
        serde_json::from_str(json).map_err(|e| LintError::Manifest {
            message: format!("failed to parse package.json: {e}"),
        })
    }

    /// The declared Node.js version specifier, if any.
    pub fn node_version(&self) -> Option<&str> {
        self.engines
            .node
            .as_deref()
            .or(self.engine.node.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Like [`Self::node_version`] but a missing value is an error.
    pub fn require_node_version(&self) -> Result<&str, LintError> {
        self.node_version().ok_or_else(|| LintError::Manifest {
            message: "failed to determine node version using package.json".to_string(),
        })
    }

    pub fn depends_on(&self, package: &str) -> bool {
        self.dependencies.contains_key(package) || self.dev_dependencies.contains_key(package)
    }

    pub fn require_eslint(&self) -> Result<(), LintError> {
        if self.depends_on(ESLINT_PACKAGE) {
            Ok(())
        } else {
            Err(LintError::Manifest {
                message: "eslint not found as a project dependency".to_string(),
            })
        }
    }
}

/// Every directory under `root` holding a `package.json`, skipping
/// `node_modules` and hidden directories. Sorted.
pub fn find_repositories(root: &Path) -> Result<Vec<PathBuf>, LintError> {
    Ok(nodelint_util::fs::find_dirs_containing(
        root,
        PACKAGE_JSON,
        &["node_modules"],
    )?)
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::issue::IssueKind;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "NODELINT_CONFIG";

/// Global configuration loaded from `~/.nodelint/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub node: NodeConfig,

    #[serde(default)]
    pub eslint: EslintConfig,

    /// Extra `rule-id = "kind"` entries layered over the built-in table.
    #[serde(default)]
    pub rules: BTreeMap<String, IssueKind>,
}

/// Node.js provisioning settings from `[node]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    #[serde(default = "default_index_url", rename = "index-url")]
    pub index_url: String,
    #[serde(default, rename = "dist-url")]
    pub dist_url: Option<String>,
    #[serde(default = "default_platform")]
    pub platform: String,
    #[serde(default, rename = "install-dir")]
    pub install_dir: Option<PathBuf>,
    #[serde(default = "default_verify_checksum", rename = "verify-checksum")]
    pub verify_checksum: bool,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            index_url: default_index_url(),
            dist_url: None,
            platform: default_platform(),
            install_dir: None,
            verify_checksum: default_verify_checksum(),
        }
    }
}

impl NodeConfig {
    /// The directory Node.js is installed into.
    pub fn install_dir(&self) -> PathBuf {
        self.install_dir
            .clone()
            .unwrap_or_else(|| dirs_path().join("node"))
    }
}

fn default_index_url() -> String {
    "https://nodejs.org/dist/index.json".to_string()
}

fn default_platform() -> String {
    "linux-x64".to_string()
}

fn default_verify_checksum() -> bool {
    true
}

/// ESLint invocation settings from `[eslint]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EslintConfig {
    #[serde(default = "default_eslint_args")]
    pub args: Vec<String>,
}

impl Default for EslintConfig {
    fn default() -> Self {
        Self {
            args: default_eslint_args(),
        }
    }
}

fn default_eslint_args() -> Vec<String> {
    ["-f", "json-with-metadata", "."]
        .into_iter()
        .map(String::from)
        .collect()
}

impl GlobalConfig {
    /// Load the configuration from `$NODELINT_CONFIG` or
    /// `~/.nodelint/config.toml`, or return defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_path);
        Self::load_from(&path)
    }

    /// Load from an explicit path; a missing file yields defaults.
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            nodelint_util::errors::LintError::Generic {
                message: format!("Failed to read config {}: {e}", path.display()),
            }
        })?;
        toml::from_str(&content).map_err(|e| {
            nodelint_util::errors::LintError::Generic {
                message: format!("Failed to parse config {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Returns the default path to the config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the nodelint data directory (`~/.nodelint/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".nodelint")
}

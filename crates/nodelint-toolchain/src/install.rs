//! Node.js installation: resolve, download, verify, extract, and cache.

use std::ffi::OsString;
use std::fs::File;
use std::io::BufReader;
use std::path::{Component, Path, PathBuf};

use flate2::read::GzDecoder;
use nodelint_util::errors::LintError;

use crate::constraints::Constraints;
use crate::download;
use crate::index::{ReleaseIndex, NODE_INDEX_URL};
use crate::resolve::resolve;
use crate::version::NodeVersion;

/// Host-provided storage for installed tools, keyed by name.
pub trait ToolCache {
    /// Restore the entry for `key` into `dest`. `Ok(false)` on a miss.
    fn load_tool_cache(&self, key: &str, dest: &Path) -> miette::Result<bool>;

    /// Save the contents of `src` under `key`.
    fn store_tool_cache(&self, key: &str, src: &Path) -> miette::Result<()>;
}

/// Where and how to install Node.js.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOptions {
    pub index_url: String,
    pub dist_mirror: Option<String>,
    pub platform: String,
    pub install_dir: PathBuf,
    pub verify_checksum: bool,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            index_url: NODE_INDEX_URL.to_string(),
            dist_mirror: None,
            platform: "linux-x64".to_string(),
            install_dir: PathBuf::from("node"),
            verify_checksum: true,
        }
    }
}

/// An installed Node.js distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeInstall {
    pub root: PathBuf,
}

impl NodeInstall {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.root.join("bin")
    }

    /// A `PATH` value with this installation's `bin` directory first,
    /// followed by `inherited`.
    pub fn path_env(&self, inherited: Option<&str>) -> miette::Result<String> {
        let mut entries = vec![self.bin_dir()];
        if let Some(inherited) = inherited {
            entries.extend(std::env::split_paths(inherited));
        }
        let joined: OsString = std::env::join_paths(entries).map_err(|e| LintError::Toolchain {
            message: format!("Cannot build PATH: {e}"),
        })?;
        Ok(joined.to_string_lossy().into_owned())
    }
}

/// Cache key for an installation satisfying `spec` on `platform`.
pub fn tool_cache_key(spec: &str, platform: &str) -> String {
    format!("node-{spec}-{platform}")
}

/// Make a Node.js satisfying `spec` available under `options.install_dir`.
///
/// A tool-cache hit skips resolution and download entirely.
pub fn install_node(
    cache: &dyn ToolCache,
    spec: &str,
    options: &InstallOptions,
) -> miette::Result<NodeInstall> {
    let install = NodeInstall::new(&options.install_dir);
    let key = tool_cache_key(spec, &options.platform);

    if cache.load_tool_cache(&key, &install.root)? {
        tracing::info!(%key, "restored node from tool cache");
        nodelint_util::progress::status_info("Cached", &format!("node for \"{spec}\""));
        return Ok(install);
    }

    let constraints = Constraints::determine(spec)?;
    let index = ReleaseIndex::fetch(&options.index_url)?.for_platform(&options.platform);
    let resolution = resolve(spec, &constraints, index.releases())?;

    nodelint_util::progress::status(
        "Installing",
        &format!("node {} (from \"{spec}\")", resolution.version.tag()),
    );
    install_version(&resolution.version, options)?;

    cache.store_tool_cache(&key, &install.root)?;
    Ok(install)
}

/// Download, verify, and extract one concrete Node.js release.
pub fn install_version(version: &NodeVersion, options: &InstallOptions) -> miette::Result<()> {
    let mirror = options.dist_mirror.as_deref();
    let tmp_dir = tempfile::tempdir().map_err(LintError::Io)?;
    let archive = tmp_dir
        .path()
        .join(download::tarball_name(version, &options.platform));

    let url = download::tarball_url(version, &options.platform, mirror);
    download::download_file(&url, &archive)?;

    if options.verify_checksum {
        match download::fetch_checksum(version, &options.platform, mirror) {
            Ok(Some(expected)) => download::verify_checksum(&archive, &expected)?,
            Ok(None) => {
                tracing::warn!("Checksum not listed for node {version}, skipping verification");
                nodelint_util::progress::status_warn("Unverified", &format!("node {version}"));
            }
            Err(e) => {
                tracing::warn!("Checksum not available for node {version}, skipping verification: {e}");
                nodelint_util::progress::status_warn("Unverified", &format!("node {version}: {e}"));
            }
        }
    }

    nodelint_util::fs::ensure_dir(&options.install_dir).map_err(LintError::Io)?;
    extract_tarball(&archive, &options.install_dir)
}

/// Extract a `.tar.gz` into `dest`, stripping the top-level directory.
pub fn extract_tarball(archive: &Path, dest: &Path) -> miette::Result<()> {
    let file = File::open(archive).map_err(LintError::Io)?;
    let mut reader = tar::Archive::new(GzDecoder::new(BufReader::new(file)));

    let entries = reader.entries().map_err(|e| LintError::Toolchain {
        message: format!("Failed to open archive {}: {e}", archive.display()),
    })?;

    for entry in entries {
        let mut entry = entry.map_err(|e| LintError::Toolchain {
            message: format!("Archive entry error: {e}"),
        })?;
        let path = entry
            .path()
            .map_err(|e| LintError::Toolchain {
                message: format!("Archive entry has an invalid path: {e}"),
            })?
            .into_owned();

        let Some(rel) = strip_top_dir(&path) else {
            continue;
        };
        let out_path = dest.join(rel);

        if entry.header().entry_type().is_dir() {
            std::fs::create_dir_all(&out_path).map_err(LintError::Io)?;
        } else {
            if let Some(parent) = out_path.parent() {
                std::fs::create_dir_all(parent).map_err(LintError::Io)?;
            }
            entry.unpack(&out_path).map_err(|e| LintError::Toolchain {
                message: format!("Failed to unpack {}: {e}", out_path.display()),
            })?;
        }
    }
    Ok(())
}

/// Drop the first component of an archive path. Entries that are the top
/// directory itself, or that try to escape it, yield `None`.
fn strip_top_dir(path: &Path) -> Option<PathBuf> {
    let mut components = path.components();
    components.next()?;
    let mut rel = PathBuf::new();
    for component in components {
        match component {
            Component::Normal(part) => rel.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    (!rel.as_os_str().is_empty()).then_some(rel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_top_dir_drops_wrapper() {
        assert_eq!(
            strip_top_dir(Path::new("node-v20.11.1-linux-x64/bin/node")),
            Some(PathBuf::from("bin/node"))
        );
        assert_eq!(strip_top_dir(Path::new("node-v20.11.1-linux-x64/")), None);
        assert_eq!(strip_top_dir(Path::new("top/../../etc/passwd")), None);
    }
}

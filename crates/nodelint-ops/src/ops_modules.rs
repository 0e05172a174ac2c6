//! Operation: restore a repository's `node_modules`.

use std::path::{Path, PathBuf};

use nodelint_core::lockfile::Lockfile;
use nodelint_core::manifest::PACKAGE_JSON;
use nodelint_toolchain::install::NodeInstall;
use nodelint_util::process::{ensure_exit_code, CommandBuilder, Exec};

use crate::host::HostContext;
use crate::ops_pkg::node_bin;

pub const NODE_MODULES: &str = "node_modules";

/// Files whose contents identify a `node_modules` artifact.
pub fn artifact_keys(repo: &Path, lockfile: &Lockfile) -> Vec<PathBuf> {
    vec![repo.join(PACKAGE_JSON), lockfile.path.clone()]
}

/// Restore `node_modules` from the artifact cache, bring it up to date with
/// `<manager> install`, and store the result.
pub fn restore_node_modules<H: HostContext>(
    host: &H,
    exec: &dyn Exec,
    repo: &Path,
    lockfile: &Lockfile,
    node: &NodeInstall,
    path_env: &str,
) -> miette::Result<()> {
    let keys = artifact_keys(repo, lockfile);
    let modules = repo.join(NODE_MODULES);

    if host.load_artifact_cache(&keys, &modules)? {
        tracing::info!(repo = %repo.display(), "restored node_modules from cache");
        nodelint_util::progress::status_info("Cached", &format!("node modules in {}", repo.display()));
    }

    nodelint_util::progress::status("Restoring", &format!("node modules in {}", repo.display()));
    let cmd = CommandBuilder::new(node_bin(node, lockfile.manager.command()))
        .arg("install")
        .env("PATH", path_env)
        .cwd(repo);
    let output = exec.run(&cmd)?;
    ensure_exit_code(&cmd, &output, &[0]).inspect_err(|e| {
        tracing::error!(
            stdout = %String::from_utf8_lossy(&output.stdout),
            error = %e,
            "error restoring node modules"
        );
    })?;

    host.store_artifact_cache(&keys, &modules)
}

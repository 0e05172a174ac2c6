//! Operation: make the repository's package manager available.

use nodelint_core::lockfile::PackageManager;
use nodelint_toolchain::install::NodeInstall;
use nodelint_util::process::{ensure_exit_code, CommandBuilder, Exec};

/// Path of an executable inside the Node.js installation.
pub fn node_bin(node: &NodeInstall, name: &str) -> String {
    node.bin_dir().join(name).to_string_lossy().into_owned()
}

/// Install `manager` globally into `node` with npm unless it ships with
/// Node.js or is already there.
pub fn install_package_manager(
    exec: &dyn Exec,
    manager: PackageManager,
    node: &NodeInstall,
    path_env: &str,
) -> miette::Result<()> {
    tracing::info!("Using {manager} as package manager");
    if manager.is_bundled() {
        return Ok(());
    }
    if node.bin_dir().join(manager.command()).exists() {
        tracing::debug!("{manager} already installed in {}", node.root.display());
        return Ok(());
    }

    nodelint_util::progress::status("Installing", manager.command());
    let cmd = CommandBuilder::new(node_bin(node, "npm"))
        .args(["install", "-g", manager.command()])
        .env("PATH", path_env);
    let output = exec.run(&cmd)?;
    ensure_exit_code(&cmd, &output, &[0]).inspect_err(|e| {
        tracing::error!(error = %e, "failed to install {manager}");
    })?;
    Ok(())
}

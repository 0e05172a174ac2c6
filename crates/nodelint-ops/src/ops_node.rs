//! Operation: provision the Node.js a repository asks for.

use std::path::PathBuf;

use nodelint_core::config::GlobalConfig;
use nodelint_toolchain::install::{self, InstallOptions, NodeInstall};

use crate::host::HostContext;

/// Directory a given specifier is installed into, below the configured root.
pub fn install_dir_for(config: &GlobalConfig, spec: &str) -> PathBuf {
    let key = install::tool_cache_key(spec, &config.node.platform);
    let name: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    config.node.install_dir().join(name)
}

/// Installer settings for `spec` derived from the `[node]` config section.
pub fn install_options(config: &GlobalConfig, spec: &str) -> InstallOptions {
    InstallOptions {
        index_url: config.node.index_url.clone(),
        dist_mirror: config.node.dist_url.clone(),
        platform: config.node.platform.clone(),
        install_dir: install_dir_for(config, spec),
        verify_checksum: config.node.verify_checksum,
    }
}

/// Install (or restore from the tool cache) a Node.js satisfying `spec`.
pub fn setup_node<H: HostContext>(
    host: &H,
    spec: &str,
    config: &GlobalConfig,
) -> miette::Result<NodeInstall> {
    let options = install_options(config, spec);
    tracing::info!(%spec, dir = %options.install_dir.display(), "provisioning node");
    install::install_node(host, spec, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_dir_is_sanitized() {
        let config = GlobalConfig::default();
        let dir = install_dir_for(&config, "^8.x || >=10");
        let name = dir.file_name().unwrap().to_string_lossy().into_owned();
        assert_eq!(name, "node-_8.x______10-linux-x64");
    }

    #[test]
    fn test_install_options_follow_config() {
        let mut config = GlobalConfig::default();
        config.node.dist_url = Some("https://mirror.example/dist".into());
        config.node.verify_checksum = false;
        let options = install_options(&config, "18");
        assert_eq!(options.platform, "linux-x64");
        assert_eq!(options.dist_mirror.as_deref(), Some("https://mirror.example/dist"));
        assert!(!options.verify_checksum);
        assert!(options.install_dir.ends_with("node-18-linux-x64"));
    }
}

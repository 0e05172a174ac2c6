//! Operation: lint every Node.js project under the workdir.

use std::path::{Path, PathBuf};

use nodelint_core::config::GlobalConfig;
use nodelint_core::lockfile;
use nodelint_core::manifest::{find_repositories, PackageManifest, ESLINT_PACKAGE};
use nodelint_core::rules::RuleTable;
use nodelint_util::errors::LintError;
use nodelint_util::process::Exec;

use crate::host::HostContext;
use crate::{ops_emit, ops_eslint, ops_modules, ops_node, ops_pkg};

/// What a run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub linted: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub issues: usize,
}

/// Lint every project under the host's workdir that depends on ESLint.
pub fn run<H: HostContext>(
    host: &H,
    exec: &dyn Exec,
    config: &GlobalConfig,
) -> miette::Result<RunSummary> {
    let rules = RuleTable::with_overrides(&config.rules);
    let repos = find_repositories(host.workdir())?;
    if repos.is_empty() {
        return Err(LintError::Manifest {
            message: format!("package.json not found in {}", host.workdir().display()),
        }
        .into());
    }

    let mut summary = RunSummary::default();
    for repo in repos {
        let manifest = PackageManifest::from_dir(&repo)?;
        if !manifest.depends_on(ESLINT_PACKAGE) {
            tracing::info!(repo = %repo.display(), "no eslint dependency, skipping");
            nodelint_util::progress::status_warn(
                "Skipping",
                &format!("{} (no eslint dependency)", repo.display()),
            );
            summary.skipped.push(repo);
            continue;
        }
        summary.issues += lint_repository(host, exec, config, &rules, &repo, &manifest)?;
        summary.linted.push(repo);
    }

    if summary.linted.is_empty() {
        return Err(LintError::Manifest {
            message: "eslint not found as a project dependency".to_string(),
        }
        .into());
    }
    Ok(summary)
}

/// Provision, install, lint, and emit for a single project.
pub fn lint_repository<H: HostContext>(
    host: &H,
    exec: &dyn Exec,
    config: &GlobalConfig,
    rules: &RuleTable,
    repo: &Path,
    manifest: &PackageManifest,
) -> miette::Result<usize> {
    let spec = manifest.require_node_version()?;
    let node = ops_node::setup_node(host, spec, config)?;
    let inherited = std::env::var("PATH").ok();
    let path_env = node.path_env(inherited.as_deref())?;

    let lock = lockfile::detect(repo)?;
    ops_pkg::install_package_manager(exec, lock.manager, &node, &path_env)?;
    ops_modules::restore_node_modules(host, exec, repo, &lock, &node, &path_env)?;

    let report = ops_eslint::run_eslint(exec, repo, &path_env, &config.eslint.args)?;
    tracing::info!(
        repo = %repo.display(),
        messages = report.message_count(),
        "eslint finished"
    );
    ops_emit::emit_report(host, rules, repo, &report)
}

//! The environment a lint run executes in.

use std::path::{Path, PathBuf};

use nodelint_core::issue::Issue;
use nodelint_toolchain::install::ToolCache;

/// Services the surrounding CI system provides to a run.
///
/// Tool cache entries hold installed Node.js distributions; artifact cache
/// entries hold directories such as `node_modules`, keyed by the contents of
/// the files listed in `keys`.
pub trait HostContext: ToolCache {
    /// Root of the checked-out sources.
    fn workdir(&self) -> &Path;

    /// The commit being analyzed.
    fn commit_sha(&self) -> &str;

    /// Restore the artifact stored for `keys` into `dest`. `Ok(false)` on a miss.
    fn load_artifact_cache(&self, keys: &[PathBuf], dest: &Path) -> miette::Result<bool>;

    /// Save `src` as the artifact for `keys`.
    fn store_artifact_cache(&self, keys: &[PathBuf], src: &Path) -> miette::Result<()>;

    /// Report one finding.
    fn emit_issue(&self, issue: &Issue) -> miette::Result<()>;
}

//! Operations behind `nodelint constraints` and `nodelint resolve`.

use std::path::PathBuf;

use nodelint_toolchain::constraints::Constraints;
use nodelint_toolchain::index::ReleaseIndex;
use nodelint_toolchain::resolve::resolve;
use nodelint_toolchain::version::NodeVersion;

/// Where to read the release index from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexSource {
    File(PathBuf),
    Url(String),
}

impl IndexSource {
    pub fn load(&self) -> miette::Result<ReleaseIndex> {
        match self {
            IndexSource::File(path) => ReleaseIndex::from_path(path),
            IndexSource::Url(url) => ReleaseIndex::fetch(url),
        }
    }
}

/// The constraint groups `spec` compiles to, one string per group.
pub fn describe_constraints(spec: &str) -> miette::Result<Vec<String>> {
    let constraints = Constraints::determine(spec)?;
    Ok(constraints.groups().iter().map(|g| g.to_string()).collect())
}

/// Resolve `spec` against the release index for `platform`.
pub fn resolve_spec(
    spec: &str,
    source: &IndexSource,
    platform: Option<&str>,
) -> miette::Result<NodeVersion> {
    let constraints = Constraints::determine(spec)?;
    let mut index = source.load()?;
    if let Some(platform) = platform {
        index = index.for_platform(platform);
    }
    tracing::debug!(%spec, candidates = index.len(), "resolving");
    let resolution = resolve(spec, &constraints, index.releases())?;
    Ok(resolution.version)
}

//! Release selection.

use std::str::FromStr;

use crate::constraints::Constraints;
use crate::error::ResolveError;
use crate::index::ReleaseCandidate;
use crate::version::NodeVersion;

/// A selected release and its parsed version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub candidate: &'a ReleaseCandidate,
    pub version: NodeVersion,
}

/// Pick the first candidate, in the order given, that satisfies any group
/// of `constraints`.
///
/// Callers sort `candidates` by their own priority beforehand. The list is
/// read once, start to end: every entry is validated, so a version that does
/// not parse fails the whole resolution even when another entry, earlier or
/// later, matched.
pub fn resolve<'a>(
    specifier: &str,
    constraints: &Constraints,
    candidates: &'a [ReleaseCandidate],
) -> Result<Resolution<'a>, ResolveError> {
    let mut selected: Option<Resolution<'a>> = None;

    for candidate in candidates {
        let version = NodeVersion::from_str(&candidate.version).map_err(|e| {
            tracing::error!(
                version = %candidate.version,
                error = %e,
                "failed to parse version from release index"
            );
            ResolveError::MalformedCandidate {
                version: candidate.version.clone(),
                reason: e.to_string(),
            }
        })?;

        if selected.is_none() && constraints.matches(version.as_semver()) {
            tracing::debug!(%specifier, %version, "resolved release");
            selected = Some(Resolution { candidate, version });
        }
    }

    selected.ok_or_else(|| ResolveError::NoCompatibleVersion {
        specifier: specifier.to_string(),
    })
}

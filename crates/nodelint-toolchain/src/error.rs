//! Typed failures of constraint parsing and release resolution.

use miette::Diagnostic;
use thiserror::Error;

/// Every way a single resolution request can fail. All variants are
/// terminal for the request; nothing is retried here.
#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
pub enum ResolveError {
    /// A clause of the specifier could not be compiled into a range.
    #[error("error parsing constraint \"{clause}\": {reason}")]
    #[diagnostic(help("Check the engines.node field of package.json"))]
    MalformedClause { clause: String, reason: String },

    /// The release index contained an entry that is not a version.
    #[error("release index entry \"{version}\" is not a valid version: {reason}")]
    #[diagnostic(help("The release index may be corrupt; try again or use another mirror"))]
    MalformedCandidate { version: String, reason: String },

    /// Every candidate was checked and none satisfied the constraints.
    #[error("no compatible versions found for {specifier}")]
    NoCompatibleVersion { specifier: String },
}

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all nodelint operations.
#[derive(Debug, Error, Diagnostic)]
pub enum LintError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or malformed `package.json`.
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check the package.json of the repository being linted"))]
    Manifest { message: String },

    /// Node.js or package manager provisioning failed.
    #[error("Toolchain error: {message}")]
    Toolchain { message: String },

    /// Network request or download failed.
    #[error("Network error: {message}")]
    Network { message: String },

    /// An external program exited unexpectedly.
    #[error("Process `{program}` failed: {message}")]
    Process { program: String, message: String },

    /// The linter ran but its output could not be used.
    #[error("Lint error: {message}")]
    Lint { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type LintResult<T> = miette::Result<T>;

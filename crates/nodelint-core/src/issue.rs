//! Issues reported to the host.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category of a finding, as understood by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Style,
    Performance,
    Security,
    Bug,
    Complexity,
    Duplication,
    Convention,
    Quality,
}

impl IssueKind {
    pub const ALL: [IssueKind; 8] = [
        IssueKind::Style,
        IssueKind::Performance,
        IssueKind::Security,
        IssueKind::Bug,
        IssueKind::Complexity,
        IssueKind::Duplication,
        IssueKind::Convention,
        IssueKind::Quality,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IssueKind::Style => "style",
            IssueKind::Performance => "performance",
            IssueKind::Security => "security",
            IssueKind::Bug => "bug",
            IssueKind::Complexity => "complexity",
            IssueKind::Duplication => "duplication",
            IssueKind::Convention => "convention",
            IssueKind::Quality => "quality",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IssueKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown issue kind '{s}'"))
    }
}

/// A single finding ready to be handed to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub file: String,
    pub line_start: u32,
    pub line_end: u32,
    pub message: String,
    pub uid: String,
}

impl Issue {
    /// Stable identifier for a finding on a given commit.
    pub fn uid_for(kind: IssueKind, line: u32, file: &str, commit_sha: &str) -> String {
        nodelint_util::hash::sha1_bytes(format!("{kind}-{line}-{file}-{commit_sha}").as_bytes())
    }
}

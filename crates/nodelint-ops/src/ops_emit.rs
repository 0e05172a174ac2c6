//! Operation: turn an ESLint report into host issues.

use std::path::Path;

use nodelint_core::issue::Issue;
use nodelint_core::rules::RuleTable;

use crate::host::HostContext;
use crate::ops_eslint::EslintReport;

/// `file` as reported by ESLint, relative to `workdir`.
///
/// Relative paths are taken to be relative to `repo`. Paths outside the
/// workdir are returned unchanged.
pub fn relative_path(workdir: &Path, repo: &Path, file: &str) -> String {
    let path = Path::new(file);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        repo.join(path)
    };
    match absolute.strip_prefix(workdir) {
        Ok(rel) => rel.to_string_lossy().into_owned(),
        Err(_) => file.to_string(),
    }
}

/// Classify every message in `report`; messages without a known rule are
/// dropped.
pub fn issues_for(
    rules: &RuleTable,
    workdir: &Path,
    repo: &Path,
    commit_sha: &str,
    report: &EslintReport,
) -> Vec<Issue> {
    let mut issues = Vec::new();
    for result in &report.results {
        let file = relative_path(workdir, repo, &result.file_path);
        for msg in &result.messages {
            let Some(kind) = msg.rule_id.as_deref().and_then(|id| rules.kind_of(id)) else {
                tracing::debug!(rule = ?msg.rule_id, %file, "skipping unclassified message");
                continue;
            };
            issues.push(Issue {
                kind,
                file: file.clone(),
                line_start: msg.line,
                line_end: msg.end_line.unwrap_or(msg.line),
                message: msg.message.clone(),
                uid: Issue::uid_for(kind, msg.line, &file, commit_sha),
            });
        }
    }
    issues
}

/// Emit the issues in `report` to the host. Returns how many were emitted.
pub fn emit_report<H: HostContext>(
    host: &H,
    rules: &RuleTable,
    repo: &Path,
    report: &EslintReport,
) -> miette::Result<usize> {
    let issues = issues_for(rules, host.workdir(), repo, host.commit_sha(), report);
    for issue in &issues {
        host.emit_issue(issue).inspect_err(|e| {
            tracing::error!(error = %e, "error emitting issue");
        })?;
    }
    Ok(issues.len())
}

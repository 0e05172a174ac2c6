use std::collections::BTreeMap;
use std::str::FromStr;

use nodelint_core::issue::{Issue, IssueKind};
use nodelint_core::rules::RuleTable;

#[test]
fn test_builtin_classifies_core_rules() {
    let table = RuleTable::builtin();
    assert_eq!(table.kind_of("no-undef"), Some(IssueKind::Bug));
    assert_eq!(table.kind_of("complexity"), Some(IssueKind::Complexity));
    assert_eq!(table.kind_of("no-eval"), Some(IssueKind::Security));
    assert_eq!(table.kind_of("semi"), Some(IssueKind::Style));
    assert_eq!(table.kind_of("react/jsx-key"), None);
    assert!(!table.is_empty());
}

#[test]
fn test_overrides_add_and_replace() {
    let mut overrides = BTreeMap::new();
    overrides.insert("react/jsx-key".to_string(), IssueKind::Bug);
    overrides.insert("no-console".to_string(), IssueKind::Quality);

    let builtin = RuleTable::builtin();
    let table = RuleTable::with_overrides(&overrides);
    assert_eq!(table.kind_of("react/jsx-key"), Some(IssueKind::Bug));
    assert_eq!(table.kind_of("no-console"), Some(IssueKind::Quality));
    assert_eq!(table.len(), builtin.len() + 1);
    assert_eq!(builtin.kind_of("no-console"), Some(IssueKind::Convention));
}

#[test]
fn test_iter_is_sorted_by_rule_id() {
    let table = RuleTable::builtin();
    let ids: Vec<&str> = table.iter().map(|(id, _)| id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[test]
fn test_issue_kind_parse_and_display() {
    for kind in IssueKind::ALL {
        assert_eq!(IssueKind::from_str(kind.as_str()).unwrap(), kind);
        assert_eq!(kind.to_string(), kind.as_str());
    }
    assert_eq!(IssueKind::from_str("BUG").unwrap(), IssueKind::Bug);
    assert!(IssueKind::from_str("cosmetic").is_err());
}

#[test]
fn test_issue_uid_is_stable_and_commit_scoped() {
    let a = Issue::uid_for(IssueKind::Bug, 3, "src/index.js", "abc123");
    let b = Issue::uid_for(IssueKind::Bug, 3, "src/index.js", "abc123");
    let c = Issue::uid_for(IssueKind::Bug, 3, "src/index.js", "def456");
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.len(), 40);
    assert_eq!(
        a,
        nodelint_util::hash::sha1_bytes(b"bug-3-src/index.js-abc123")
    );
}

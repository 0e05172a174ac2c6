//! Classification of ESLint rules into issue kinds.
//!
//! The table is built once at startup and handed to whatever needs it; it
//! is never mutated afterwards.

use std::collections::BTreeMap;

use crate::issue::IssueKind;

/// Built-in classification of core ESLint rules.
const BUILTIN: &[(&str, IssueKind)] = &[
    // Possible problems
    ("array-callback-return", IssueKind::Bug),
    ("constructor-super", IssueKind::Bug),
    ("for-direction", IssueKind::Bug),
    ("getter-return", IssueKind::Bug),
    ("no-async-promise-executor", IssueKind::Bug),
    ("no-await-in-loop", IssueKind::Performance),
    ("no-class-assign", IssueKind::Bug),
    ("no-compare-neg-zero", IssueKind::Bug),
    ("no-cond-assign", IssueKind::Bug),
    ("no-const-assign", IssueKind::Bug),
    ("no-constant-condition", IssueKind::Bug),
    ("no-control-regex", IssueKind::Bug),
    ("no-debugger", IssueKind::Quality),
    ("no-dupe-args", IssueKind::Bug),
    ("no-dupe-class-members", IssueKind::Bug),
    ("no-dupe-else-if", IssueKind::Bug),
    ("no-dupe-keys", IssueKind::Bug),
    ("no-duplicate-case", IssueKind::Bug),
    ("no-duplicate-imports", IssueKind::Duplication),
    ("no-empty-character-class", IssueKind::Bug),
    ("no-empty-pattern", IssueKind::Bug),
    ("no-ex-assign", IssueKind::Bug),
    ("no-fallthrough", IssueKind::Bug),
    ("no-func-assign", IssueKind::Bug),
    ("no-import-assign", IssueKind::Bug),
    ("no-inner-declarations", IssueKind::Bug),
    ("no-invalid-regexp", IssueKind::Bug),
    ("no-irregular-whitespace", IssueKind::Style),
    ("no-loss-of-precision", IssueKind::Bug),
    ("no-misleading-character-class", IssueKind::Bug),
    ("no-new-native-nonconstructor", IssueKind::Bug),
    ("no-obj-calls", IssueKind::Bug),
    ("no-prototype-builtins", IssueKind::Bug),
    ("no-self-assign", IssueKind::Bug),
    ("no-self-compare", IssueKind::Bug),
    ("no-setter-return", IssueKind::Bug),
    ("no-sparse-arrays", IssueKind::Bug),
    ("no-template-curly-in-string", IssueKind::Bug),
    ("no-this-before-super", IssueKind::Bug),
    ("no-undef", IssueKind::Bug),
    ("no-unexpected-multiline", IssueKind::Bug),
    ("no-unmodified-loop-condition", IssueKind::Bug),
    ("no-unreachable", IssueKind::Quality),
    ("no-unreachable-loop", IssueKind::Bug),
    ("no-unsafe-finally", IssueKind::Bug),
    ("no-unsafe-negation", IssueKind::Bug),
    ("no-unsafe-optional-chaining", IssueKind::Bug),
    ("no-unused-private-class-members", IssueKind::Quality),
    ("no-unused-vars", IssueKind::Quality),
    ("no-use-before-define", IssueKind::Bug),
    ("no-useless-backreference", IssueKind::Bug),
    ("require-atomic-updates", IssueKind::Bug),
    ("use-isnan", IssueKind::Bug),
    ("valid-typeof", IssueKind::Bug),
    // Suggestions
    ("complexity", IssueKind::Complexity),
    ("max-depth", IssueKind::Complexity),
    ("max-lines", IssueKind::Complexity),
    ("max-lines-per-function", IssueKind::Complexity),
    ("max-nested-callbacks", IssueKind::Complexity),
    ("max-params", IssueKind::Complexity),
    ("max-statements", IssueKind::Complexity),
    ("camelcase", IssueKind::Convention),
    ("curly", IssueKind::Convention),
    ("eqeqeq", IssueKind::Bug),
    ("no-eval", IssueKind::Security),
    ("no-implied-eval", IssueKind::Security),
    ("no-new-func", IssueKind::Security),
    ("no-script-url", IssueKind::Security),
    ("no-empty", IssueKind::Quality),
    ("no-empty-function", IssueKind::Quality),
    ("no-extra-boolean-cast", IssueKind::Quality),
    ("no-unused-expressions", IssueKind::Quality),
    ("no-useless-catch", IssueKind::Quality),
    ("no-useless-escape", IssueKind::Style),
    ("no-var", IssueKind::Convention),
    ("prefer-const", IssueKind::Convention),
    ("no-console", IssueKind::Convention),
    ("no-loop-func", IssueKind::Bug),
    ("no-shadow", IssueKind::Quality),
    ("no-with", IssueKind::Bug),
    ("no-global-assign", IssueKind::Bug),
    ("no-redeclare", IssueKind::Bug),
    ("no-delete-var", IssueKind::Bug),
    ("no-octal", IssueKind::Bug),
    ("no-case-declarations", IssueKind::Bug),
    ("no-regex-spaces", IssueKind::Style),
    ("no-shadow-restricted-names", IssueKind::Bug),
    ("no-nonoctal-decimal-escape", IssueKind::Bug),
    ("no-unused-labels", IssueKind::Quality),
    ("require-yield", IssueKind::Bug),
    // Layout
    ("indent", IssueKind::Style),
    ("quotes", IssueKind::Style),
    ("semi", IssueKind::Style),
    ("comma-dangle", IssueKind::Style),
    ("no-mixed-spaces-and-tabs", IssueKind::Style),
    ("no-trailing-spaces", IssueKind::Style),
    ("eol-last", IssueKind::Style),
    ("max-len", IssueKind::Style),
];

/// Immutable mapping from ESLint rule id to issue kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: BTreeMap<String, IssueKind>,
}

impl RuleTable {
    /// The built-in table for core ESLint rules.
    pub fn builtin() -> Self {
        Self {
            rules: BUILTIN
                .iter()
                .map(|(id, kind)| (id.to_string(), *kind))
                .collect(),
        }
    }

    /// The built-in table with `overrides` layered on top.
    pub fn with_overrides<'a>(
        overrides: impl IntoIterator<Item = (&'a String, &'a IssueKind)>,
    ) -> Self {
        let mut table = Self::builtin();
        for (id, kind) in overrides {
            table.rules.insert(id.clone(), *kind);
        }
        table
    }

    pub fn kind_of(&self, rule_id: &str) -> Option<IssueKind> {
        self.rules.get(rule_id).copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, IssueKind)> {
        self.rules.iter().map(|(id, kind)| (id.as_str(), *kind))
    }
}

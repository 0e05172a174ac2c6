//! Clause splitter for free-form runtime version specifiers.
//!
//! Manifests put things like `>=0.10.3 <0.12`, `>=v12.x` or
//! `^8.x || ^10.x` into `engines.node`. When a specifier is not a range on
//! its own, [`ConstraintParser`] cuts it into clauses in a single
//! left-to-right pass and compiles each clause into an independent
//! [`VersionRange`]. The resulting groups are alternatives: a version that
//! satisfies any one of them is acceptable.

use crate::constraints::Constraints;
use crate::error::ResolveError;
use crate::range::{VersionRange, OPERATOR_CHARS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    /// Splitting on whitespace, commas, operators and version prefixes.
    Scanning,
    /// Inside an `a || b` group; everything up to the next comma is kept.
    OrGroup,
}

#[derive(Debug)]
pub struct ConstraintParser {
    state: LexState,
    buffer: String,
    clauses: Vec<String>,
    /// The previous clause was ended by whitespace, so a following `||`
    /// still belongs to it.
    reopenable: bool,
}

impl Default for ConstraintParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintParser {
    pub fn new() -> Self {
        Self {
            state: LexState::Scanning,
            buffer: String::new(),
            clauses: Vec::new(),
            reopenable: false,
        }
    }

    /// Parse `specifier` into constraint groups.
    ///
    /// Every clause has each `x` replaced by `*` before it is compiled. The
    /// replacement is not positional: an `x` anywhere in the clause is
    /// rewritten. The first clause that fails to compile aborts the parse.
    pub fn parse(specifier: &str) -> Result<Constraints, ResolveError> {
        let clauses = Self::new().split(specifier);
        if clauses.is_empty() {
            return Err(ResolveError::MalformedClause {
                clause: specifier.to_string(),
                reason: "no version constraints found".to_string(),
            });
        }

        let mut groups = Vec::with_capacity(clauses.len());
        for clause in clauses {
            let normalized = normalize_wildcards(&clause);
            let range =
                VersionRange::parse(&normalized).map_err(|e| ResolveError::MalformedClause {
                    clause: normalized.clone(),
                    reason: e.to_string(),
                })?;
            tracing::debug!(clause = %normalized, "parsed constraint group");
            groups.push(range);
        }

        Ok(Constraints::new(groups))
    }

    /// Run the lexer over `specifier` and return the raw clauses.
    pub fn split(mut self, specifier: &str) -> Vec<String> {
        for ch in specifier.chars() {
            self.feed(ch);
        }
        self.flush(false);
        self.clauses
    }

    /// Two additions to plain clause splitting: whitespace after a buffer of
    /// only operator characters is absorbed so `>= 1.2` stays one clause, and
    /// a `|` right after a whitespace-ended clause reopens it so `^8 || ^10`
    /// stays one OR group.
    fn feed(&mut self, ch: char) {
        if self.state == LexState::OrGroup {
            if ch == ',' {
                self.flush(false);
                self.state = LexState::Scanning;
            } else {
                self.buffer.push(ch);
            }
            return;
        }

        match ch {
            ',' => self.flush(false),
            c if c.is_whitespace() => {
                // Loose spacing and a detached operator (`>= 1.2`) do not end
                // a clause.
                if self.buffer.chars().count() <= 1 || self.holds_only_operators() {
                    return;
                }
                self.flush(true);
            }
            '|' => {
                if self.buffer.is_empty() && self.reopenable {
                    if let Some(previous) = self.clauses.pop() {
                        self.buffer = previous;
                        self.buffer.push(' ');
                    }
                }
                self.buffer.push('|');
                self.state = LexState::OrGroup;
            }
            'v' => {
                if !self.holds_only_operators() {
                    self.flush(false);
                }
                self.buffer.push('v');
            }
            c if OPERATOR_CHARS.contains(&c) => {
                if self.buffer.chars().count() > 1 {
                    self.flush(false);
                }
                self.buffer.push(c);
            }
            c => self.buffer.push(c),
        }
    }

    fn holds_only_operators(&self) -> bool {
        self.buffer.chars().all(|c| OPERATOR_CHARS.contains(&c))
    }

    fn flush(&mut self, by_whitespace: bool) {
        self.reopenable = by_whitespace;
        let clause = self.buffer.trim();
        if !clause.is_empty() {
            self.clauses.push(clause.to_string());
        }
        self.buffer.clear();
    }
}

/// Replace every `x` with the `*` wildcard.
pub fn normalize_wildcards(clause: &str) -> String {
    clause.replace('x', "*")
}

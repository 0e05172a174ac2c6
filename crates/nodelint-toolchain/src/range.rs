//! Checkable version ranges.
//!
//! A range is one or more `||` alternatives. Each alternative is a
//! conjunction of comparators separated by commas, so `>=12.x, <=13.4.x` and
//! `^8 || ^10` are both a single range. Whitespace only separates an operator
//! from its version (`>= 1.2`) or the bounds of a hyphen range (`1.2 - 1.4`);
//! `>=12.x <=13.4.x` is rejected. Comparators are compiled into
//! [`semver::Comparator`]s and evaluated through [`semver::VersionReq`],
//! which also supplies the pre-release rules.

use std::fmt;
use std::str::FromStr;

use semver::{Comparator, Op, Prerelease, Version, VersionReq};
use thiserror::Error;

/// Characters that may make up a comparison operator.
pub const OPERATOR_CHARS: [char; 6] = ['=', '!', '>', '<', '^', '~'];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("empty range")]
    Empty,

    #[error("empty alternative in '{0}'")]
    EmptyAlternative(String),

    #[error("unknown operator '{0}'")]
    Operator(String),

    #[error("missing version after operator '{0}'")]
    MissingVersion(String),

    #[error("invalid version '{0}'")]
    Version(String),

    #[error("a full wildcard cannot be used with operator '{0}'")]
    WildcardOperator(String),

    #[error("empty comparator in '{0}'")]
    EmptyComparator(String),

    #[error("comparators in '{0}' must be separated by ','")]
    Juxtaposed(String),

    #[error("incomplete hyphen range in '{0}'")]
    Hyphen(String),

    #[error("invalid pre-release in '{input}': {reason}")]
    Prerelease { input: String, reason: String },
}

/// A parsed, immutable version range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    source: String,
    alternatives: Vec<Conjunction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Conjunction {
    required: VersionReq,
    excluded: Vec<Comparator>,
}

enum Term {
    Require(Comparator),
    Exclude(Comparator),
    Any,
}

impl VersionRange {
    pub fn parse(text: &str) -> Result<Self, RangeError> {
        let source = text.trim();
        if source.is_empty() {
            return Err(RangeError::Empty);
        }

        let alternatives = source
            .split("||")
            .map(|alt| {
                let alt = alt.trim();
                if alt.is_empty() {
                    Err(RangeError::EmptyAlternative(source.to_string()))
                } else {
                    parse_conjunction(alt)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            source: source.to_string(),
            alternatives,
        })
    }

    /// True if `version` satisfies at least one alternative.
    pub fn matches(&self, version: &Version) -> bool {
        self.alternatives.iter().any(|alt| alt.matches(version))
    }

    /// The text this range was parsed from, trimmed.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Conjunction {
    fn matches(&self, version: &Version) -> bool {
        self.required.matches(version) && !self.excluded.iter().any(|c| c.matches(version))
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for VersionRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_conjunction(text: &str) -> Result<Conjunction, RangeError> {
    let mut required = Vec::new();
    let mut excluded = Vec::new();

    for part in text.split(',') {
        let part = part.trim();
        if part.is_empty() {
            return Err(RangeError::EmptyComparator(text.to_string()));
        }
        for term in parse_comparator(part)? {
            match term {
                Term::Require(c) => required.push(c),
                Term::Exclude(c) => excluded.push(c),
                Term::Any => {}
            }
        }
    }

    Ok(Conjunction {
        required: VersionReq {
            comparators: required,
        },
        excluded,
    })
}

/// One comma-separated piece of a conjunction: `op version`, with optional
/// space after the operator, or a hyphen range `A - B`.
fn parse_comparator(part: &str) -> Result<Vec<Term>, RangeError> {
    let tokens: Vec<&str> = part.split_whitespace().collect();
    match tokens.as_slice() {
        [lower, "-", upper] => Ok(vec![parse_term(">=", lower)?, parse_term("<=", upper)?]),
        [token] => {
            let (op, version) = split_operator(token);
            if version.is_empty() {
                return Err(RangeError::MissingVersion(op.to_string()));
            }
            Ok(vec![parse_term(op, version)?])
        }
        [op, version] if split_operator(op).1.is_empty() => Ok(vec![parse_term(op, version)?]),
        _ if tokens.contains(&"-") => Err(RangeError::Hyphen(part.to_string())),
        _ => Err(RangeError::Juxtaposed(part.to_string())),
    }
}

fn split_operator(token: &str) -> (&str, &str) {
    let end = token
        .find(|c: char| !OPERATOR_CHARS.contains(&c))
        .unwrap_or(token.len());
    token.split_at(end)
}

fn parse_term(op_text: &str, version: &str) -> Result<Term, RangeError> {
    let (op, negated) = match op_text {
        "" | "=" | "==" => (Op::Exact, false),
        "!=" => (Op::Exact, true),
        ">" => (Op::Greater, false),
        ">=" | "=>" => (Op::GreaterEq, false),
        "<" => (Op::Less, false),
        "<=" | "=<" => (Op::LessEq, false),
        "~" | "~>" => (Op::Tilde, false),
        "^" => (Op::Caret, false),
        other => return Err(RangeError::Operator(other.to_string())),
    };

    let version = version.strip_prefix(['v', 'V']).unwrap_or(version);
    if version.is_empty() {
        return Err(RangeError::MissingVersion(op_text.to_string()));
    }

    // Build metadata never affects matching.
    let version = version.split('+').next().unwrap_or(version);
    let (core, pre) = match version.split_once('-') {
        Some((core, pre)) => (core, Some(pre)),
        None => (version, None),
    };

    let mut numbers: Vec<u64> = Vec::with_capacity(3);
    let mut wildcard = false;
    for (idx, segment) in core.split('.').enumerate() {
        if idx >= 3 {
            return Err(RangeError::Version(version.to_string()));
        }
        if matches!(segment, "x" | "X" | "*") {
            wildcard = true;
            continue;
        }
        if wildcard || segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RangeError::Version(version.to_string()));
        }
        let n = segment
            .parse()
            .map_err(|_| RangeError::Version(version.to_string()))?;
        numbers.push(n);
    }

    let Some(&major) = numbers.first() else {
        return match (op, negated) {
            (Op::Exact | Op::GreaterEq | Op::LessEq | Op::Tilde | Op::Caret, false) => {
                Ok(Term::Any)
            }
            _ => Err(RangeError::WildcardOperator(op_text.to_string())),
        };
    };

    let pre = match pre {
        None => Prerelease::EMPTY,
        Some(_) if numbers.len() < 3 => {
            return Err(RangeError::Version(version.to_string()));
        }
        Some(pre) => Prerelease::new(pre).map_err(|e| RangeError::Prerelease {
            input: version.to_string(),
            reason: e.to_string(),
        })?,
    };

    let comparator = Comparator {
        op,
        major,
        minor: numbers.get(1).copied(),
        patch: numbers.get(2).copied(),
        pre,
    };

    Ok(if negated {
        Term::Exclude(comparator)
    } else {
        Term::Require(comparator)
    })
}

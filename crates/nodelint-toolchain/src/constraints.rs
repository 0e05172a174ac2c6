//! Parsed constraint groups and their evaluation.

use semver::Version;

use crate::error::ResolveError;
use crate::parser::ConstraintParser;
use crate::range::VersionRange;

/// An ordered set of independent constraint groups.
///
/// Groups are alternatives: evaluation succeeds as soon as any version
/// satisfies any group. Order only matters for error reporting and display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints(Vec<VersionRange>);

impl Constraints {
    pub fn new(groups: Vec<VersionRange>) -> Self {
        Self(groups)
    }

    /// Interpret a raw specifier.
    ///
    /// The specifier is first tried as one range (`^8 || ^10`,
    /// `>=12.x <=13.4.x`). Only if that fails is it cut into clauses by
    /// [`ConstraintParser`].
    pub fn determine(specifier: &str) -> Result<Self, ResolveError> {
        match VersionRange::parse(specifier) {
            Ok(range) => {
                tracing::debug!(%specifier, "specifier is a single range");
                Ok(Self(vec![range]))
            }
            Err(e) => {
                tracing::debug!(%specifier, reason = %e, "splitting specifier into clauses");
                ConstraintParser::parse(specifier)
            }
        }
    }

    pub fn groups(&self) -> &[VersionRange] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True iff at least one of `versions` satisfies at least one group.
    ///
    /// Stops at the first satisfying pair.
    pub fn eval<'a>(&self, versions: impl IntoIterator<Item = &'a Version>) -> bool {
        versions
            .into_iter()
            .any(|version| self.0.iter().any(|group| group.matches(version)))
    }

    /// Single-version form of [`Constraints::eval`].
    pub fn matches(&self, version: &Version) -> bool {
        self.eval([version])
    }
}

impl<'a> IntoIterator for &'a Constraints {
    type Item = &'a VersionRange;
    type IntoIter = std::slice::Iter<'a, VersionRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

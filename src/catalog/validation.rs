//! Catalog validation that reports every violation at once.
//!
//! Checks are collected with Stillwater's `Validation`, so a rejected
//! catalog lists every duplicate id at once.

use super::error::{CatalogError, CatalogKind, CatalogViolation};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single catalog check.
pub type CatalogCheck = Validation<(), NonEmptyVec<CatalogViolation>>;

/// Rules a catalog must satisfy before a view accepts it.
#[derive(Debug, Clone, Copy)]
pub struct CatalogRules {
    kind: CatalogKind,
    non_empty: bool,
    unique_ids: bool,
}

impl CatalogRules {
    /// Rules with no checks enabled.
    pub fn new(kind: CatalogKind) -> Self {
        Self {
            kind,
            non_empty: false,
            unique_ids: false,
        }
    }

    /// Require at least one record.
    pub fn non_empty(mut self) -> Self {
        self.non_empty = true;
        self
    }

    /// Require every id to be non-blank and distinct.
    pub fn unique_ids(mut self) -> Self {
        self.unique_ids = true;
        self
    }

    /// Enforce all rules, accumulating every violation.
    ///
    /// `ids` is ignored unless `unique_ids` is enabled.
    pub fn enforce<'a, I>(&self, len: usize, ids: I) -> CatalogCheck
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut checks: Vec<CatalogCheck> = Vec::new();

        if self.non_empty {
            checks.push(if len == 0 {
                Validation::fail(CatalogViolation::Empty { kind: self.kind })
            } else {
                Validation::success(())
            });
        }

        if self.unique_ids {
            let mut seen = HashSet::new();
            let mut reported = HashSet::new();
            for (position, id) in ids.into_iter().enumerate() {
                if id.trim().is_empty() {
                    checks.push(Validation::fail(CatalogViolation::BlankId {
                        kind: self.kind,
                        position,
                    }));
                } else if !seen.insert(id) && reported.insert(id) {
                    checks.push(Validation::fail(CatalogViolation::DuplicateId {
                        kind: self.kind,
                        id: id.to_string(),
                    }));
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Enforce and convert to a `Result`.
    pub fn check<'a, I>(&self, len: usize, ids: I) -> Result<(), CatalogError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        match self.enforce(len, ids) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => {
                let violations: Vec<CatalogViolation> = violations.iter().cloned().collect();
                tracing::warn!(
                    catalog = %self.kind,
                    count = violations.len(),
                    "Catalog rejected"
                );
                Err(CatalogError::Invalid(violations))
            }
        }
    }
}

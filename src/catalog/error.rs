//! Catalog error types.

use std::fmt;
use thiserror::Error;

/// Which catalog an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Facts,
    Timeline,
    Regions,
    Trivia,
    Highlights,
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Facts => "facts",
            Self::Timeline => "timeline",
            Self::Regions => "regions",
            Self::Trivia => "trivia",
            Self::Highlights => "highlights",
        };
        f.write_str(label)
    }
}

/// A single problem found while validating a catalog.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogViolation {
    #[error("{kind} catalog is empty")]
    Empty { kind: CatalogKind },

    #[error("{kind} catalog has duplicate id '{id}'")]
    DuplicateId { kind: CatalogKind, id: String },

    #[error("{kind} catalog has a record with a blank id at position {position}")]
    BlankId { kind: CatalogKind, position: usize },
}

/// Errors raised when building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Validation found one or more violations; all of them are listed.
    #[error("invalid catalog: {}", summarize(.0))]
    Invalid(Vec<CatalogViolation>),

    #[error("failed to parse {kind} catalog: {source}")]
    Parse {
        kind: CatalogKind,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    pub fn violations(&self) -> &[CatalogViolation] {
        match self {
            Self::Invalid(violations) => violations,
            Self::Parse { .. } => &[],
        }
    }
}

fn summarize(violations: &[CatalogViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

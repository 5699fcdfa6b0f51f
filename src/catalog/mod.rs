//! Read-only catalogs of domain records.
//!
//! A `Catalog` is validated once when it is built and then shared by
//! reference-counted handle, so a view can be torn down and remounted over
//! the same records without copying or re-validating them.

pub mod defaults;
pub mod error;
pub mod records;
pub mod tags;
pub mod validation;

pub use error::{CatalogError, CatalogKind, CatalogViolation};
pub use records::{FactRecord, HighlightFact, Identified, Region, TimelineEvent, TriviaQuestion};
pub use tags::{Difficulty, EventCategory, FactCategory};
pub use validation::CatalogRules;

use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Immutable, ordered sequence of records.
#[derive(Debug)]
pub struct Catalog<T> {
    kind: CatalogKind,
    records: Arc<[T]>,
}

impl<T> Clone for Catalog<T> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            records: Arc::clone(&self.records),
        }
    }
}

impl<T> Catalog<T> {
    fn trusted(kind: CatalogKind, records: Vec<T>) -> Self {
        Self {
            kind,
            records: records.into(),
        }
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Identified> Catalog<T> {
    fn identified(
        kind: CatalogKind,
        records: Vec<T>,
        rules: CatalogRules,
    ) -> Result<Self, CatalogError> {
        rules.check(records.len(), records.iter().map(Identified::id))?;
        Ok(Self::trusted(kind, records))
    }

    /// Look a record up by id.
    pub fn find(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }
}

fn parse<T: DeserializeOwned>(kind: CatalogKind, json: &str) -> Result<Vec<T>, CatalogError> {
    serde_json::from_str(json).map_err(|source| CatalogError::Parse { kind, source })
}

impl Catalog<FactRecord> {
    /// Fact catalog; ids must be unique. An empty catalog is allowed.
    pub fn facts(records: Vec<FactRecord>) -> Result<Self, CatalogError> {
        let rules = CatalogRules::new(CatalogKind::Facts).unique_ids();
        Self::identified(CatalogKind::Facts, records, rules)
    }

    /// Caller facts, or the built-in set when the caller supplies none.
    pub fn facts_or_default(records: Vec<FactRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            Ok(Self::default_facts())
        } else {
            Self::facts(records)
        }
    }

    pub fn facts_from_json(json: &str) -> Result<Self, CatalogError> {
        Self::facts(parse(CatalogKind::Facts, json)?)
    }

    pub fn default_facts() -> Self {
        Self::trusted(CatalogKind::Facts, defaults::facts())
    }
}

impl Catalog<TimelineEvent> {
    /// Timeline catalog; must be non-empty with unique ids. Order is kept
    /// exactly as supplied.
    pub fn timeline(events: Vec<TimelineEvent>) -> Result<Self, CatalogError> {
        let rules = CatalogRules::new(CatalogKind::Timeline)
            .non_empty()
            .unique_ids();
        Self::identified(CatalogKind::Timeline, events, rules)
    }

    pub fn timeline_from_json(json: &str) -> Result<Self, CatalogError> {
        Self::timeline(parse(CatalogKind::Timeline, json)?)
    }

    pub fn default_timeline() -> Self {
        Self::trusted(CatalogKind::Timeline, defaults::timeline_events())
    }
}

impl Catalog<Region> {
    pub fn regions(regions: Vec<Region>) -> Result<Self, CatalogError> {
        let rules = CatalogRules::new(CatalogKind::Regions).unique_ids();
        Self::identified(CatalogKind::Regions, regions, rules)
    }

    pub fn regions_from_json(json: &str) -> Result<Self, CatalogError> {
        Self::regions(parse(CatalogKind::Regions, json)?)
    }

    pub fn default_regions() -> Self {
        Self::trusted(CatalogKind::Regions, defaults::regions())
    }
}

impl Catalog<TriviaQuestion> {
    /// Trivia deck; must be non-empty. Order is the cycle order.
    pub fn trivia(questions: Vec<TriviaQuestion>) -> Result<Self, CatalogError> {
        CatalogRules::new(CatalogKind::Trivia)
            .non_empty()
            .check(questions.len(), std::iter::empty())?;
        Ok(Self::trusted(CatalogKind::Trivia, questions))
    }

    pub fn trivia_from_json(json: &str) -> Result<Self, CatalogError> {
        Self::trivia(parse(CatalogKind::Trivia, json)?)
    }

    pub fn default_trivia() -> Self {
        Self::trusted(CatalogKind::Trivia, defaults::trivia_questions())
    }
}

impl Catalog<HighlightFact> {
    pub fn highlights(facts: Vec<HighlightFact>) -> Result<Self, CatalogError> {
        CatalogRules::new(CatalogKind::Highlights)
            .non_empty()
            .check(facts.len(), std::iter::empty())?;
        Ok(Self::trusted(CatalogKind::Highlights, facts))
    }

    pub fn default_highlights() -> Self {
        Self::trusted(CatalogKind::Highlights, defaults::highlights())
    }
}

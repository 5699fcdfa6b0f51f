//! Immutable domain records supplied to the views.

use super::tags::{Difficulty, EventCategory, FactCategory};
use serde::{Deserialize, Serialize};

/// Records that carry a catalog-unique identifier.
pub trait Identified {
    fn id(&self) -> &str;
}

/// A curated fact shown as a card in the facts grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FactRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: FactCategory,
    pub image_url: String,
    /// Long-form text for the card's detail view.
    #[serde(default)]
    pub detailed_info: Option<String>,
    /// Attribution shown in the card footer.
    #[serde(default)]
    pub source: Option<String>,
}

impl Identified for FactRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One entry on the history timeline. Catalog order is display order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: String,
    pub year: i32,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: EventCategory,
}

impl Identified for TimelineEvent {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A selectable area on the region map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub name: String,
    /// Outline handed to the renderer untouched (for example an SVG path).
    pub geometry: String,
    #[serde(default)]
    pub facts: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Identified for Region {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriviaQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: Difficulty,
}

/// Short highlight fact drawn by the "random fact" button.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HighlightFact {
    pub title: String,
    pub description: String,
    pub image_url: String,
}

//! Per-view state machines and the home page that hosts them.
//!
//! Each view owns its state exclusively and reads one immutable catalog.
//! Views never talk to each other.

mod facts;
mod home;
mod random;
mod regions;
mod timeline;
mod trivia;

pub use facts::{CatalogFilter, CategorySelection, FactCard, FilterTab};
pub use home::{Explorer, ExplorerCatalogs, MountedView, SearchBox, Tab};
pub use random::RandomFactPicker;
pub use regions::{Highlight, RegionSelector, RegionShape, SelectionCallback, SelectionError};
pub use timeline::{NavigationError, TimelineCursor, TimelineMarker, TimelineView};
pub use trivia::{TriviaError, TriviaPhase, TriviaSession, TriviaView, DEFAULT_ROUND_SECONDS};

use std::fmt;
use uuid::Uuid;

/// Identifies one mounted view instance in log output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ViewId(Uuid);

impl ViewId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ViewId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

//! Region Explorer: browse state for an interactive guide to British Columbia
//!
//! The explorer is a handful of small, independent state machines, one per
//! view, each reading an immutable catalog of records. The pure core lives in
//! `views` and never schedules anything itself; the trivia countdown is driven
//! from the imperative shell in `timer`.
//!
//! # Core Concepts
//!
//! - **Catalog**: validated, shared, read-only record sequences
//! - **Views**: category filter, timeline cursor, region selector, trivia session
//! - **Timer**: a cancellable tick source that counts a trivia round down
//! - **Explorer**: the tabbed home page that mounts and unmounts the views
//!
//! # Example
//!
//! ```rust
//! use region_explorer::catalog::{Catalog, FactCategory};
//! use region_explorer::views::{CatalogFilter, TimelineCursor};
//!
//! let mut facts = CatalogFilter::new(
//!     Catalog::default_facts(),
//!     vec![FactCategory::Wildlife, FactCategory::Culture],
//! );
//! facts.select_category("wildlife");
//! assert!(facts
//!     .visible_facts()
//!     .iter()
//!     .all(|fact| fact.category == FactCategory::Wildlife));
//!
//! let mut timeline = TimelineCursor::new(Catalog::default_timeline());
//! timeline.go_previous();
//! assert_eq!(timeline.active_index(), 0);
//! timeline.go_next();
//! assert_eq!(timeline.active_event().year, 1858);
//! ```

mod macros;

pub mod catalog;
pub mod config;
pub mod core;
pub mod timer;
pub mod views;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError};
pub use config::{ConfigError, ExplorerConfig};
pub use core::{Guard, State, StateHistory, StateTransition};
pub use timer::{IntervalTicker, TickSource, TimedTrivia, TimerError};
pub use views::{
    CatalogFilter, Explorer, RegionSelector, Tab, TimelineCursor, TriviaPhase, TriviaSession,
};

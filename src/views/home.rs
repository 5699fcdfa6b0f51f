//! The explorer home page: tab strip, search box, and the mounted views.
//!
//! Only the active tab's view is considered mounted. Leaving a tab tears its
//! view down, so nothing a visitor did there survives navigating away and
//! back.

use super::{CatalogFilter, RandomFactPicker, RegionSelector, TimelineCursor, TriviaSession};
use crate::catalog::{Catalog, FactRecord, HighlightFact, Region, TimelineEvent, TriviaQuestion};
use crate::config::ExplorerConfig;
use crate::timer::{IntervalTicker, TimedTrivia};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Map,
    Facts,
    Timeline,
    Random,
    Trivia,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Map => "Map",
            Tab::Facts => "Facts",
            Tab::Timeline => "Timeline",
            Tab::Random => "Random Facts",
            Tab::Trivia => "Trivia",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Header search box. Submitting only logs the query; there is no search
/// backend.
#[derive(Debug, Clone, Default)]
pub struct SearchBox {
    query: String,
}

impl SearchBox {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn submit(&self) {
        tracing::info!(query = %self.query, "Search submitted");
    }
}

/// Catalogs the home page mounts its views over.
#[derive(Debug, Clone)]
pub struct ExplorerCatalogs {
    pub facts: Catalog<FactRecord>,
    pub timeline: Catalog<TimelineEvent>,
    pub regions: Catalog<Region>,
    pub trivia: Catalog<TriviaQuestion>,
    pub highlights: Catalog<HighlightFact>,
}

impl Default for ExplorerCatalogs {
    fn default() -> Self {
        Self {
            facts: Catalog::default_facts(),
            timeline: Catalog::default_timeline(),
            regions: Catalog::default_regions(),
            trivia: Catalog::default_trivia(),
            highlights: Catalog::default_highlights(),
        }
    }
}

/// The view behind the active tab. Exactly one exists at a time.
#[derive(Debug)]
pub enum MountedView {
    Map(RegionSelector),
    Facts(CatalogFilter),
    Timeline(TimelineCursor),
    Random(RandomFactPicker),
    Trivia(TimedTrivia<IntervalTicker>),
}

impl MountedView {
    pub fn tab(&self) -> Tab {
        match self {
            Self::Map(_) => Tab::Map,
            Self::Facts(_) => Tab::Facts,
            Self::Timeline(_) => Tab::Timeline,
            Self::Random(_) => Tab::Random,
            Self::Trivia(_) => Tab::Trivia,
        }
    }
}

/// Host page composing the independent views as tabs.
///
/// Only the active tab's view is alive. Entering a tab builds its view fresh
/// from the catalogs; leaving it drops the view, cancelling any countdown.
#[derive(Debug)]
pub struct Explorer {
    config: ExplorerConfig,
    catalogs: ExplorerCatalogs,
    search: SearchBox,
    view: MountedView,
}

impl Explorer {
    pub fn new(config: &ExplorerConfig, catalogs: ExplorerCatalogs) -> Self {
        tracing::info!(tab = %config.home.initial_tab, "Explorer mounted");
        let view = mount(config, &catalogs, config.home.initial_tab);
        Self {
            config: config.clone(),
            catalogs,
            search: SearchBox::default(),
            view,
        }
    }

    /// Stock catalogs and configuration.
    pub fn with_defaults() -> Self {
        Self::new(&ExplorerConfig::default(), ExplorerCatalogs::default())
    }

    pub fn active_tab(&self) -> Tab {
        self.view.tab()
    }

    pub fn view(&self) -> &MountedView {
        &self.view
    }

    /// Switch tabs, tearing down the view being left and mounting a new one.
    /// Re-selecting the active tab keeps its state.
    pub fn select_tab(&mut self, tab: Tab) {
        let from = self.active_tab();
        if tab == from {
            return;
        }
        tracing::debug!(from = %from, to = %tab, "Tab changed");
        if let MountedView::Trivia(trivia) = &mut self.view {
            trivia.unmount();
        }
        self.view = mount(&self.config, &self.catalogs, tab);
    }

    pub fn search(&mut self) -> &mut SearchBox {
        &mut self.search
    }

    pub fn regions(&mut self) -> Option<&mut RegionSelector> {
        match &mut self.view {
            MountedView::Map(regions) => Some(regions),
            _ => None,
        }
    }

    pub fn facts(&mut self) -> Option<&mut CatalogFilter> {
        match &mut self.view {
            MountedView::Facts(facts) => Some(facts),
            _ => None,
        }
    }

    pub fn timeline(&mut self) -> Option<&mut TimelineCursor> {
        match &mut self.view {
            MountedView::Timeline(timeline) => Some(timeline),
            _ => None,
        }
    }

    pub fn random(&mut self) -> Option<&mut RandomFactPicker> {
        match &mut self.view {
            MountedView::Random(random) => Some(random),
            _ => None,
        }
    }

    pub fn trivia(&mut self) -> Option<&mut TimedTrivia<IntervalTicker>> {
        match &mut self.view {
            MountedView::Trivia(trivia) => Some(trivia),
            _ => None,
        }
    }
}

fn mount(config: &ExplorerConfig, catalogs: &ExplorerCatalogs, tab: Tab) -> MountedView {
    match tab {
        Tab::Map => MountedView::Map(RegionSelector::new(catalogs.regions.clone())),
        Tab::Facts => MountedView::Facts(CatalogFilter::new(
            catalogs.facts.clone(),
            config.facts.categories.clone(),
        )),
        Tab::Timeline => MountedView::Timeline(TimelineCursor::new(catalogs.timeline.clone())),
        Tab::Random => MountedView::Random(RandomFactPicker::new(catalogs.highlights.clone())),
        Tab::Trivia => MountedView::Trivia(TimedTrivia::new(
            TriviaSession::new(catalogs.trivia.clone(), config.trivia.round_seconds),
            config.trivia.tick_period(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::{CategorySelection, TriviaPhase};
    use std::time::Duration;

    #[test]
    fn opens_on_configured_tab() {
        let mut explorer = Explorer::with_defaults();
        assert_eq!(explorer.active_tab(), Tab::Map);
        assert!(explorer.regions().is_some());

        let config = ExplorerConfig::from_toml("[home]\ninitial_tab = \"timeline\"").unwrap();
        let mut explorer = Explorer::new(&config, ExplorerCatalogs::default());
        assert_eq!(explorer.active_tab(), Tab::Timeline);
        assert!(explorer.timeline().is_some());
    }

    #[test]
    fn only_the_active_tab_is_reachable() {
        let mut explorer = Explorer::with_defaults();
        assert!(matches!(explorer.view(), MountedView::Map(_)));

        assert!(explorer.facts().is_none());
        assert!(explorer.timeline().is_none());
        assert!(explorer.random().is_none());
        assert!(explorer.trivia().is_none());

        explorer.select_tab(Tab::Trivia);
        assert!(explorer.trivia().is_some());
        assert!(explorer.regions().is_none());
    }

    #[test]
    fn leaving_a_tab_discards_its_state() {
        let mut explorer = Explorer::with_defaults();
        explorer.select_tab(Tab::Timeline);
        let first_mount = {
            let timeline = explorer.timeline().unwrap();
            timeline.go_next();
            timeline.go_next();
            timeline.view_id()
        };

        explorer.select_tab(Tab::Facts);
        explorer.select_tab(Tab::Timeline);

        let timeline = explorer.timeline().unwrap();
        assert_eq!(timeline.active_index(), 0);
        assert_ne!(timeline.view_id(), first_mount);
    }

    #[test]
    fn reselecting_current_tab_keeps_state() {
        let mut explorer = Explorer::with_defaults();
        explorer.select_tab(Tab::Facts);
        explorer.facts().unwrap().select_category("culture");

        explorer.select_tab(Tab::Facts);

        assert_eq!(
            explorer.facts().unwrap().selected(),
            &CategorySelection::from("culture")
        );
    }

    #[test]
    fn map_selection_cleared_on_leave() {
        let mut explorer = Explorer::with_defaults();
        explorer.regions().unwrap().select("okanagan").unwrap();
        explorer.select_tab(Tab::Random);
        explorer.select_tab(Tab::Map);
        assert!(explorer.regions().unwrap().detail().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_cannot_run_off_screen() {
        let mut explorer = Explorer::with_defaults();
        assert!(explorer.trivia().is_none());

        explorer.select_tab(Tab::Trivia);
        explorer.trivia().unwrap().start_timer().unwrap();
        explorer.select_tab(Tab::Facts);
        explorer.select_tab(Tab::Timeline);
        tokio::time::sleep(Duration::from_millis(5_500)).await;

        assert!(explorer.trivia().is_none());
        assert_eq!(explorer.timeline().unwrap().active_index(), 0);

        explorer.select_tab(Tab::Trivia);
        let view = explorer.trivia().unwrap().snapshot();
        assert_eq!(view.phase, TriviaPhase::Idle);
        assert_eq!(view.seconds_remaining, 15);
        assert_eq!(view.number, 1);
    }

    #[test]
    fn search_is_a_stub() {
        let mut explorer = Explorer::with_defaults();
        explorer.search().set_query("orca");
        explorer.search().submit();
        assert_eq!(explorer.search().query(), "orca");
    }
}

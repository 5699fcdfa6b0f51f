//! Category-filtered fact browsing.

use super::ViewId;
use crate::catalog::{Catalog, FactCategory, FactRecord};
use serde::{Deserialize, Serialize};

/// Which facts the grid shows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategorySelection {
    #[default]
    All,
    Only(FactCategory),
}

impl CategorySelection {
    pub fn matches(&self, category: &FactCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

impl From<&str> for CategorySelection {
    /// `"all"` (any case) selects everything; anything else is a category key,
    /// folded to lowercase like every tag. A tag literally named "all" is
    /// selected through `From<FactCategory>` instead.
    fn from(key: &str) -> Self {
        if key.trim().eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(FactCategory::from(key))
        }
    }
}

impl From<FactCategory> for CategorySelection {
    fn from(category: FactCategory) -> Self {
        Self::Only(category)
    }
}

/// A filter tab as offered to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FilterTab {
    pub selection: CategorySelection,
    pub label: String,
    pub active: bool,
}

/// Card-level view of a fact.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FactCard<'a> {
    pub title: &'a str,
    pub category_label: String,
    pub image_url: &'a str,
    pub description: &'a str,
    /// Footer text; the footer is rendered only when present.
    pub source: Option<&'a str>,
}

impl<'a> From<&'a FactRecord> for FactCard<'a> {
    fn from(fact: &'a FactRecord) -> Self {
        Self {
            title: &fact.title,
            category_label: fact.category.display_name(),
            image_url: &fact.image_url,
            description: &fact.description,
            source: fact.source.as_deref().filter(|s| !s.trim().is_empty()),
        }
    }
}

/// Projects a fact catalog down to one category.
///
/// Selecting a category is never validated against the catalog: a key no
/// fact carries simply yields an empty grid.
#[derive(Debug, Clone)]
pub struct CatalogFilter {
    view_id: ViewId,
    catalog: Catalog<FactRecord>,
    tabs: Vec<FactCategory>,
    selected: CategorySelection,
}

impl CatalogFilter {
    /// Mount a filter over `catalog`, offering `tabs` after the implicit
    /// "All" tab.
    pub fn new(catalog: Catalog<FactRecord>, tabs: Vec<FactCategory>) -> Self {
        let view_id = ViewId::new();
        tracing::debug!(view = %view_id, facts = catalog.len(), "Fact filter mounted");
        Self {
            view_id,
            catalog,
            tabs,
            selected: CategorySelection::All,
        }
    }

    pub fn view_id(&self) -> ViewId {
        self.view_id
    }

    pub fn selected(&self) -> &CategorySelection {
        &self.selected
    }

    pub fn catalog(&self) -> &Catalog<FactRecord> {
        &self.catalog
    }

    pub fn select_category(&mut self, selection: impl Into<CategorySelection>) {
        let selection = selection.into();
        if selection != self.selected {
            tracing::debug!(view = %self.view_id, ?selection, "Fact category changed");
        }
        self.selected = selection;
    }

    /// Facts matching the current selection, in catalog order.
    pub fn visible_facts(&self) -> Vec<&FactRecord> {
        self.catalog
            .iter()
            .filter(|fact| self.selected.matches(&fact.category))
            .collect()
    }

    pub fn visible_cards(&self) -> Vec<FactCard<'_>> {
        self.visible_facts().into_iter().map(FactCard::from).collect()
    }

    /// "All" followed by the configured category tabs.
    pub fn tabs(&self) -> Vec<FilterTab> {
        let all = CategorySelection::All;
        std::iter::once(FilterTab {
            active: self.selected == all,
            selection: all,
            label: "All".to_string(),
        })
        .chain(self.tabs.iter().map(|category| {
            let selection = CategorySelection::Only(category.clone());
            FilterTab {
                active: self.selected == selection,
                selection,
                label: category.display_name(),
            }
        }))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> CatalogFilter {
        CatalogFilter::new(
            Catalog::default_facts(),
            vec![FactCategory::Wildlife, FactCategory::Culture],
        )
    }

    fn ids(facts: &[&FactRecord]) -> Vec<String> {
        facts.iter().map(|f| f.id.clone()).collect()
    }

    #[test]
    fn starts_with_everything_visible() {
        let filter = filter();
        assert_eq!(filter.selected(), &CategorySelection::All);
        assert_eq!(filter.visible_facts().len(), 10);
    }

    #[test]
    fn category_keeps_catalog_order() {
        let mut filter = filter();
        filter.select_category("wildlife");

        assert_eq!(ids(&filter.visible_facts()), vec!["1", "2", "6", "7", "8"]);

        filter.select_category(CategorySelection::Only(FactCategory::Culture));
        assert_eq!(ids(&filter.visible_facts()), vec!["3", "4", "5", "9", "10"]);
    }

    #[test]
    fn unknown_category_yields_empty_grid() {
        let mut filter = filter();
        filter.select_category("volcanoes");

        assert!(filter.visible_facts().is_empty());
        assert_eq!(
            filter.selected(),
            &CategorySelection::Only(FactCategory::Custom("volcanoes".to_string()))
        );
    }

    #[test]
    fn all_key_restores_full_catalog() {
        let mut filter = filter();
        filter.select_category("culture");
        filter.select_category("ALL");
        assert_eq!(filter.visible_facts().len(), 10);
    }

    #[test]
    fn keys_are_case_folded() {
        let mut filter = filter();
        filter.select_category("Wildlife");
        let folded = ids(&filter.visible_facts());

        filter.select_category("wildlife");
        assert_eq!(ids(&filter.visible_facts()), folded);
        assert_eq!(folded.len(), 5);
    }

    #[test]
    fn tag_named_all_is_selectable_by_tag() {
        let mut fact = Catalog::default_facts().records()[0].clone();
        fact.category = FactCategory::from("all");
        let catalog = Catalog::facts(vec![fact]).unwrap();
        let mut filter = CatalogFilter::new(catalog, Vec::new());

        filter.select_category(FactCategory::Custom("all".to_string()));

        assert_eq!(
            filter.selected(),
            &CategorySelection::Only(FactCategory::Custom("all".to_string()))
        );
        assert_eq!(filter.visible_facts().len(), 1);
    }

    #[test]
    fn tabs_mark_active_selection() {
        let mut filter = filter();
        filter.select_category("culture");

        let tabs = filter.tabs();
        let labels: Vec<&str> = tabs.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["All", "Wildlife", "Culture"]);
        assert_eq!(tabs.iter().filter(|t| t.active).count(), 1);
        assert!(tabs[2].active);
    }

    #[test]
    fn card_hides_blank_source() {
        let mut fact = Catalog::default_facts().records()[0].clone();
        fact.source = Some("   ".to_string());

        let card = FactCard::from(&fact);
        assert_eq!(card.category_label, "Wildlife");
        assert!(card.source.is_none());
    }
}

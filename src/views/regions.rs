//! Single-select region picker for the map view.

use super::ViewId;
use crate::catalog::{Catalog, Region};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Rejected selection requests. The previous selection is kept.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no region with id '{id}'")]
    UnknownRegion { id: String },
}

/// Host hook invoked with the full record after each successful selection.
pub type SelectionCallback = Box<dyn FnMut(&Region) + Send>;

/// Fill style a renderer should use for a region outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    Selected,
    Hovered,
    Idle,
}

/// A region outline plus the highlight it should be drawn with.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegionShape<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub geometry: &'a str,
    pub highlight: Highlight,
}

/// Tracks one selected region and, independently, one hovered region.
pub struct RegionSelector {
    view_id: ViewId,
    regions: Catalog<Region>,
    selected: Option<String>,
    hovered: Option<String>,
    on_select: SelectionCallback,
}

impl RegionSelector {
    /// Mount with a no-op selection callback.
    pub fn new(regions: Catalog<Region>) -> Self {
        Self::with_callback(regions, Box::new(|_: &Region| {}))
    }

    pub fn with_callback(regions: Catalog<Region>, on_select: SelectionCallback) -> Self {
        let view_id = ViewId::new();
        tracing::debug!(view = %view_id, regions = regions.len(), "Region map mounted");
        Self {
            view_id,
            regions,
            selected: None,
            hovered: None,
            on_select,
        }
    }

    pub fn view_id(&self) -> ViewId {
        self.view_id
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Select a region, replacing any earlier selection.
    ///
    /// Selecting the current region again is accepted and notifies the
    /// callback again; the selection itself does not change.
    pub fn select(&mut self, id: &str) -> Result<&Region, SelectionError> {
        let Some(region) = self.regions.find(id) else {
            tracing::warn!(view = %self.view_id, region = id, "Unknown region selected");
            return Err(SelectionError::UnknownRegion { id: id.to_string() });
        };

        if self.selected.as_deref() != Some(id) {
            tracing::debug!(
                view = %self.view_id,
                region = id,
                previous = self.selected.as_deref(),
                "Region selected"
            );
            self.selected = Some(region.id.clone());
        }
        (self.on_select)(region);
        Ok(region)
    }

    /// Set or clear the transient hover target.
    pub fn hover(&mut self, id: Option<&str>) {
        self.hovered = id.map(str::to_string);
    }

    /// Full record for the selected region, if any.
    pub fn detail(&self) -> Option<&Region> {
        self.selected
            .as_deref()
            .and_then(|id| self.regions.find(id))
    }

    pub fn highlight_for(&self, id: &str) -> Highlight {
        if self.selected.as_deref() == Some(id) {
            Highlight::Selected
        } else if self.hovered.as_deref() == Some(id) {
            Highlight::Hovered
        } else {
            Highlight::Idle
        }
    }

    pub fn shapes(&self) -> Vec<RegionShape<'_>> {
        self.regions
            .iter()
            .map(|region| RegionShape {
                id: &region.id,
                name: &region.name,
                geometry: &region.geometry,
                highlight: self.highlight_for(&region.id),
            })
            .collect()
    }
}

impl fmt::Debug for RegionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegionSelector")
            .field("view_id", &self.view_id)
            .field("regions", &self.regions.len())
            .field("selected", &self.selected)
            .field("hovered", &self.hovered)
            .finish_non_exhaustive()
    }
}

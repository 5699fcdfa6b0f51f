//! Clamped cursor over the history timeline.

use super::ViewId;
use crate::catalog::{Catalog, TimelineEvent};
use serde::Serialize;
use thiserror::Error;

/// Rejected cursor requests. The cursor is left where it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("timeline index {index} is out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// One dot on the timeline bar.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimelineMarker<'a> {
    pub index: usize,
    pub year: i32,
    pub title: &'a str,
    pub active: bool,
    /// Tooltip and accessible label, `"{year}: {title}"`.
    pub label: String,
}

/// Everything the timeline panel renders for the current cursor.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimelineView<'a> {
    pub event: &'a TimelineEvent,
    pub progress: f64,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub first_year: i32,
    pub last_year: i32,
}

/// Single active position over a non-empty, caller-ordered event list.
///
/// `go_previous` and `go_next` clamp at the ends instead of wrapping, so
/// `active_index < len` holds after every operation.
#[derive(Debug, Clone)]
pub struct TimelineCursor {
    view_id: ViewId,
    events: Catalog<TimelineEvent>,
    active_index: usize,
}

impl TimelineCursor {
    /// Mount a cursor at the first event.
    ///
    /// Timeline catalogs are non-empty by construction, which is what keeps
    /// `active_event` total.
    pub fn new(events: Catalog<TimelineEvent>) -> Self {
        let view_id = ViewId::new();
        tracing::debug!(view = %view_id, events = events.len(), "Timeline mounted");
        Self {
            view_id,
            events,
            active_index: 0,
        }
    }

    pub fn view_id(&self) -> ViewId {
        self.view_id
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    pub fn active_event(&self) -> &TimelineEvent {
        &self.events.records()[self.active_index]
    }

    pub fn can_go_previous(&self) -> bool {
        self.active_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.active_index + 1 < self.events.len()
    }

    /// Step one event back; no-op on the first event.
    pub fn go_previous(&mut self) {
        if self.can_go_previous() {
            self.move_to(self.active_index - 1);
        }
    }

    /// Step one event forward; no-op on the last event.
    pub fn go_next(&mut self) {
        if self.can_go_next() {
            self.move_to(self.active_index + 1);
        }
    }

    /// Jump straight to an event, as when a timeline dot is clicked.
    pub fn jump_to(&mut self, index: usize) -> Result<(), NavigationError> {
        let len = self.events.len();
        if index >= len {
            tracing::debug!(view = %self.view_id, index, len, "Timeline jump rejected");
            return Err(NavigationError::IndexOutOfRange { index, len });
        }
        self.move_to(index);
        Ok(())
    }

    /// Position of the active dot along the bar, in `[0, 1]`.
    pub fn progress_fraction(&self) -> f64 {
        let len = self.events.len();
        if len <= 1 {
            return 0.0;
        }
        self.active_index as f64 / (len - 1) as f64
    }

    pub fn first_year(&self) -> i32 {
        self.events.records()[0].year
    }

    pub fn last_year(&self) -> i32 {
        self.events.records()[self.events.len() - 1].year
    }

    pub fn markers(&self) -> Vec<TimelineMarker<'_>> {
        self.events
            .iter()
            .enumerate()
            .map(|(index, event)| TimelineMarker {
                index,
                year: event.year,
                title: &event.title,
                active: index == self.active_index,
                label: format!("{}: {}", event.year, event.title),
            })
            .collect()
    }

    pub fn view(&self) -> TimelineView<'_> {
        TimelineView {
            event: self.active_event(),
            progress: self.progress_fraction(),
            can_go_previous: self.can_go_previous(),
            can_go_next: self.can_go_next(),
            first_year: self.first_year(),
            last_year: self.last_year(),
        }
    }

    fn move_to(&mut self, index: usize) {
        if index != self.active_index {
            tracing::debug!(
                view = %self.view_id,
                from = self.active_index,
                to = index,
                year = self.events.records()[index].year,
                "Timeline cursor moved"
            );
        }
        self.active_index = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EventCategory;

    fn cursor() -> TimelineCursor {
        TimelineCursor::new(Catalog::default_timeline())
    }

    fn single_event() -> TimelineCursor {
        let event = TimelineEvent {
            id: "only".to_string(),
            year: -500,
            title: "Glacial retreat".to_string(),
            description: "Ice sheets withdraw".to_string(),
            image_url: "/ice.jpg".to_string(),
            category: EventCategory::Natural,
        };
        TimelineCursor::new(Catalog::timeline(vec![event]).unwrap())
    }

    #[test]
    fn starts_at_first_event() {
        let cursor = cursor();
        assert_eq!(cursor.active_index(), 0);
        assert_eq!(cursor.active_event().year, 1778);
        assert!(!cursor.can_go_previous());
        assert!(cursor.can_go_next());
        assert_eq!(cursor.progress_fraction(), 0.0);
    }

    #[test]
    fn previous_is_clamped_at_start() {
        let mut cursor = cursor();
        cursor.go_previous();
        cursor.go_previous();
        assert_eq!(cursor.active_index(), 0);
    }

    #[test]
    fn next_is_clamped_at_end() {
        let mut cursor = cursor();
        for _ in 0..20 {
            cursor.go_next();
        }
        assert_eq!(cursor.active_index(), 6);
        assert!(!cursor.can_go_next());
        assert_eq!(cursor.progress_fraction(), 1.0);
        assert_eq!(cursor.active_event().title, "Vancouver Winter Olympics");
    }

    #[test]
    fn progress_tracks_dot_position() {
        let mut cursor = cursor();
        cursor.jump_to(3).unwrap();
        assert!((cursor.progress_fraction() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_range_jump_is_rejected() {
        let mut cursor = cursor();
        cursor.go_next();

        let err = cursor.jump_to(7).unwrap_err();
        assert_eq!(err, NavigationError::IndexOutOfRange { index: 7, len: 7 });
        assert_eq!(cursor.active_index(), 1);
    }

    #[test]
    fn single_event_has_zero_progress_and_no_navigation() {
        let mut cursor = single_event();
        cursor.go_next();
        cursor.go_previous();
        assert_eq!(cursor.active_index(), 0);
        assert_eq!(cursor.progress_fraction(), 0.0);
        assert!(!cursor.can_go_next());
        assert_eq!(cursor.first_year(), -500);
        assert_eq!(cursor.last_year(), -500);
    }

    #[test]
    fn markers_label_and_highlight_active_dot() {
        let mut cursor = cursor();
        cursor.jump_to(2).unwrap();

        let markers = cursor.markers();
        assert_eq!(markers.len(), 7);
        assert_eq!(markers[2].label, "1871: BC Joins Confederation");
        assert!(markers[2].active);
        assert_eq!(markers.iter().filter(|m| m.active).count(), 1);
    }

    #[test]
    fn view_reports_year_range() {
        let view_cursor = cursor();
        let view = view_cursor.view();
        assert_eq!((view.first_year, view.last_year), (1778, 2010));
        assert!(!view.can_go_previous);
    }
}

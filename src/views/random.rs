//! "Show me a random fact" panel.

use super::ViewId;
use crate::catalog::{Catalog, HighlightFact};
use rand::Rng;

/// Draws highlight facts uniformly at random. Repeats are allowed.
#[derive(Debug, Clone)]
pub struct RandomFactPicker {
    view_id: ViewId,
    facts: Catalog<HighlightFact>,
    current: Option<usize>,
}

impl RandomFactPicker {
    pub fn new(facts: Catalog<HighlightFact>) -> Self {
        Self {
            view_id: ViewId::new(),
            facts,
            current: None,
        }
    }

    /// Pick a fact and make it current.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<&HighlightFact> {
        if self.facts.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.facts.len());
        tracing::debug!(view = %self.view_id, index, "Random fact drawn");
        self.current = Some(index);
        self.facts.get(index)
    }

    /// Fact on display; `None` until the first draw.
    pub fn current(&self) -> Option<&HighlightFact> {
        self.current.and_then(|index| self.facts.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn nothing_shown_before_first_draw() {
        let picker = RandomFactPicker::new(Catalog::default_highlights());
        assert!(picker.current().is_none());
    }

    #[test]
    fn draw_sets_current() {
        let mut picker = RandomFactPicker::new(Catalog::default_highlights());
        let mut rng = StdRng::seed_from_u64(7);

        let drawn = picker.draw(&mut rng).cloned();
        assert!(drawn.is_some());
        assert_eq!(picker.current().cloned(), drawn);
    }

    #[test]
    fn repeated_draws_reach_every_fact() {
        let mut picker = RandomFactPicker::new(Catalog::default_highlights());
        let mut rng = StdRng::seed_from_u64(42);

        let titles: HashSet<String> = (0..200)
            .filter_map(|_| picker.draw(&mut rng).map(|f| f.title.clone()))
            .collect();
        assert_eq!(titles.len(), 4);
    }
}

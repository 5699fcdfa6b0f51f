//! Tag enumerations carried by catalog records.

use crate::tag_enum;

tag_enum! {
    /// Category of a fact card.
    pub enum FactCategory {
        Wildlife => "wildlife",
        Culture => "culture",
        Geography => "geography",
        History => "history",
    }
}

tag_enum! {
    /// Category of a timeline event.
    pub enum EventCategory {
        Settlement => "settlement",
        Politics => "politics",
        Culture => "culture",
        Natural => "natural",
    }
}

tag_enum! {
    /// Difficulty label of a trivia question.
    pub enum Difficulty {
        Easy => "easy",
        Medium => "medium",
        Hard => "hard",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fact_categories_cover_the_grid_tabs() {
        assert_eq!(FactCategory::from("wildlife"), FactCategory::Wildlife);
        assert_eq!(FactCategory::from("Culture"), FactCategory::Culture);
        assert_eq!(FactCategory::Wildlife.display_name(), "Wildlife");
    }

    #[test]
    fn event_category_custom_tag_round_trips_through_string() {
        let tag = EventCategory::from("economy");
        let label: String = tag.clone().into();
        assert_eq!(label, "economy");
        assert_eq!(EventCategory::from(label), tag);
    }

    #[test]
    fn difficulty_parses_with_from_str() {
        let parsed: Difficulty = "HARD".parse().unwrap();
        assert_eq!(parsed, Difficulty::Hard);
    }
}

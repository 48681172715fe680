use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::catalog::{CatalogSet, Language, Topic};
use crate::session::countdown::SELECTION_SECS;

/// Number of topic cards dealt per shuffle.
pub const DISPLAY_COUNT: usize = 5;

/// Owns every piece of mutable picker state and the transitions that respond
/// to user events. The UI layer only reads from it and forwards events; it
/// never mutates the session directly.
pub struct TopicSession {
    pub displayed: Vec<Topic>,
    pub selected: Option<String>,
    pub subtopics_expanded: bool,
    pub selected_subtopic: Option<String>,
    pub seconds_remaining: u32,
    pub language: Language,
    catalogs: CatalogSet,
    rng: SmallRng,
}

impl TopicSession {
    pub fn new(catalogs: CatalogSet, language: Language, rng: SmallRng) -> Self {
        let mut session = Self {
            displayed: Vec::new(),
            selected: None,
            subtopics_expanded: false,
            selected_subtopic: None,
            seconds_remaining: 0,
            language,
            catalogs,
            rng,
        };
        session.displayed = session.deal();
        session
    }

    /// Shuffle the whole active catalog, then keep the first five. Shuffling
    /// before truncating keeps every topic's inclusion probability equal.
    fn deal(&mut self) -> Vec<Topic> {
        let mut topics = self.catalogs.get(self.language).topics.clone();
        topics.shuffle(&mut self.rng);
        topics.truncate(DISPLAY_COUNT);
        topics
    }

    /// Clear the selection state and reshuffle. A running countdown is left
    /// untouched; it keeps draining until it hits zero on its own.
    fn reset(&mut self) {
        self.selected = None;
        self.subtopics_expanded = false;
        self.selected_subtopic = None;
        self.displayed = self.deal();
    }

    /// A card was activated. Repeated activations of the selected card first
    /// expand its subtopics, then reset the whole deal; any other card starts
    /// a fresh selection with a full countdown.
    pub fn topic_clicked(&mut self, name: &str) {
        if !self.displayed.iter().any(|t| t.name == name) {
            return;
        }

        if self.selected.as_deref() == Some(name) {
            if self.subtopics_expanded {
                self.reset();
            } else {
                self.subtopics_expanded = true;
            }
        } else {
            self.selected = Some(name.to_string());
            self.subtopics_expanded = false;
            self.selected_subtopic = None;
            self.seconds_remaining = SELECTION_SECS;
        }
    }

    /// Only meaningful while a topic is selected and expanded. Re-picking the
    /// same subtopic keeps it picked; there is no toggle-off.
    pub fn subtopic_clicked(&mut self, subtopic: &str) {
        if self.selected.is_none() || !self.subtopics_expanded {
            return;
        }
        self.selected_subtopic = Some(subtopic.to_string());
    }

    /// Any interaction outside the card and subtopic regions.
    pub fn outside_interaction(&mut self) {
        self.reset();
    }

    /// Switching languages always resets, even to the current language.
    pub fn language_changed(&mut self, language: Language) {
        self.language = language;
        self.reset();
    }

    /// One second of countdown. At zero only the selection drops; the
    /// expansion flag and picked subtopic survive until the next reset.
    pub fn tick(&mut self) {
        if self.seconds_remaining > 0 {
            self.seconds_remaining -= 1;
        }
        if self.seconds_remaining == 0 {
            self.selected = None;
        }
    }

    /// The driving clock delivers ticks exactly while this is true.
    pub fn timer_running(&self) -> bool {
        self.seconds_remaining > 0
    }

    pub fn selected_topic(&self) -> Option<&Topic> {
        let name = self.selected.as_deref()?;
        self.displayed.iter().find(|t| t.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn session(seed: u64) -> TopicSession {
        TopicSession::new(
            CatalogSet::load(),
            Language::English,
            SmallRng::seed_from_u64(seed),
        )
    }

    fn displayed_names(session: &TopicSession) -> Vec<String> {
        session.displayed.iter().map(|t| t.name.clone()).collect()
    }

    fn assert_valid_deal(session: &TopicSession) {
        assert_eq!(session.displayed.len(), DISPLAY_COUNT);
        let names: HashSet<&str> = session.displayed.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names.len(), DISPLAY_COUNT);
        let catalog: HashSet<&str> = session
            .catalogs
            .get(session.language)
            .topics
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        for name in names {
            assert!(catalog.contains(name));
        }
    }

    #[test]
    fn test_initial_deal_is_five_distinct_catalog_topics() {
        let session = session(1);
        assert_valid_deal(&session);
        assert_eq!(session.selected, None);
        assert_eq!(session.seconds_remaining, 0);
        assert!(!session.timer_running());
    }

    #[test]
    fn test_small_catalog_deals_every_topic() {
        let topics: Vec<Topic> = ["One", "Two", "Three"]
            .iter()
            .map(|name| Topic {
                name: name.to_string(),
                subtopics: vec!["a".to_string()],
            })
            .collect();
        let catalog = Catalog { topics };
        let session = TopicSession::new(
            CatalogSet::new(catalog.clone(), catalog),
            Language::English,
            SmallRng::seed_from_u64(1),
        );
        assert_eq!(session.displayed.len(), 3);
        let names: HashSet<&str> = session.displayed.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn test_first_click_selects_and_starts_countdown() {
        let mut session = session(2);
        let name = session.displayed[0].name.clone();
        session.topic_clicked(&name);
        assert_eq!(session.selected.as_deref(), Some(name.as_str()));
        assert_eq!(session.seconds_remaining, SELECTION_SECS);
        assert!(!session.subtopics_expanded);
        assert!(session.timer_running());
    }

    #[test]
    fn test_second_click_expands_without_touching_countdown() {
        let mut session = session(3);
        let name = session.displayed[0].name.clone();
        session.topic_clicked(&name);
        session.tick();
        let remaining = session.seconds_remaining;

        session.topic_clicked(&name);
        assert!(session.subtopics_expanded);
        assert_eq!(session.seconds_remaining, remaining);
        assert_eq!(session.selected.as_deref(), Some(name.as_str()));
    }

    #[test]
    fn test_third_click_clears_selection_and_reshuffles() {
        let mut session = session(4);
        let before = displayed_names(&session);
        let name = before[0].clone();
        session.topic_clicked(&name);
        session.topic_clicked(&name);
        session.topic_clicked(&name);

        assert_eq!(session.selected, None);
        assert!(!session.subtopics_expanded);
        assert_eq!(session.selected_subtopic, None);
        assert_valid_deal(&session);

        // A reshuffle produces a different deal with overwhelming probability
        // over repeated trials.
        let mut changed = displayed_names(&session) != before;
        for _ in 0..10 {
            if changed {
                break;
            }
            session.outside_interaction();
            changed = displayed_names(&session) != before;
        }
        assert!(changed);
    }

    #[test]
    fn test_switching_topics_restarts_countdown() {
        let mut session = session(5);
        let first = session.displayed[0].name.clone();
        let second = session.displayed[1].name.clone();

        session.topic_clicked(&first);
        for _ in 0..100 {
            session.tick();
        }
        assert_eq!(session.seconds_remaining, SELECTION_SECS - 100);

        session.topic_clicked(&second);
        assert_eq!(session.selected.as_deref(), Some(second.as_str()));
        assert_eq!(session.seconds_remaining, SELECTION_SECS);
        assert!(!session.subtopics_expanded);
        assert_eq!(session.selected_subtopic, None);
    }

    #[test]
    fn test_switching_topics_collapses_expansion() {
        let mut session = session(6);
        let first = session.displayed[0].name.clone();
        let second = session.displayed[1].name.clone();

        session.topic_clicked(&first);
        session.topic_clicked(&first);
        let sub = session.selected_topic().unwrap().subtopics[0].clone();
        session.subtopic_clicked(&sub);
        assert_eq!(session.selected_subtopic.as_deref(), Some(sub.as_str()));

        session.topic_clicked(&second);
        assert!(!session.subtopics_expanded);
        assert_eq!(session.selected_subtopic, None);
    }

    #[test]
    fn test_unknown_topic_name_is_ignored() {
        let mut session = session(7);
        let before = displayed_names(&session);
        session.topic_clicked("no such topic");
        assert_eq!(session.selected, None);
        assert_eq!(session.seconds_remaining, 0);
        assert_eq!(displayed_names(&session), before);
    }

    #[test]
    fn test_subtopic_click_requires_expansion() {
        let mut session = session(8);
        session.subtopic_clicked("anything");
        assert_eq!(session.selected_subtopic, None);

        let name = session.displayed[0].name.clone();
        session.topic_clicked(&name);
        session.subtopic_clicked("anything");
        assert_eq!(session.selected_subtopic, None);
    }

    #[test]
    fn test_subtopic_reclick_is_idempotent() {
        let mut session = session(9);
        let name = session.displayed[0].name.clone();
        session.topic_clicked(&name);
        session.topic_clicked(&name);
        let sub = session.selected_topic().unwrap().subtopics[0].clone();

        session.subtopic_clicked(&sub);
        session.subtopic_clicked(&sub);
        assert_eq!(session.selected_subtopic.as_deref(), Some(sub.as_str()));
    }

    #[test]
    fn test_countdown_runs_to_zero_then_drops_selection() {
        let mut session = session(10);
        let name = session.displayed[0].name.clone();
        session.topic_clicked(&name);

        for _ in 0..(SELECTION_SECS - 1) {
            session.tick();
            assert!(session.selected.is_some());
        }
        session.tick();
        assert_eq!(session.seconds_remaining, 0);
        assert_eq!(session.selected, None);
        assert!(!session.timer_running());
    }

    #[test]
    fn test_tick_at_zero_drops_selection_but_keeps_expansion() {
        let mut session = session(11);
        let name = session.displayed[0].name.clone();
        session.topic_clicked(&name);
        session.topic_clicked(&name);
        let sub = session.selected_topic().unwrap().subtopics[0].clone();
        session.subtopic_clicked(&sub);

        session.seconds_remaining = 0;
        session.tick();
        assert_eq!(session.selected, None);
        assert!(session.subtopics_expanded);
        assert_eq!(session.selected_subtopic.as_deref(), Some(sub.as_str()));
    }

    #[test]
    fn test_expiry_does_not_reshuffle() {
        let mut session = session(12);
        let name = session.displayed[0].name.clone();
        session.topic_clicked(&name);
        let before = displayed_names(&session);

        for _ in 0..SELECTION_SECS {
            session.tick();
        }
        assert_eq!(displayed_names(&session), before);
    }

    #[test]
    fn test_reset_leaves_countdown_draining() {
        let mut session = session(13);
        let name = session.displayed[0].name.clone();
        session.topic_clicked(&name);
        session.tick();
        let remaining = session.seconds_remaining;

        session.outside_interaction();
        assert_eq!(session.selected, None);
        assert_eq!(session.seconds_remaining, remaining);
        assert!(session.timer_running());
    }

    #[test]
    fn test_language_change_resets_and_swaps_catalog() {
        let mut session = session(14);
        let name = session.displayed[0].name.clone();
        session.topic_clicked(&name);

        session.language_changed(Language::Finnish);
        assert_eq!(session.language, Language::Finnish);
        assert_eq!(session.selected, None);
        assert_valid_deal(&session);
    }

    #[test]
    fn test_language_change_to_same_language_still_resets() {
        let mut session = session(15);
        let name = session.displayed[0].name.clone();
        session.topic_clicked(&name);
        session.topic_clicked(&name);

        session.language_changed(Language::English);
        assert_eq!(session.selected, None);
        assert!(!session.subtopics_expanded);
        assert_valid_deal(&session);
    }

    #[test]
    fn test_outside_interaction_is_idempotent() {
        let mut session = session(16);
        let name = session.displayed[0].name.clone();
        session.topic_clicked(&name);
        session.topic_clicked(&name);

        session.outside_interaction();
        let after_once = (
            session.selected.clone(),
            session.subtopics_expanded,
            session.selected_subtopic.clone(),
        );
        session.outside_interaction();
        let after_twice = (
            session.selected.clone(),
            session.subtopics_expanded,
            session.selected_subtopic.clone(),
        );
        assert_eq!(after_once, after_twice);
        assert_eq!(after_twice, (None, false, None));
        assert_valid_deal(&session);
    }

    #[test]
    fn test_finnish_deal_comes_from_finnish_catalog() {
        let mut session = session(17);
        session.language_changed(Language::Finnish);
        let catalog: HashSet<&str> = session
            .catalogs
            .get(Language::Finnish)
            .topics
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        for topic in &session.displayed {
            assert!(catalog.contains(topic.name.as_str()));
        }
    }
}

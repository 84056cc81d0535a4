//! Dashboard state: the current page and the Home mood selection.
//!
//! The root component owns a single [`DashboardState`] and every click is a
//! synchronous call into it. Home's mood is scoped to a visit of Home, so
//! moving to another page clears it.

use tracing::{debug, warn};

use crate::error::Result;
use crate::mood::Mood;
use crate::page::Page;

/// Transient in-memory UI state, never persisted
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DashboardState {
    page: Page,
    mood: Option<Mood>,
}

impl DashboardState {
    /// Fresh state: Home page, no mood selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state opened on `page` instead of Home
    pub fn starting_at(page: Page) -> Self {
        Self { page, mood: None }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    pub fn is_page_active(&self, page: Page) -> bool {
        self.page == page
    }

    pub fn is_mood_active(&self, mood: Mood) -> bool {
        self.mood == Some(mood)
    }

    /// Show `page`. Returns true if the visible page changed.
    ///
    /// Leaving a page drops the mood picked on it; re-selecting the
    /// current page keeps everything as is.
    pub fn select_page(&mut self, page: Page) -> bool {
        if self.page == page {
            return false;
        }
        debug!(from = %self.page, to = %page, "page selected");
        self.page = page;
        self.mood = None;
        true
    }

    /// Select a page by its string identifier.
    ///
    /// Unknown identifiers are rejected and leave the state untouched.
    pub fn select_page_id(&mut self, id: &str) -> Result<Page> {
        let page = id.parse::<Page>().inspect_err(|e| {
            warn!("Ignoring navigation request: {}", e);
        })?;
        self.select_page(page);
        Ok(page)
    }

    /// Highlight `mood`. Selecting the active mood again is a no-op.
    pub fn select_mood(&mut self, mood: Mood) {
        if self.mood != Some(mood) {
            debug!(mood = %mood, "mood selected");
            self.mood = Some(mood);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;

    fn active_pages(state: &DashboardState) -> Vec<Page> {
        Page::ALL
            .into_iter()
            .filter(|p| state.is_page_active(*p))
            .collect()
    }

    fn active_moods(state: &DashboardState) -> Vec<Mood> {
        Mood::ALL
            .into_iter()
            .filter(|m| state.is_mood_active(*m))
            .collect()
    }

    #[test]
    fn starts_on_home_without_mood() {
        let state = DashboardState::new();
        assert_eq!(state.page(), Page::Home);
        assert_eq!(state.mood(), None);
        assert!(active_moods(&state).is_empty());
    }

    #[test]
    fn each_page_is_exclusively_active() {
        for page in Page::ALL {
            let mut state = DashboardState::new();
            state.select_page(page);
            assert_eq!(active_pages(&state), vec![page]);
        }
    }

    #[test]
    fn each_mood_is_exclusively_active() {
        let mut state = DashboardState::new();
        for mood in Mood::ALL {
            state.select_mood(mood);
            assert_eq!(active_moods(&state), vec![mood]);
        }
    }

    #[test]
    fn switching_mood_deactivates_previous() {
        let mut state = DashboardState::new();
        state.select_mood(Mood::Bien);
        assert!(state.is_mood_active(Mood::Bien));

        state.select_mood(Mood::Neutre);
        assert!(!state.is_mood_active(Mood::Bien));
        assert!(state.is_mood_active(Mood::Neutre));
    }

    #[test]
    fn reselecting_mood_is_idempotent() {
        let mut state = DashboardState::new();
        state.select_mood(Mood::Excellent);
        state.select_mood(Mood::Excellent);
        assert_eq!(active_moods(&state), vec![Mood::Excellent]);
    }

    #[test]
    fn navigation_away_resets_mood() {
        let mut state = DashboardState::new();
        state.select_mood(Mood::Fatigue);

        assert!(state.select_page(Page::Journal));
        assert!(state.select_page(Page::Home));
        assert_eq!(state.page(), Page::Home);
        assert_eq!(state.mood(), None);
    }

    #[test]
    fn reselecting_current_page_keeps_mood() {
        let mut state = DashboardState::new();
        state.select_mood(Mood::Bien);

        assert!(!state.select_page(Page::Home));
        assert_eq!(state.mood(), Some(Mood::Bien));
    }

    #[test]
    fn select_page_by_id() {
        let mut state = DashboardState::new();
        assert_eq!(state.select_page_id("stats"), Ok(Page::Stats));
        assert_eq!(state.page(), Page::Stats);
    }

    #[test]
    fn unknown_page_id_leaves_state_untouched() {
        let mut state = DashboardState::starting_at(Page::Challenges);
        let before = state;

        let result = state.select_page_id("leaderboard");
        assert_eq!(
            result,
            Err(DashboardError::UnknownPage("leaderboard".to_string()))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn starting_at_other_page() {
        let state = DashboardState::starting_at(Page::Settings);
        assert_eq!(state.page(), Page::Settings);
        assert_eq!(state.mood(), None);
    }
}

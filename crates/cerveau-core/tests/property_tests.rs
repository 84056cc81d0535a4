//! Property-based tests for DashboardState
//!
//! Uses proptest to drive random click sequences through the dashboard and
//! check the router/mood invariants after every step.

use cerveau_core::{DashboardState, Mood, Page};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn page_strategy() -> impl Strategy<Value = Page> {
    prop::sample::select(Page::ALL.to_vec())
}

fn mood_strategy() -> impl Strategy<Value = Mood> {
    prop::sample::select(Mood::ALL.to_vec())
}

/// A click on one of the two surfaces
#[derive(Debug, Clone)]
enum Click {
    Nav(Page),
    Mood(Mood),
    RawId(String),
}

fn clicks_strategy(max: usize) -> impl Strategy<Value = Vec<Click>> {
    prop::collection::vec(
        prop_oneof![
            3 => page_strategy().prop_map(Click::Nav),
            3 => mood_strategy().prop_map(Click::Mood),
            1 => "[a-z]{0,12}".prop_map(Click::RawId),
        ],
        0..max,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Exactly one page and at most one mood are active after any sequence
    #[test]
    fn single_active_page_and_mood(clicks in clicks_strategy(64)) {
        let mut state = DashboardState::new();
        for click in clicks {
            match click {
                Click::Nav(page) => { state.select_page(page); }
                Click::Mood(mood) => state.select_mood(mood),
                Click::RawId(id) => { let _ = state.select_page_id(&id); }
            }

            let pages = Page::ALL.iter().filter(|p| state.is_page_active(**p)).count();
            let moods = Mood::ALL.iter().filter(|m| state.is_mood_active(**m)).count();
            prop_assert_eq!(pages, 1);
            prop_assert!(moods <= 1);
        }
    }

    /// The last mood clicked is the one highlighted, however often it is repeated
    #[test]
    fn last_mood_wins(moods in prop::collection::vec(mood_strategy(), 1..20)) {
        let mut state = DashboardState::new();
        for mood in &moods {
            state.select_mood(*mood);
        }
        prop_assert_eq!(state.mood(), moods.last().copied());
    }

    /// Navigating to a different page always clears the mood
    #[test]
    fn leaving_page_clears_mood(mood in mood_strategy(), page in page_strategy()) {
        prop_assume!(page != Page::Home);
        let mut state = DashboardState::new();
        state.select_mood(mood);
        prop_assert!(state.select_page(page));
        prop_assert_eq!(state.mood(), None);
        prop_assert_eq!(state.page(), page);
    }

    /// Unknown identifiers never move the router
    #[test]
    fn unknown_ids_rejected(id in "[a-z]{1,12}", start in page_strategy()) {
        prop_assume!(id.parse::<Page>().is_err());
        let mut state = DashboardState::starting_at(start);
        prop_assert!(state.select_page_id(&id).is_err());
        prop_assert_eq!(state.page(), start);
    }
}

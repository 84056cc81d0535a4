//! Top-level pages reachable from the bottom navigation bar.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// A top-level page of the dashboard
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Greeting, mood selector and the daily widgets
    #[default]
    Home,
    Stats,
    Journal,
    Challenges,
    Settings,
}

impl Page {
    /// All pages, in navigation bar order
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Stats,
        Page::Journal,
        Page::Challenges,
        Page::Settings,
    ];

    /// Stable string identifier (`home`, `stats`, ...)
    pub fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Stats => "stats",
            Page::Journal => "journal",
            Page::Challenges => "challenges",
            Page::Settings => "settings",
        }
    }

    /// Emoji shown in the navigation bar
    pub fn icon(&self) -> &'static str {
        match self {
            Page::Home => "🏠",
            Page::Stats => "📊",
            Page::Journal => "📖",
            Page::Challenges => "🧠",
            Page::Settings => "⚙️",
        }
    }

    /// Short label shown under the navigation icon
    pub fn nav_label(&self) -> &'static str {
        match self {
            Page::Home => "Accueil",
            Page::Stats => "Stats",
            Page::Journal => "Journal",
            Page::Challenges => "Défis",
            Page::Settings => "Réglages",
        }
    }

    /// Heading rendered at the top of the page
    pub fn heading(&self) -> &'static str {
        match self {
            Page::Home => "Bonjour 👋",
            Page::Stats => "Statistiques",
            Page::Journal => "Journal mental",
            Page::Challenges => "Défis cognitifs",
            Page::Settings => "Paramètres",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Page {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        Page::ALL
            .into_iter()
            .find(|page| page.id().eq_ignore_ascii_case(id))
            .ok_or_else(|| DashboardError::UnknownPage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn nav_order() {
        let ids: Vec<&str> = Page::ALL.iter().map(Page::id).collect();
        assert_eq!(ids, ["home", "stats", "journal", "challenges", "settings"]);
    }

    #[test]
    fn parse_known_ids() {
        for page in Page::ALL {
            assert_eq!(page.id().parse::<Page>(), Ok(page));
        }
        assert_eq!(" Stats ".parse::<Page>(), Ok(Page::Stats));
    }

    #[test]
    fn parse_unknown_id() {
        assert_eq!(
            "profile".parse::<Page>(),
            Err(DashboardError::UnknownPage("profile".to_string()))
        );
        assert!("".parse::<Page>().is_err());
    }

    #[test]
    fn nav_labels() {
        assert_eq!(Page::Home.nav_label(), "Accueil");
        assert_eq!(Page::Challenges.nav_label(), "Défis");
        assert_eq!(Page::Settings.nav_label(), "Réglages");
    }

    #[test]
    fn serializes_as_id() {
        let json = serde_json::to_string(&Page::Challenges).unwrap();
        assert_eq!(json, "\"challenges\"");
        let page: Page = serde_json::from_str("\"journal\"").unwrap();
        assert_eq!(page, Page::Journal);
    }
}

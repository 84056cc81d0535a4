//! Static display content for the dashboard pages.
//!
//! Nothing here is computed: the gauges, the daily challenge and the
//! exercise list are placeholders rendered identically on every visit.

/// Home page subtitle under the greeting
pub const HOME_SUBTITLE: &str = "Comment va ton cerveau aujourd'hui ?";

/// Text of the "Défi du jour" card
pub const DAILY_CHALLENGE: &str = "🧩 Trouve 5 objets rouges autour de toi en 60 secondes";

/// Title and subtitle of the "Mode Focus" card
pub const FOCUS_SESSION: (&str, &str) = ("Session de concentration", "25 min de travail profond");

/// Placeholder shown in the empty statistics overview
pub const STATS_PLACEHOLDER: &str = "Tes statistiques apparaîtront ici";

/// Placeholder of the journal text area
pub const JOURNAL_PROMPT: &str = "Qu'as-tu appris aujourd'hui ?";

/// Visible rows of the journal text area
pub const JOURNAL_ROWS: u32 = 5;

/// A labelled percentage drawn as a progress bar
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Gauge {
    pub label: &'static str,
    /// Percentage, 0..=100 once clamped
    pub value: u8,
    /// CSS class of the bar fill
    pub color_class: &'static str,
}

impl Gauge {
    /// Percentage clamped to the width of the bar
    pub fn percent(&self) -> u8 {
        self.value.min(100)
    }
}

/// Gauges of the "Tes statistiques" widget
pub const GAUGES: [Gauge; 3] = [
    Gauge { label: "Concentration", value: 75, color_class: "stat-teal" },
    Gauge { label: "Curiosité", value: 60, color_class: "stat-emerald" },
    Gauge { label: "Énergie", value: 85, color_class: "stat-orange" },
];

/// Difficulty badge of a cognitive exercise
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Facile",
            Difficulty::Medium => "Moyen",
            Difficulty::Hard => "Difficile",
        }
    }

    /// CSS modifier applied next to `difficulty-badge`
    pub fn class(&self) -> &'static str {
        match self {
            Difficulty::Easy => "difficulty-easy",
            Difficulty::Medium => "difficulty-medium",
            Difficulty::Hard => "difficulty-hard",
        }
    }
}

/// An exercise listed on the Challenges page
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Challenge {
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
}

pub const CHALLENGES: [Challenge; 3] = [
    Challenge {
        title: "Observation",
        description: "Trouve les différences",
        difficulty: Difficulty::Easy,
    },
    Challenge {
        title: "Mémoire",
        description: "Séquence de nombres",
        difficulty: Difficulty::Medium,
    },
    Challenge {
        title: "Logique",
        description: "Casse-tête du jour",
        difficulty: Difficulty::Hard,
    },
];

/// A checkbox row on the Settings page.
///
/// The checkbox keeps its own state; nothing in the app reads it back.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SettingToggle {
    pub label: &'static str,
    pub initially_checked: bool,
}

pub const SETTINGS: [SettingToggle; 2] = [
    SettingToggle { label: "Notifications", initially_checked: true },
    SettingToggle { label: "Mode sombre", initially_checked: false },
];

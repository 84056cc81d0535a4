//! Moods offered by the "Météo du cerveau" widget.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// How the user's brain feels today
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Excellent,
    Bien,
    Neutre,
    #[serde(rename = "fatigue")]
    Fatigue,
}

impl Mood {
    /// All moods, in display order
    pub const ALL: [Mood; 4] = [Mood::Excellent, Mood::Bien, Mood::Neutre, Mood::Fatigue];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Excellent => "Excellent",
            Mood::Bien => "Bien",
            Mood::Neutre => "Neutre",
            Mood::Fatigue => "Fatigué",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Excellent => "😊",
            Mood::Bien => "🙂",
            Mood::Neutre => "😐",
            Mood::Fatigue => "😕",
        }
    }

    /// CSS class carrying the mood's accent color
    pub fn color_class(&self) -> &'static str {
        match self {
            Mood::Excellent => "mood-excellent",
            Mood::Bien => "mood-good",
            Mood::Neutre => "mood-neutral",
            Mood::Fatigue => "mood-tired",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase();
        match label.as_str() {
            "excellent" => Ok(Mood::Excellent),
            "bien" => Ok(Mood::Bien),
            "neutre" => Ok(Mood::Neutre),
            "fatigué" | "fatigue" => Ok(Mood::Fatigue),
            _ => Err(DashboardError::UnknownMood(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_labels() {
        assert_eq!(Mood::Excellent.label(), "Excellent");
        assert_eq!(Mood::Bien.label(), "Bien");
        assert_eq!(Mood::Neutre.label(), "Neutre");
        assert_eq!(Mood::Fatigue.label(), "Fatigué");
    }

    #[test]
    fn color_classes_are_distinct() {
        let mut classes: Vec<&str> = Mood::ALL.iter().map(Mood::color_class).collect();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), 4);
    }

    #[test]
    fn parse_labels() {
        for mood in Mood::ALL {
            assert_eq!(mood.label().parse::<Mood>(), Ok(mood));
        }
        assert_eq!("FATIGUE".parse::<Mood>(), Ok(Mood::Fatigue));
        assert_eq!(
            "Joyeux".parse::<Mood>(),
            Err(DashboardError::UnknownMood("Joyeux".to_string()))
        );
    }

    #[test]
    fn serde_identifier() {
        assert_eq!(serde_json::to_string(&Mood::Fatigue).unwrap(), "\"fatigue\"");
        let mood: Mood = serde_json::from_str("\"bien\"").unwrap();
        assert_eq!(mood, Mood::Bien);
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietPreference {
    #[default]
    Balanced,
    #[serde(rename = "High protein")]
    HighProtein,
    #[serde(rename = "Low carb")]
    LowCarb,
    #[serde(rename = "Fibre focused")]
    FibreFocused,
}

impl DietPreference {
    pub const ALL: [DietPreference; 4] = [
        DietPreference::Balanced,
        DietPreference::HighProtein,
        DietPreference::LowCarb,
        DietPreference::FibreFocused,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DietPreference::Balanced => "Balanced",
            DietPreference::HighProtein => "High protein",
            DietPreference::LowCarb => "Low carb",
            DietPreference::FibreFocused => "Fibre focused",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|diet| diet.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for DietPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeAvailable {
    Quick,
    #[default]
    Normal,
}

impl TimeAvailable {
    pub const ALL: [TimeAvailable; 2] = [TimeAvailable::Quick, TimeAvailable::Normal];

    pub fn label(&self) -> &'static str {
        match self {
            TimeAvailable::Quick => "Quick",
            TimeAvailable::Normal => "Normal",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|time| time.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for TimeAvailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Planner preferences kept on the client between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub diet: DietPreference,
    #[serde(rename = "lowUPF")]
    pub low_upf: bool,
    pub time: TimeAvailable,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            diet: DietPreference::Balanced,
            low_upf: true,
            time: TimeAvailable::Normal,
        }
    }
}

use crate::domain::preferences::entities::{DietPreference, Preferences, TimeAvailable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultLayout {
    /// Priority action, meals, shopping list and notes as separate sections.
    Sections,
    /// The plan payload pretty-printed as JSON.
    RawJson,
}

/// Describes one planner screen: which inputs it offers and how it shows results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    pub title: String,
    pub diet_options: Vec<String>,
    pub time_options: Vec<String>,
    pub default_diet: String,
    pub default_time: String,
    pub default_low_upf: bool,
    /// Load preferences on mount and save them on every change.
    pub persist_preferences: bool,
    /// Allow saving meals as favourites and send favourites with each request.
    pub offer_favourites: bool,
    pub result_layout: ResultLayout,
    /// Shown when the server rejects a request without an error message.
    pub server_error_fallback: String,
}

impl ViewConfig {
    /// The main planner with saved preferences and favourites.
    pub fn full() -> Self {
        let defaults = Preferences::default();

        Self {
            title: "HealthFlow".to_string(),
            diet_options: DietPreference::ALL
                .iter()
                .map(|d| d.label().to_string())
                .collect(),
            time_options: TimeAvailable::ALL
                .iter()
                .map(|t| t.label().to_string())
                .collect(),
            default_diet: defaults.diet.label().to_string(),
            default_time: defaults.time.label().to_string(),
            default_low_upf: defaults.low_upf,
            persist_preferences: true,
            offer_favourites: true,
            result_layout: ResultLayout::Sections,
            server_error_fallback: "Something went wrong".to_string(),
        }
    }

    /// The lightweight planner that shows the raw result.
    pub fn quick() -> Self {
        Self {
            title: "Create your plan".to_string(),
            diet_options: ["balanced", "high_protein", "low_carb", "high_fibre", "low_fibre"]
                .into_iter()
                .map(String::from)
                .collect(),
            time_options: ["15 minutes", "30 minutes", "45 minutes", "60 minutes"]
                .into_iter()
                .map(String::from)
                .collect(),
            default_diet: "balanced".to_string(),
            default_time: "30 minutes".to_string(),
            default_low_upf: true,
            persist_preferences: false,
            offer_favourites: false,
            result_layout: ResultLayout::RawJson,
            server_error_fallback: "Request failed".to_string(),
        }
    }

    pub fn accepts_diet(&self, diet: &str) -> bool {
        self.diet_options.iter().any(|d| d == diet)
    }

    pub fn accepts_time(&self, time: &str) -> bool {
        self.time_options.iter().any(|t| t == time)
    }
}

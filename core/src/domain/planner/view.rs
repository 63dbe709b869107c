use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    plan::{
        entities::{Meal, Plan, ShoppingList},
        value_objects::{GeneratePlanInput, has_enough_text},
    },
    planner::{
        ports::{Clipboard, PlannerApi, PlannerError, Printer},
        render::render_plan,
        view_config::{ResultLayout, ViewConfig},
    },
    preferences::{
        entities::{DietPreference, Preferences, TimeAvailable},
        ports::KeyValueStore,
        services::PreferenceStore,
    },
};

pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

/// Everything the planner screen shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub text: String,
    pub diet: String,
    pub low_upf: bool,
    pub time: String,
    pub favourites: Vec<String>,
    pub plan: Option<Value>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was sent: a request is in flight or the text is too short.
    Skipped,
    Planned,
    Failed,
}

/// Headless planner screen driven by a [`ViewConfig`].
pub struct PlannerView<A, S>
where
    A: PlannerApi,
    S: KeyValueStore,
{
    config: ViewConfig,
    api: A,
    preferences: PreferenceStore<S>,
    state: ViewState,
}

impl<A, S> PlannerView<A, S>
where
    A: PlannerApi,
    S: KeyValueStore,
{
    pub fn new(config: ViewConfig, api: A, store: S) -> Self {
        let state = ViewState {
            diet: config.default_diet.clone(),
            low_upf: config.default_low_upf,
            time: config.default_time.clone(),
            ..Default::default()
        };

        Self {
            config,
            api,
            preferences: PreferenceStore::new(store),
            state,
        }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Loads saved preferences and favourites.
    pub fn mount(&mut self) {
        if self.config.persist_preferences {
            let preferences = self.preferences.load();
            self.state.diet = preferences.diet.label().to_string();
            self.state.low_upf = preferences.low_upf;
            self.state.time = preferences.time.label().to_string();
        }

        if self.config.offer_favourites {
            self.state.favourites = self.preferences.load_favourites();
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.state.text = text.into();
    }

    pub fn set_diet(&mut self, diet: &str) -> Result<(), CoreError> {
        if !self.config.accepts_diet(diet) {
            return Err(CoreError::Validation(format!("unknown diet option: {diet}")));
        }
        self.state.diet = diet.to_string();
        self.save_preferences();
        Ok(())
    }

    pub fn set_low_upf(&mut self, low_upf: bool) {
        self.state.low_upf = low_upf;
        self.save_preferences();
    }

    pub fn set_time(&mut self, time: &str) -> Result<(), CoreError> {
        if !self.config.accepts_time(time) {
            return Err(CoreError::Validation(format!("unknown time option: {time}")));
        }
        self.state.time = time.to_string();
        self.save_preferences();
        Ok(())
    }

    fn save_preferences(&self) {
        if !self.config.persist_preferences {
            return;
        }

        let preferences = Preferences {
            diet: DietPreference::from_label(&self.state.diet).unwrap_or_default(),
            low_upf: self.state.low_upf,
            time: TimeAvailable::from_label(&self.state.time).unwrap_or_default(),
        };

        if let Err(e) = self.preferences.save(&preferences) {
            warn!(error = %e, "Failed to save preferences");
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.state.loading && has_enough_text(&self.state.text)
    }

    fn request(&self) -> GeneratePlanInput {
        GeneratePlanInput {
            text: self.state.text.clone(),
            diet: Some(self.state.diet.clone()),
            low_upf: Some(self.state.low_upf),
            time: Some(self.state.time.clone()),
            favourites: if self.config.offer_favourites {
                self.state.favourites.clone()
            } else {
                Vec::new()
            },
        }
    }

    /// Sends the current input to the plan endpoint and replaces the shown plan.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.can_submit() {
            return SubmitOutcome::Skipped;
        }

        self.state.loading = true;
        self.state.error = None;
        self.state.plan = None;

        let result = self.api.create_plan(self.request()).await;
        self.state.loading = false;

        match result {
            Ok(plan) => {
                self.state.plan = Some(plan);
                SubmitOutcome::Planned
            }
            Err(e) => {
                debug!(error = %e, "Plan request failed");
                let message = match e {
                    PlannerError::Server {
                        message: Some(message),
                        ..
                    } if !message.is_empty() => message,
                    PlannerError::Server { .. } => self.config.server_error_fallback.clone(),
                    PlannerError::Transport(_) => FALLBACK_ERROR_MESSAGE.to_string(),
                };
                self.state.error = Some(message);
                SubmitOutcome::Failed
            }
        }
    }

    /// The shown plan as a typed value, if it has the expected shape.
    pub fn plan(&self) -> Option<Plan> {
        self.state
            .plan
            .as_ref()
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    pub fn meals(&self) -> Vec<Meal> {
        self.plan().map(|plan| plan.meals).unwrap_or_default()
    }

    pub fn is_favourite(&self, meal: &Meal) -> bool {
        self.state.favourites.contains(&meal.favourite_key())
    }

    pub fn shopping_list_text(&self) -> Option<String> {
        let list = self.state.plan.as_ref()?.get("shopping_list")?;
        Some(ShoppingList::from_value(list)?.to_text())
    }

    pub fn rendered_plan(&self) -> Option<String> {
        let value = self.state.plan.as_ref()?;

        match (self.config.result_layout, self.plan()) {
            (ResultLayout::Sections, Some(plan)) => Some(render_plan(&plan, &self.state.favourites)),
            _ => serde_json::to_string_pretty(value).ok(),
        }
    }

    /// Copies the shopping list text. Returns `false` when there is nothing to copy.
    pub fn copy_shopping_list<C: Clipboard>(&self, clipboard: &C) -> Result<bool, CoreError> {
        let Some(text) = self.shopping_list_text() else {
            return Ok(false);
        };

        clipboard.write_text(&text)?;
        Ok(true)
    }

    pub fn print_plan<P: Printer>(&self, printer: &P) -> Result<bool, CoreError> {
        let Some(document) = self.rendered_plan() else {
            return Ok(false);
        };

        printer.print(&document)?;
        Ok(true)
    }

    /// Saves or unsaves a meal. Returns whether the meal is now a favourite.
    pub fn toggle_favourite(&mut self, meal: &Meal) -> Result<bool, CoreError> {
        self.toggle_favourite_key(&meal.favourite_key())
    }

    pub fn toggle_favourite_key(&mut self, key: &str) -> Result<bool, CoreError> {
        if !self.config.offer_favourites {
            return Err(CoreError::Validation(
                "favourites are not available in this view".to_string(),
            ));
        }

        self.state.favourites = self.preferences.toggle_favourite(key)?;
        Ok(self.state.favourites.iter().any(|f| f == key))
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::VecDeque,
        future::Future,
        sync::{Arc, Mutex},
    };

    use serde_json::json;

    use super::*;
    use crate::{
        domain::{
            plan::test_support::sample_plan_json,
            planner::ports::{MockClipboard, MockPrinter},
            preferences::services::FAVS_KEY,
        },
        infrastructure::key_value::InMemoryKeyValueStore,
    };

    #[derive(Clone, Default)]
    struct FakePlannerApi {
        responses: Arc<Mutex<VecDeque<Result<Value, PlannerError>>>>,
        requests: Arc<Mutex<Vec<GeneratePlanInput>>>,
    }

    impl FakePlannerApi {
        fn with(responses: Vec<Result<Value, PlannerError>>) -> Self {
            Self {
                responses: Arc::new(Mutex::new(responses.into())),
                ..Default::default()
            }
        }

        fn requests(&self) -> Vec<GeneratePlanInput> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl PlannerApi for FakePlannerApi {
        fn create_plan(
            &self,
            request: GeneratePlanInput,
        ) -> impl Future<Output = Result<Value, PlannerError>> + Send {
            self.requests.lock().unwrap().push(request);
            let next = self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(PlannerError::Transport("no response".to_string())));
            async move { next }
        }
    }

    fn full_view(
        api: FakePlannerApi,
        store: InMemoryKeyValueStore,
    ) -> PlannerView<FakePlannerApi, InMemoryKeyValueStore> {
        let mut view = PlannerView::new(ViewConfig::full(), api, store);
        view.mount();
        view
    }

    #[test]
    fn test_mount_loads_defaults() {
        let view = full_view(FakePlannerApi::default(), InMemoryKeyValueStore::new());

        assert_eq!(view.state().diet, "Balanced");
        assert!(view.state().low_upf);
        assert_eq!(view.state().time, "Normal");
        assert!(view.state().favourites.is_empty());
    }

    #[test]
    fn test_preference_changes_persist_across_mounts() {
        let store = InMemoryKeyValueStore::new();
        let mut view = full_view(FakePlannerApi::default(), store.clone());

        view.set_diet("Low carb").unwrap();
        view.set_low_upf(false);
        view.set_time("Quick").unwrap();

        let remounted = full_view(FakePlannerApi::default(), store);
        assert_eq!(remounted.state().diet, "Low carb");
        assert!(!remounted.state().low_upf);
        assert_eq!(remounted.state().time, "Quick");
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let mut view = full_view(FakePlannerApi::default(), InMemoryKeyValueStore::new());
        assert!(view.set_diet("Keto").is_err());
        assert_eq!(view.state().diet, "Balanced");
    }

    #[tokio::test]
    async fn test_short_text_is_not_submitted() {
        let api = FakePlannerApi::default();
        let mut view = full_view(api.clone(), InMemoryKeyValueStore::new());
        view.set_text(" ok ");

        assert!(!view.can_submit());
        assert_eq!(view.submit().await, SubmitOutcome::Skipped);
        assert!(api.requests().is_empty());
    }

    #[tokio::test]
    async fn test_submit_sends_preferences_and_favourites() {
        let api = FakePlannerApi::with(vec![Ok(sample_plan_json())]);
        let store = InMemoryKeyValueStore::new();
        store
            .set(FAVS_KEY, "[\"lunch: Soup\"]".to_string())
            .unwrap();
        let mut view = full_view(api.clone(), store);
        view.set_text("Gym later, quick meals");

        assert_eq!(view.submit().await, SubmitOutcome::Planned);

        assert_eq!(
            api.requests(),
            vec![GeneratePlanInput {
                text: "Gym later, quick meals".to_string(),
                diet: Some("Balanced".to_string()),
                low_upf: Some(true),
                time: Some("Normal".to_string()),
                favourites: vec!["lunch: Soup".to_string()],
            }]
        );
        assert!(!view.state().loading);
        assert_eq!(view.state().plan, Some(sample_plan_json()));
        assert_eq!(view.meals().len(), 2);
    }

    #[tokio::test]
    async fn test_failure_shows_server_message_and_clears_plan() {
        let api = FakePlannerApi::with(vec![
            Ok(sample_plan_json()),
            Err(PlannerError::Server {
                status: 502,
                message: Some("AI returned invalid JSON. Please try again.".to_string()),
            }),
        ]);
        let mut view = full_view(api, InMemoryKeyValueStore::new());
        view.set_text("Busy day");

        view.submit().await;
        assert_eq!(view.submit().await, SubmitOutcome::Failed);

        assert_eq!(view.state().plan, None);
        assert_eq!(
            view.state().error.as_deref(),
            Some("AI returned invalid JSON. Please try again.")
        );
    }

    #[tokio::test]
    async fn test_failure_without_message_uses_fallback() {
        let api = FakePlannerApi::with(vec![Err(PlannerError::Transport(
            "connection refused".to_string(),
        ))]);
        let mut view = full_view(api, InMemoryKeyValueStore::new());
        view.set_text("Busy day");

        view.submit().await;

        assert_eq!(view.state().error.as_deref(), Some(FALLBACK_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn test_server_error_without_message_uses_view_fallback() {
        let api = FakePlannerApi::with(vec![
            Err(PlannerError::Server {
                status: 500,
                message: None,
            }),
            Err(PlannerError::Server {
                status: 500,
                message: None,
            }),
        ]);
        let mut full = full_view(api.clone(), InMemoryKeyValueStore::new());
        full.set_text("Busy day");
        full.submit().await;
        assert_eq!(full.state().error.as_deref(), Some("Something went wrong"));

        let mut quick = PlannerView::new(ViewConfig::quick(), api, InMemoryKeyValueStore::new());
        quick.mount();
        quick.set_text("Busy day");
        quick.submit().await;
        assert_eq!(quick.state().error.as_deref(), Some("Request failed"));
    }

    #[tokio::test]
    async fn test_partial_shopping_list_is_still_copied() {
        let api = FakePlannerApi::with(vec![Ok(json!({
            "shopping_list": {"produce": ["Apples"], "dairy": ["Milk"]}
        }))]);
        let mut view = PlannerView::new(ViewConfig::quick(), api, InMemoryKeyValueStore::new());
        view.mount();
        view.set_text("Busy day");
        view.submit().await;

        assert_eq!(
            view.shopping_list_text().as_deref(),
            Some("Produce:\n- Apples\n\nDairy:\n- Milk")
        );

        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .withf(|text| text.to_string() == "Produce:\n- Apples\n\nDairy:\n- Milk")
            .times(1)
            .returning(|_| Ok(()));
        assert!(view.copy_shopping_list(&clipboard).unwrap());
    }

    #[tokio::test]
    async fn test_success_clears_previous_error() {
        let api = FakePlannerApi::with(vec![
            Err(PlannerError::Server {
                status: 400,
                message: Some("Missing text".to_string()),
            }),
            Ok(sample_plan_json()),
        ]);
        let mut view = full_view(api, InMemoryKeyValueStore::new());
        view.set_text("Busy day");

        view.submit().await;
        view.submit().await;

        assert_eq!(view.state().error, None);
        assert!(view.state().plan.is_some());
    }

    #[tokio::test]
    async fn test_copy_shopping_list() {
        let api = FakePlannerApi::with(vec![Ok(sample_plan_json())]);
        let mut view = full_view(api, InMemoryKeyValueStore::new());
        view.set_text("Busy day");
        view.submit().await;

        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .withf(|text| {
                text.to_string() == "Produce:\n- Berries\n- Carrot\n- Onion\n\nDairy:\n- Milk\n\nPantry:\n- Oats\n- Red lentils"
            })
            .times(1)
            .returning(|_| Ok(()));

        assert_eq!(view.copy_shopping_list(&clipboard), Ok(true));
    }

    #[test]
    fn test_copy_without_plan_does_nothing() {
        let view = full_view(FakePlannerApi::default(), InMemoryKeyValueStore::new());
        let clipboard = MockClipboard::new();

        assert_eq!(view.copy_shopping_list(&clipboard), Ok(false));
    }

    #[tokio::test]
    async fn test_print_sends_rendered_plan() {
        let api = FakePlannerApi::with(vec![Ok(sample_plan_json())]);
        let mut view = full_view(api, InMemoryKeyValueStore::new());
        view.set_text("Busy day");
        view.submit().await;

        let mut printer = MockPrinter::new();
        printer
            .expect_print()
            .withf(|document| document.starts_with("Do This First"))
            .times(1)
            .returning(|_| Ok(()));

        assert_eq!(view.print_plan(&printer), Ok(true));
    }

    #[tokio::test]
    async fn test_toggle_favourite_updates_state_and_store() {
        let api = FakePlannerApi::with(vec![Ok(sample_plan_json())]);
        let store = InMemoryKeyValueStore::new();
        let mut view = full_view(api, store.clone());
        view.set_text("Busy day");
        view.submit().await;

        let soup = view.meals().remove(1);
        assert_eq!(view.toggle_favourite(&soup), Ok(true));
        assert!(view.is_favourite(&soup));
        assert_eq!(store.get(FAVS_KEY), Some("[\"lunch: Lentil soup\"]".to_string()));

        assert_eq!(view.toggle_favourite(&soup), Ok(false));
        assert!(!view.is_favourite(&soup));
    }

    #[tokio::test]
    async fn test_quick_view_shows_raw_json_without_favourites() {
        let api = FakePlannerApi::with(vec![Ok(json!({ "a": 1 }))]);
        let store = InMemoryKeyValueStore::new();
        store
            .set(FAVS_KEY, "[\"lunch: Soup\"]".to_string())
            .unwrap();
        let mut view = PlannerView::new(ViewConfig::quick(), api.clone(), store);
        view.mount();
        view.set_text("High protein, quick meals");

        view.submit().await;

        let request = api.requests().remove(0);
        assert_eq!(request.diet.as_deref(), Some("balanced"));
        assert_eq!(request.time.as_deref(), Some("30 minutes"));
        assert!(request.favourites.is_empty());
        assert_eq!(view.rendered_plan(), Some("{\n  \"a\": 1\n}".to_string()));
        assert!(view.toggle_favourite_key("lunch: Soup").is_err());
    }
}

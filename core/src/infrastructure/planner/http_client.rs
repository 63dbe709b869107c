use reqwest::Client;
use serde_json::Value;

use crate::domain::{
    plan::value_objects::GeneratePlanInput,
    planner::ports::{PlannerApi, PlannerError},
};

pub const PLAN_ENDPOINT_PATH: &str = "/api/healthflow";

/// Calls the HealthFlow plan endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPlannerApi {
    endpoint: String,
    client: Client,
}

impl HttpPlannerApi {
    /// `base_url` is the server root, including any root path.
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), PLAN_ENDPOINT_PATH),
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PlannerApi for HttpPlannerApi {
    async fn create_plan(&self, request: GeneratePlanInput) -> Result<Value, PlannerError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Plan request failed: {}", e);
                PlannerError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let data: Value = serde_json::from_str(&body).unwrap_or(Value::Null);

        if !status.is_success() {
            return Err(PlannerError::Server {
                status: status.as_u16(),
                message: data
                    .get("error")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            });
        }

        if data.is_null() {
            return Err(PlannerError::Transport(
                "server returned a non-JSON body".to_string(),
            ));
        }

        Ok(data)
    }
}

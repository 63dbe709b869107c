use axum::extract::State;
use healthflow_core::domain::plan::{entities::Plan, ports::PlanService};
use serde_json::Value;

use crate::application::http::{
    plan::validators::GeneratePlanRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/healthflow",
    tag = "plan",
    summary = "Generate a daily plan",
    description = "Builds a prompt from the user's notes and preferences, asks the model for a plan and returns the extracted JSON object verbatim",
    responses(
        (status = 200, body = Plan),
        (status = 400, body = ApiErrorResponse, description = "Missing text or malformed body"),
        (status = 502, body = ApiErrorResponse, description = "The model failed or never returned a usable plan")
    ),
    request_body = GeneratePlanRequest
)]
pub async fn generate_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GeneratePlanRequest>,
) -> Result<Response<Value>, ApiError> {
    let generated = state
        .service
        .generate_plan(payload.into())
        .await
        .map_err(ApiError::from)?;

    tracing::debug!(attempts = generated.attempts, "Plan generated");

    Ok(Response::OK(generated.payload))
}

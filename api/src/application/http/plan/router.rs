use super::handlers::generate_plan::{__path_generate_plan, generate_plan};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_plan))]
pub struct PlanApiDoc;

pub fn plan_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/healthflow", state.args.server.root_path),
        post(generate_plan),
    )
}

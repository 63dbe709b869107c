use crate::application::http::plan::router::PlanApiDoc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HealthFlow API"
    ),
    nest(
        (path = "/api", api = PlanApiDoc)
    )
)]
pub struct ApiDoc;

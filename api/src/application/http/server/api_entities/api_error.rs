use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use healthflow_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";
pub const INVALID_JSON_MESSAGE: &str = "AI returned invalid JSON. Please try again.";
pub const UPSTREAM_UNAVAILABLE_MESSAGE: &str = "AI service is unavailable. Please try again.";

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    InternalServerError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(message) => ApiError::BadRequest(message),
            CoreError::ExtractionFailure { .. } => {
                ApiError::BadGateway(INVALID_JSON_MESSAGE.to_string())
            }
            CoreError::ExternalServiceError(_) => {
                ApiError::BadGateway(UPSTREAM_UNAVAILABLE_MESSAGE.to_string())
            }
            CoreError::StorageError(_) | CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ApiErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON extractor that also runs `validator` rules on the payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!("Rejected request body: {}", rejection.body_text());
            ApiError::BadRequest(INVALID_BODY_MESSAGE.to_string())
        })?;

        value.validate().map_err(|errors| {
            let message = errors
                .field_errors()
                .values()
                .flat_map(|field_errors| field_errors.iter())
                .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| INVALID_BODY_MESSAGE.to_string());
            ApiError::BadRequest(message)
        })?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_fixed_messages() {
        assert_eq!(
            ApiError::from(CoreError::Validation("Missing text".to_string())),
            ApiError::BadRequest("Missing text".to_string())
        );
        assert_eq!(
            ApiError::from(CoreError::ExtractionFailure { attempts: 2 }),
            ApiError::BadGateway(INVALID_JSON_MESSAGE.to_string())
        );
        assert_eq!(
            ApiError::from(CoreError::ExternalServiceError("401 invalid key sk-...".to_string())),
            ApiError::BadGateway(UPSTREAM_UNAVAILABLE_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::BadRequest(String::new()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::BadGateway(String::new()).status(),
            StatusCode::BAD_GATEWAY
        );
    }
}

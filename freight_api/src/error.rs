use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use freight_routing::RoutingError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
}

impl From<RoutingError> for ApiError {
    fn from(error: RoutingError) -> Self {
        match error {
            RoutingError::NoPathFound { .. } => ApiError::NotFound(error.to_string()),
            RoutingError::InvalidQuery(reason) => ApiError::BadRequest(reason.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
        }
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use news_core::Error;
use tracing::{error, warn};

pub const INVALID_PARAMETERS: &str = "Invalid request parameters";

/// Error returned by handlers. Caller mistakes become 400 with a fixed body,
/// everything else a 500.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.0.is_client_error() {
            warn!("Rejected request: {}", self.0);
            return (StatusCode::BAD_REQUEST, INVALID_PARAMETERS).into_response();
        }
        error!("Request failed: {}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

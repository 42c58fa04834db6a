use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fireguard_api_types::ErrorResponse;
use fireguard_stations::{StationError, StationIdentifier};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Well-formed request that cannot be answered, e.g. no station data
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("station not found: {0}")]
    StationNotFound(StationIdentifier),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::StationNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StationError> for ApiError {
    fn from(value: StationError) -> Self {
        match value {
            StationError::InvalidInput(message) => ApiError::InvalidInput(message),
            StationError::StationNotFound(id) => ApiError::StationNotFound(id),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(value: QueryRejection) -> Self {
        ApiError::BadRequest(value.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("intent {0} not supported")]
    UnsupportedIntent(String),

    #[error("invocation source {0} not supported")]
    UnsupportedPhase(String),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::MalformedInput(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedIntent(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::UnsupportedPhase(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

/// Error response with an explicit status and JSON body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiError {
    pub fn new(status: StatusCode, body: Value) -> Self { Self { status, body } }

    /// `{"error": msg}`
    pub fn error(status: StatusCode, msg: &str) -> Self { Self::new(status, json!({ "error": msg })) }

    /// `{"message": msg}`
    pub fn message(status: StatusCode, msg: &str) -> Self { Self::new(status, json!({ "message": msg })) }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// The one error a login attempt can produce.
///
/// Anything else (malformed JSON, wrong method, network trouble) is left
/// to axum's default rejections.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing username")]
    MissingUsername,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingUsername => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "message": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

use crate::error::{AppError, Result};
use axum::Json;
use mockauth_protocol::{mock_token, TokenResponse};
use serde_json::Value;

/// Handle `POST /login`.
///
/// The body is inspected as raw JSON rather than a typed struct so that
/// loosely-typed clients get the lenient treatment they expect: any
/// truthy `username` earns a token, anything falsy is rejected.
pub async fn login(Json(body): Json<Value>) -> Result<Json<TokenResponse>> {
    let username = body
        .get("username")
        .filter(|value| is_truthy(value))
        .ok_or(AppError::MissingUsername)?;

    Ok(Json(TokenResponse {
        access_token: mock_token(&username_text(username)),
    }))
}

/// Truthiness as loosely-typed clients expect it: `null`, `false`,
/// numeric zero and `""` all count as missing.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render the username as it appears inside the token: strings verbatim,
/// any other JSON value in its compact form.
fn username_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

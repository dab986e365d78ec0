use serde::{Deserialize, Serialize};

/// Where the login endpoint lives.
pub const LOGIN_PATH: &str = "/login";

/// Prefix of every token the mock server issues.
pub const TOKEN_PREFIX: &str = "mock-token-for-";

/// Body a well-formed client sends to the login endpoint.
///
/// The server itself is more lenient (it inspects the raw JSON so that
/// loosely-typed clients get the same treatment), but this is the shape
/// dependent code should speak.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
}

/// Successful login: a synthetic bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Rejected login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Format the synthetic token issued for `username`.
///
/// The token is deterministic and carries no secret. It only exists so
/// that dependent frontends have a string to stuff into an
/// `Authorization` header during development.
pub fn mock_token(username: &str) -> String {
    format!("{TOKEN_PREFIX}{username}")
}

//! Shared wire types for the mock login service.
//!
//! Both the server and any test or development client that talks to it
//! depend on this crate, so the request/response shapes are written down
//! exactly once.

mod types;

pub use types::{mock_token, ErrorResponse, LoginRequest, TokenResponse, LOGIN_PATH, TOKEN_PREFIX};

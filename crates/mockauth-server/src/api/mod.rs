mod auth;

use axum::{routing::post, Router};
use mockauth_protocol::LOGIN_PATH;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router {
    Router::new()
        // Auth routes
        .route(LOGIN_PATH, post(auth::login))
        .layer(TraceLayer::new_for_http())
}

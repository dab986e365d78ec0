//! Mock Login Server Library
//!
//! This module exposes the server components for testing and embedding.

pub mod api;
pub mod config;
pub mod error;

/// Create and configure the server application
pub fn create_app() -> axum::Router {
    api::create_router()
}

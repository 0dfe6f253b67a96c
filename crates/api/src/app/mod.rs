//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store wiring and the operations handlers call
//! - `routes/`: HTTP routes + handlers (one file per operation area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router around the given services.
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    routes::router()
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::request_logging)))
}

/// Build the router over a fresh in-memory cookbook (entrypoint used by `main.rs`).
pub fn build_default_app() -> Router {
    build_app(Arc::new(services::build_services()))
}

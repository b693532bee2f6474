//! HTTP API application wiring (axum router + service wiring).
//!
//! - `services.rs`: backend selection and process-scoped dependencies
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs
//! - `errors.rs`: consistent error responses

use std::path::PathBuf;
use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full application (public entrypoint used by `main.rs`).
pub async fn build_app() -> Router {
    let services = Arc::new(services::build_services().await);
    build_router(services)
}

/// Assemble the router around explicit dependencies.
///
/// Tests inject their own repository and notifier through `services`; the
/// static UI directory falls back to the in-repo assets.
pub fn build_router(services: Arc<services::AppServices>) -> Router {
    let static_dir = std::env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("crates/api/static"));

    Router::new()
        .merge(routes::router())
        .layer(Extension(services))
        .fallback_service(ServeDir::new(static_dir))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

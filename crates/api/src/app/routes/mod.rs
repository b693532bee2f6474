use axum::{routing::get, Router};

pub mod books;
pub mod system;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .merge(books::router())
}

//! Notifier service: accepts low-stock alerts and logs them.
//!
//! Stateless per request; nothing is persisted and repeated alerts for the
//! same book are not deduplicated.

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use bookstock_core::LowStockAlert;

pub fn build_app() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/notify", post(notify))
}

async fn health() -> StatusCode {
    StatusCode::OK
}

/// Log the alert and acknowledge.
///
/// Placeholder for real alerting (email, SMS, paging); for now the log line
/// is the notification.
async fn notify(Json(alert): Json<LowStockAlert>) -> (StatusCode, Json<serde_json::Value>) {
    tracing::info!(
        "Notification: Book {} (ID: {}) is running low. Remaining Quantity: {}",
        alert.title,
        alert.book_id,
        alert.remaining_quantity
    );

    (
        StatusCode::OK,
        Json(serde_json::json!({ "message": "Notification sent successfully" })),
    )
}

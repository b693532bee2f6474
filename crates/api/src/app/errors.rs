use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use bookstock_store::StoreError;

/// `{"message": ...}` body, used for 400/404 responses.
pub fn json_message(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "message": message.into(),
        })),
    )
        .into_response()
}

/// `{"message": ..., "error": ...}` body, used for 500 responses carrying
/// the underlying error text (demo-grade: no redaction).
pub fn json_error(
    status: StatusCode,
    message: impl Into<String>,
    detail: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "message": message.into(),
            "error": detail.into(),
        })),
    )
        .into_response()
}

/// Map a storage failure to a response; `context` is the operation-specific
/// message ("Error fetching books", "Error updating book", ...).
pub fn store_error_to_response(context: &'static str, err: StoreError) -> axum::response::Response {
    match err {
        StoreError::NotFound => json_message(StatusCode::NOT_FOUND, "Book not found"),
        other => json_error(StatusCode::INTERNAL_SERVER_ERROR, context, other.to_string()),
    }
}

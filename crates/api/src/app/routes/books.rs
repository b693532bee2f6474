use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use bookstock_core::LowStockAlert;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/book", get(list_books).post(create_book))
        .route(
            "/book/:id",
            get(get_book).put(update_book).delete(delete_book),
        )
}

pub async fn list_books(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.repo.list().await {
        Ok(books) => (StatusCode::OK, Json(books)).into_response(),
        Err(e) => errors::store_error_to_response("Error fetching books", e),
    }
}

pub async fn create_book(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::UpsertBookRequest>,
) -> axum::response::Response {
    match services.repo.insert(body.into()).await {
        Ok(book) => (StatusCode::CREATED, Json(book)).into_response(),
        Err(e) => errors::store_error_to_response("Error adding book", e),
    }
}

pub async fn get_book(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: i32 = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_message(StatusCode::BAD_REQUEST, "Invalid book ID"),
    };

    match services.repo.get(id).await {
        Ok(book) => (StatusCode::OK, Json(book)).into_response(),
        Err(e) => errors::store_error_to_response("Error fetching book", e),
    }
}

pub async fn update_book(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpsertBookRequest>,
) -> axum::response::Response {
    let id: i32 = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_message(StatusCode::BAD_REQUEST, "Invalid book ID"),
    };

    let book = match services.repo.update(id, body.into()).await {
        Ok(b) => b,
        Err(e) => return errors::store_error_to_response("Error updating book", e),
    };

    // Low-stock rule, evaluated on the updated row. The write above is
    // already committed; a failed delivery still fails the whole request
    // (known coupling, kept as specified).
    if book.is_low_stock() {
        let alert = LowStockAlert::for_book(&book);
        if let Err(e) = services.notifier.notify(&alert).await {
            tracing::warn!(book_id = book.id, error = %e, "low-stock notification failed");
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error updating book",
                e.to_string(),
            );
        }
        tracing::info!(
            book_id = book.id,
            remaining = book.quantity,
            "low-stock notification sent"
        );
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "message": "Book updated",
            "book": book,
        })),
    )
        .into_response()
}

pub async fn delete_book(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: i32 = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_message(StatusCode::BAD_REQUEST, "Invalid book ID"),
    };

    match services.repo.delete(id).await {
        Ok(book) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "Book deleted",
                "book": book,
            })),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response("Error deleting book", e),
    }
}

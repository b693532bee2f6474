use serde::Deserialize;

use bookstock_core::BookDraft;

/// Full book payload minus the id; request body for both create and
/// replace. No field-level validation happens here beyond structural
/// parsing; the storage layer enforces the rest.
#[derive(Debug, Deserialize)]
pub struct UpsertBookRequest {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: f64,
    pub quantity: i32,
    pub threshold: i32,
}

impl From<UpsertBookRequest> for BookDraft {
    fn from(req: UpsertBookRequest) -> Self {
        BookDraft {
            title: req.title,
            author: req.author,
            isbn: req.isbn,
            price: req.price,
            quantity: req.quantity,
            threshold: req.threshold,
        }
    }
}

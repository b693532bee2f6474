use serde::{Deserialize, Serialize};

/// A book as persisted in the `books` table.
///
/// `id` is assigned by the store on insertion and immutable afterward. All
/// six business fields are present on every create or replace; partial
/// updates do not exist in this system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: f64,
    pub quantity: i32,
    pub threshold: i32,
}

impl Book {
    /// The low-stock rule: stock has fallen strictly below the reorder
    /// trigger level. Evaluated on the post-update record.
    pub fn is_low_stock(&self) -> bool {
        self.quantity < self.threshold
    }
}

/// A full book payload minus the store-assigned id.
///
/// This is the request body for create and replace; the store turns it into
/// a [`Book`] by attaching an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: f64,
    pub quantity: i32,
    pub threshold: i32,
}

impl BookDraft {
    pub fn into_book(self, id: i32) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            price: self.price,
            quantity: self.quantity,
            threshold: self.threshold,
        }
    }
}

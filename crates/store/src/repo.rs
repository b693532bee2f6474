use async_trait::async_trait;

use bookstock_core::{Book, BookDraft};

use crate::error::StoreError;

/// Query surface of the book table.
///
/// Every mutating operation returns the affected row so callers never need a
/// follow-up read. `update` replaces all business fields; there is no
/// partial-update operation in this system.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All books, no filtering or paging.
    async fn list(&self) -> Result<Vec<Book>, StoreError>;

    /// A single book by id; `StoreError::NotFound` when no row matches.
    async fn get(&self, id: i32) -> Result<Book, StoreError>;

    /// Insert a new book and return it with the store-assigned id.
    async fn insert(&self, draft: BookDraft) -> Result<Book, StoreError>;

    /// Full-record replace; `StoreError::NotFound` when no row matches.
    async fn update(&self, id: i32, draft: BookDraft) -> Result<Book, StoreError>;

    /// Delete and return the removed row; `StoreError::NotFound` when no
    /// row matches.
    async fn delete(&self, id: i32) -> Result<Book, StoreError>;
}

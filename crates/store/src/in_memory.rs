//! In-memory book repository for development and black-box tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use bookstock_core::{Book, BookDraft};

use crate::error::StoreError;
use crate::repo::BookRepository;

#[derive(Debug, Default)]
pub struct InMemoryBookStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i32,
    books: BTreeMap<i32, Book>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookStore {
    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.books.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Book, StoreError> {
        let inner = self.inner.lock().unwrap();
        inner.books.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn insert(&self, draft: BookDraft) -> Result<Book, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let book = draft.into_book(inner.next_id);
        inner.books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn update(&self, id: i32, draft: BookDraft) -> Result<Book, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.books.contains_key(&id) {
            return Err(StoreError::NotFound);
        }
        let book = draft.into_book(id);
        inner.books.insert(id, book.clone());
        Ok(book)
    }

    async fn delete(&self, id: i32) -> Result<Book, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.books.remove(&id).ok_or(StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, quantity: i32) -> BookDraft {
        BookDraft {
            title: title.to_string(),
            author: "Anon".to_string(),
            isbn: "0000000000000".to_string(),
            price: 10.0,
            quantity,
            threshold: 5,
        }
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let store = InMemoryBookStore::new();
        let a = store.insert(draft("a", 1)).await.unwrap();
        let b = store.insert(draft("b", 2)).await.unwrap();
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn get_round_trips_inserted_book() {
        let store = InMemoryBookStore::new();
        let created = store.insert(draft("a", 1)).await.unwrap();
        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(created, fetched);
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let store = InMemoryBookStore::new();
        let created = store.insert(draft("a", 1)).await.unwrap();
        let updated = store.update(created.id, draft("b", 9)).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "b");
        assert_eq!(updated.quantity, 9);
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let store = InMemoryBookStore::new();
        assert!(matches!(store.get(99).await, Err(StoreError::NotFound)));
        assert!(matches!(store.delete(99).await, Err(StoreError::NotFound)));
        assert!(matches!(
            store.update(99, draft("x", 1)).await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn delete_removes_from_listing() {
        let store = InMemoryBookStore::new();
        let created = store.insert(draft("a", 1)).await.unwrap();
        store.delete(created.id).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }
}

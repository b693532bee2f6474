//! Postgres-backed book repository.
//!
//! Uses a lazily-created sqlx connection pool: the process starts even when
//! the database is unreachable, and individual queries surface the failure
//! per request. Every query is parameterized; no statement spans a
//! transaction with another.

use std::path::Path;

use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use bookstock_core::{Book, BookDraft};

use crate::config::DbConfig;
use crate::error::StoreError;
use crate::repo::BookRepository;

const MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct PostgresBookStore {
    pool: PgPool,
}

impl PostgresBookStore {
    /// Build the store with a lazy pool; no connection is attempted here.
    pub fn new(cfg: &DbConfig) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_lazy_with(cfg.connect_options());
        Self { pool }
    }

    /// Wrap an existing pool (integration tests, shared pools).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Apply the schema script (`init-db.sql`). Idempotent.
    pub async fn migrate(&self, migrations_dir: &Path) -> Result<(), StoreError> {
        self.apply_script(&migrations_dir.join("init-db.sql")).await?;
        tracing::info!("initial migration ran successfully");
        Ok(())
    }

    /// Apply the seed script (`populate-books.sql`). Idempotent: the script
    /// only inserts when the table is empty.
    pub async fn seed(&self, migrations_dir: &Path) -> Result<(), StoreError> {
        self.apply_script(&migrations_dir.join("populate-books.sql"))
            .await?;
        tracing::info!("book population ran successfully");
        Ok(())
    }

    async fn apply_script(&self, path: &Path) -> Result<(), StoreError> {
        let sql = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| StoreError::Script {
                path: path.to_path_buf(),
                source,
            })?;

        // Scripts may contain several statements; raw_sql runs them outside
        // the prepared-statement path.
        sqlx::raw_sql(&sql).execute(&self.pool).await?;
        Ok(())
    }
}

fn book_from_row(row: &PgRow) -> Result<Book, StoreError> {
    Ok(Book {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        author: row.try_get("author")?,
        isbn: row.try_get("isbn")?,
        price: row.try_get("price")?,
        quantity: row.try_get("quantity")?,
        threshold: row.try_get("threshold")?,
    })
}

#[async_trait]
impl BookRepository for PostgresBookStore {
    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, title, author, isbn, price, quantity, threshold FROM books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(book_from_row).collect()
    }

    async fn get(&self, id: i32) -> Result<Book, StoreError> {
        let row = sqlx::query(
            "SELECT id, title, author, isbn, price, quantity, threshold FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => book_from_row(&row),
            None => Err(StoreError::NotFound),
        }
    }

    async fn insert(&self, draft: BookDraft) -> Result<Book, StoreError> {
        // RETURNING hands back the generated id without a follow-up SELECT.
        let row = sqlx::query(
            "INSERT INTO books (title, author, isbn, price, quantity, threshold) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, title, author, isbn, price, quantity, threshold",
        )
        .bind(&draft.title)
        .bind(&draft.author)
        .bind(&draft.isbn)
        .bind(draft.price)
        .bind(draft.quantity)
        .bind(draft.threshold)
        .fetch_one(&self.pool)
        .await?;

        book_from_row(&row)
    }

    async fn update(&self, id: i32, draft: BookDraft) -> Result<Book, StoreError> {
        let row = sqlx::query(
            "UPDATE books \
             SET title = $1, author = $2, isbn = $3, price = $4, quantity = $5, threshold = $6 \
             WHERE id = $7 \
             RETURNING id, title, author, isbn, price, quantity, threshold",
        )
        .bind(&draft.title)
        .bind(&draft.author)
        .bind(&draft.isbn)
        .bind(draft.price)
        .bind(draft.quantity)
        .bind(draft.threshold)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => book_from_row(&row),
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, id: i32) -> Result<Book, StoreError> {
        let row = sqlx::query(
            "DELETE FROM books WHERE id = $1 \
             RETURNING id, title, author, isbn, price, quantity, threshold",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => book_from_row(&row),
            None => Err(StoreError::NotFound),
        }
    }
}

//! Persistence gateway: all reads and writes to the `books` table.
//!
//! The [`BookRepository`] trait is the seam between the HTTP layer and
//! storage. `PostgresBookStore` is the production implementation;
//! `InMemoryBookStore` backs development and black-box tests.

pub mod config;
pub mod error;
pub mod in_memory;
pub mod postgres;
pub mod repo;

pub use config::DbConfig;
pub use error::StoreError;
pub use in_memory::InMemoryBookStore;
pub use postgres::PostgresBookStore;
pub use repo::BookRepository;

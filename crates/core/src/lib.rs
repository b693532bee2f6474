//! `bookstock-core` — bookstore domain data contracts.
//!
//! This crate contains **pure domain** types (no infrastructure concerns):
//! the book record shared by the API and persistence layers, and the
//! low-stock alert payload exchanged with the notifier service.

pub mod alert;
pub mod book;

pub use alert::LowStockAlert;
pub use book::{Book, BookDraft};

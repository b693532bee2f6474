use serde::{Deserialize, Serialize};

use crate::book::Book;

/// Low-stock alert sent to the notifier service.
///
/// Transient: constructed at the moment an update leaves a book below its
/// threshold, posted once, never persisted or retried. Field names are
/// camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockAlert {
    pub book_id: i32,
    pub title: String,
    pub remaining_quantity: i32,
}

impl LowStockAlert {
    pub fn for_book(book: &Book) -> Self {
        Self {
            book_id: book.id,
            title: book.title.clone(),
            remaining_quantity: book.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_is_camel_case() {
        let alert = LowStockAlert {
            book_id: 7,
            title: "Dune".to_string(),
            remaining_quantity: 3,
        };
        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json["bookId"], 7);
        assert_eq!(json["title"], "Dune");
        assert_eq!(json["remainingQuantity"], 3);
    }

    #[test]
    fn built_from_post_update_record() {
        let book = Book {
            id: 7,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            isbn: "9780441013593".to_string(),
            price: 9.99,
            quantity: 3,
            threshold: 5,
        };
        let alert = LowStockAlert::for_book(&book);
        assert_eq!(alert.book_id, 7);
        assert_eq!(alert.remaining_quantity, 3);
    }
}

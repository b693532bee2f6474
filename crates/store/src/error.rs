use std::path::PathBuf;

use thiserror::Error;

/// Storage-layer error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row matched the requested id.
    #[error("book not found")]
    NotFound,

    /// The database rejected or failed the query.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bootstrap script could not be read from disk.
    #[error("failed to read {}: {source}", .path.display())]
    Script {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

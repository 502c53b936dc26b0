use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("{field} cannot be empty")]
    InvalidInput { field: String },

    #[error("A contact with phone number {phone} already exists")]
    DuplicatePhone { phone: String },

    #[error("No contact ids left to assign")]
    IdsExhausted,

    #[error("Malformed contact record at position {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    #[error("Could not save contacts to {}: {source}", .path.display())]
    PersistenceFailure {
        path: PathBuf,
        #[source]
        source: Box<BookError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type BookResult<T> = Result<T, BookError>;

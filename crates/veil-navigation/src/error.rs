//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("History I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("History serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

//! Custom error types for Pocketbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Pocketbook operations
#[derive(Error, Debug)]
pub enum PocketbookError {
    /// Position outside the ledger
    #[error("Index {index} is out of range (ledger has {len} transactions)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Pop or dequeue on an empty collection
    #[error("Nothing to take: the {0} is empty")]
    Empty(&'static str),

    /// Month number outside 1-12
    #[error("Invalid month {0}: expected a number from 1 to 12")]
    InvalidMonth(u32),

    /// The budget already holds this transaction
    #[error("Transaction already committed: {0}")]
    AlreadyCommitted(String),

    /// Rollback of a transaction the budget never saw (or already rolled back)
    #[error("Transaction is not committed: {0}")]
    NotCommitted(String),

    /// The undo history pointed at a transaction the ledger no longer holds
    #[error("Undo failed, transaction {0} not found in ledger")]
    UndoTargetMissing(String),

    /// The same transaction appears twice in a bulk load
    #[error("Duplicate transaction in load: {0}")]
    DuplicateTransaction(String),

    /// A budget total would leave the representable range of cents
    #[error("Amount overflow committing transaction {0}")]
    AmountOverflow(String),

    /// Draining the pending queue stopped partway
    #[error("Processing stopped after {processed} bill(s) at {id}: {source}")]
    QueueDrainFailed {
        processed: usize,
        id: String,
        #[source]
        source: Box<PocketbookError>,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PocketbookError {
    /// Check if this is a pop/dequeue on an empty collection
    pub fn is_empty_collection(&self) -> bool {
        matches!(self, Self::Empty(_))
    }

    /// Check if this is an out-of-range position
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for PocketbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PocketbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for PocketbookError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for Pocketbook operations
pub type PocketbookResult<T> = Result<T, PocketbookError>;

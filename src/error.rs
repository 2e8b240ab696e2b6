//! Typed errors for store operations and persistence.
//!
//! Absence is never an error in this crate: lookups return `Option`
//! and removals report a `bool`. The variants here cover invalid
//! caller input and storage failures, none of which are fatal to the
//! process.

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the stores, the service facade, and persistence.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A name that must carry text was empty or all whitespace.
    #[error("{field} must not be blank")]
    BlankField { field: &'static str },

    /// Increment or take amount below one.
    #[error("amount must be at least 1, got {amount}")]
    NonPositiveAmount { amount: i64 },

    /// Quantity below zero.
    #[error("quantity must not be negative, got {quantity}")]
    NegativeQuantity { quantity: i64 },

    /// More stock requested than is on hand.
    #[error("insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Rename target already names another item.
    #[error("an item named '{name}' already exists")]
    DuplicateName { name: String },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Failure in the embedded database.
    #[error("storage error: {0}")]
    Storage(#[from] redb::Error),

    /// A record could not be encoded for storage.
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),

    /// IO error with context.
    #[error("IO error in {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Whether this error was caused by invalid caller input rather
    /// than the environment.
    ///
    /// Collaborators exposing the service over a request/response
    /// boundary map these to client errors and everything else to
    /// server errors.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::BlankField { .. }
                | Self::NonPositiveAmount { .. }
                | Self::NegativeQuantity { .. }
                | Self::InsufficientStock { .. }
                | Self::DuplicateName { .. }
        )
    }
}

impl From<redb::DatabaseError> for Error {
    fn from(err: redb::DatabaseError) -> Self {
        Self::Storage(err.into())
    }
}

impl From<redb::TransactionError> for Error {
    fn from(err: redb::TransactionError) -> Self {
        Self::Storage(err.into())
    }
}

impl From<redb::TableError> for Error {
    fn from(err: redb::TableError) -> Self {
        Self::Storage(err.into())
    }
}

impl From<redb::StorageError> for Error {
    fn from(err: redb::StorageError) -> Self {
        Self::Storage(err.into())
    }
}

impl From<redb::CommitError> for Error {
    fn from(err: redb::CommitError) -> Self {
        Self::Storage(err.into())
    }
}

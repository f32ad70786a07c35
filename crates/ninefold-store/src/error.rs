//! Errors raised by the persistence gateway.

use derive_more::{Display, Error};

/// Error raised by a [`BoardStore`](crate::BoardStore) backend.
///
/// Database writes roll back before surfacing an error, so a failed write
/// never leaves a partially persisted board behind.
#[derive(Debug, Display, Error)]
pub enum StoreError {
    /// A board was written under an empty name.
    #[display("board name must not be empty")]
    EmptyName,

    /// No stored board exists under the requested name.
    #[display("no saved board named {name:?}")]
    NotFound {
        /// The requested name.
        #[error(not(source))]
        name: String,
    },

    /// The underlying file or directory could not be accessed.
    #[display("i/o error accessing the store: {source}")]
    Io {
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// A stored payload could not be encoded or decoded.
    #[display("malformed board payload: {source}")]
    Codec {
        /// The underlying serialization failure.
        source: serde_json::Error,
    },

    /// The database rejected an operation.
    #[display("database error: {source}")]
    Database {
        /// The underlying database failure.
        source: rusqlite::Error,
    },

    /// A stored board decoded cleanly but violates the cell-value range.
    #[display("stored board {name:?} is corrupted")]
    Corrupt {
        /// Name of the offending board.
        #[error(not(source))]
        name: String,
    },
}

impl From<std::io::Error> for StoreError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(source: serde_json::Error) -> Self {
        Self::Codec { source }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(source: rusqlite::Error) -> Self {
        Self::Database { source }
    }
}

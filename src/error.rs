//! Error types for catalog helpers

use thiserror::Error;

/// Errors that can occur while validating identifiers or querying the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A character outside the allowed identifier set was found
    #[error("Bad Symbol: '{symbol}'.")]
    InvalidIdentifier { symbol: char },

    #[error("Connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// The server rejected preparation or execution of the statement
    #[error("Query error: {0}")]
    Query(#[source] sqlx::Error),

    /// A row came back but could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[source] sqlx::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CatalogError {
    pub fn invalid_identifier(symbol: char) -> Self {
        Self::InvalidIdentifier { symbol }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Whether the failure happened below the statement level, e.g. a dropped
    /// socket or an exhausted pool.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::Connection(err),
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::TypeNotFound { .. }
            | sqlx::Error::RowNotFound => Self::Decode(err),
            _ => Self::Query(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

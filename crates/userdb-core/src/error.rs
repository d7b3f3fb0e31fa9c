//! Error type shared by every userdb crate.

use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for userdb.
///
/// Driver failures are carried as-is in [`DbError::Driver`]: the display
/// text and source chain are the driver's own, and callers can match on the
/// inner [`sqlx::Error`] directly.
#[derive(Error, Debug)]
pub enum DbError {
    /// Error reported by the database driver, unaltered.
    #[error(transparent)]
    Driver(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DbError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Driver(sqlx::Error::RowNotFound) => "ROW_NOT_FOUND",
            Self::Driver(_) => "DRIVER_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// True when a single-row query matched nothing.
    #[must_use]
    pub const fn is_row_not_found(&self) -> bool {
        matches!(self, Self::Driver(sqlx::Error::RowNotFound))
    }

    /// Returns the driver error, if this is one.
    #[must_use]
    pub const fn as_driver(&self) -> Option<&sqlx::Error> {
        match self {
            Self::Driver(err) => Some(err),
            _ => None,
        }
    }
}

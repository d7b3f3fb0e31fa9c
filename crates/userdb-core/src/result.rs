//! Result type aliases for userdb.

use crate::DbError;

/// A specialized `Result` type for userdb operations.
pub type DbResult<T> = Result<T, DbError>;

//! The seam between the repository and the database driver.
//!
//! [`DatabaseHandle`] is what [`crate::UserRepositoryImpl`] talks to. The
//! production implementation is [`crate::DatabasePool`]; unit tests mock it.

use crate::statement::Statement;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use userdb_core::{DbResult, Interface, User, UserId};

/// Driver report for a write statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecOutcome {
    pub rows_affected: u64,
    pub last_insert_id: u64,
}

/// Database row representation of a user.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.id),
            name: row.name,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

/// Handle to the database: a pool of driver connections.
///
/// Errors are the driver's own, wrapped in [`userdb_core::DbError::Driver`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatabaseHandle: Interface + Send + Sync {
    /// Runs a write statement.
    async fn execute(&self, statement: &Statement) -> DbResult<ExecOutcome>;

    /// Runs a query that must return exactly one row.
    ///
    /// Zero rows is `sqlx::Error::RowNotFound`.
    async fn fetch_one(&self, statement: &Statement) -> DbResult<UserRow>;

    /// Round-trips `SELECT 1`.
    async fn ping(&self) -> DbResult<()>;

    /// Closes every connection.
    async fn close(&self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn row(id: i64) -> UserRow {
        UserRow {
            id,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        }
    }

    #[test]
    fn test_row_to_user() {
        let user = User::from(row(1));

        assert_eq!(user.id, UserId::new(1));
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.email, "john@example.com");
        assert_eq!(user.created_at, Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());
    }

    #[test]
    fn test_row_keeps_any_stored_key() {
        assert_eq!(User::from(row(0)).id, UserId::UNASSIGNED);
        assert_eq!(User::from(row(-5)).id, UserId::new(-5));
    }
}

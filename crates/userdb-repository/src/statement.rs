//! The parameterized statements issued against the `users` table.

use chrono::{DateTime, Utc};
use userdb_core::{User, UserId};

/// Inserts a user; the key is generated by the database.
pub const INSERT_USER: &str = "INSERT INTO users (name, email, created_at) VALUES (?, ?, ?)";

/// Reads one user by primary key.
pub const SELECT_USER: &str = "SELECT id, name, email, created_at FROM users WHERE id = ?";

/// Rewrites the mutable columns of one user.
pub const UPDATE_USER: &str = "UPDATE users SET name = ?, email = ? WHERE id = ?";

/// Removes one user by primary key.
pub const DELETE_USER: &str = "DELETE FROM users WHERE id = ?";

/// A value bound to a `?` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Int(i64),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl From<UserId> for SqlValue {
    fn from(id: UserId) -> Self {
        Self::Int(id.into_inner())
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(ts: DateTime<Utc>) -> Self {
        Self::Timestamp(ts)
    }
}

/// SQL text plus its bound values, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    sql: &'static str,
    params: Vec<SqlValue>,
}

impl Statement {
    fn new(sql: &'static str, params: Vec<SqlValue>) -> Self {
        Self { sql, params }
    }

    /// `INSERT` bound to `(name, email, created_at)`. The user's id is ignored.
    #[must_use]
    pub fn insert_user(user: &User) -> Self {
        Self::new(
            INSERT_USER,
            vec![
                user.name.as_str().into(),
                user.email.as_str().into(),
                user.created_at.into(),
            ],
        )
    }

    /// `SELECT` bound to `(id)`.
    #[must_use]
    pub fn select_user(id: UserId) -> Self {
        Self::new(SELECT_USER, vec![id.into()])
    }

    /// `UPDATE` bound to `(name, email, id)`.
    #[must_use]
    pub fn update_user(user: &User) -> Self {
        Self::new(
            UPDATE_USER,
            vec![
                user.name.as_str().into(),
                user.email.as_str().into(),
                user.id.into(),
            ],
        )
    }

    /// `DELETE` bound to `(id)`.
    #[must_use]
    pub fn delete_user(id: UserId) -> Self {
        Self::new(DELETE_USER, vec![id.into()])
    }

    #[must_use]
    pub const fn sql(&self) -> &'static str {
        self.sql
    }

    #[must_use]
    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_user() -> User {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        User::new("John Doe", "john@example.com", created).with_id(UserId::new(9))
    }

    #[test]
    fn test_placeholder_count_matches_params() {
        let user = sample_user();
        for stmt in [
            Statement::insert_user(&user),
            Statement::select_user(user.id),
            Statement::update_user(&user),
            Statement::delete_user(user.id),
        ] {
            assert_eq!(stmt.sql().matches('?').count(), stmt.params().len(), "{}", stmt.sql());
        }
    }

    #[test]
    fn test_insert_skips_id() {
        let user = sample_user();
        let stmt = Statement::insert_user(&user);

        assert_eq!(stmt.sql(), INSERT_USER);
        assert_eq!(
            stmt.params(),
            &[
                SqlValue::Text("John Doe".to_string()),
                SqlValue::Text("john@example.com".to_string()),
                SqlValue::Timestamp(user.created_at),
            ]
        );
    }

    #[test]
    fn test_update_binds_id_last() {
        let stmt = Statement::update_user(&sample_user());

        assert_eq!(stmt.sql(), UPDATE_USER);
        assert_eq!(stmt.params().last(), Some(&SqlValue::Int(9)));
    }

    #[test]
    fn test_select_and_delete_bind_id() {
        let id = UserId::new(1);
        assert_eq!(Statement::select_user(id).params(), &[SqlValue::Int(1)]);
        assert_eq!(Statement::delete_user(id).params(), &[SqlValue::Int(1)]);
        assert_eq!(Statement::select_user(id).sql(), SELECT_USER);
        assert_eq!(Statement::delete_user(id).sql(), DELETE_USER);
    }
}

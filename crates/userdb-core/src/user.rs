//! User entity.

use crate::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Primary key; [`UserId::UNASSIGNED`] until the user is read back.
    pub id: UserId,

    /// Display name.
    pub name: String,

    /// Email address.
    pub email: String,

    /// Creation timestamp, chosen by the caller.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a user that has not been persisted yet.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: UserId::UNASSIGNED,
            name: name.into(),
            email: email.into(),
            created_at,
        }
    }

    /// Sets the primary key.
    #[must_use]
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = id;
        self
    }

    /// Replaces name and email, the only mutable columns.
    pub fn rename(&mut self, name: impl Into<String>, email: impl Into<String>) {
        self.name = name.into();
        self.email = email.into();
    }
}

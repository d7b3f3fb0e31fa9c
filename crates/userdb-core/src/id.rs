//! Typed id for the `users` table.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Database-assigned primary key of a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    /// Id of a user that has not been read back from the database.
    pub const UNASSIGNED: Self = Self(0);

    /// Wraps a raw key.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw key.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Whether the database has assigned this id.
    #[must_use]
    pub const fn is_assigned(self) -> bool {
        self.0 != 0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

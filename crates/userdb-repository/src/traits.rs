//! Repository trait definitions.

use async_trait::async_trait;
use userdb_core::{DbResult, Interface, User, UserId};

/// User repository trait.
///
/// One statement per call. Driver errors come back unchanged and nothing
/// else is attempted after a failure.
#[async_trait]
pub trait UserRepository: Interface + Send + Sync {
    /// Inserts `user`. Its id is ignored and the generated key is not read back.
    async fn create(&self, user: &User) -> DbResult<()>;

    /// Reads the user with primary key `id`.
    ///
    /// A missing row is the driver's `RowNotFound`.
    async fn get(&self, id: UserId) -> DbResult<User>;

    /// Overwrites name and email of the row matching `user.id`.
    ///
    /// Succeeds even when no row matches.
    async fn update(&self, user: &User) -> DbResult<()>;

    /// Deletes the row with primary key `id`.
    ///
    /// Succeeds even when no row matches.
    async fn delete(&self, id: UserId) -> DbResult<()>;
}

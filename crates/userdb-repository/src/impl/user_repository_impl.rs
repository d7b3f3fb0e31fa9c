//! `UserRepositoryImpl`: the four user operations over a [`DatabaseHandle`].
//!
//! ```text
//! caller
//!   ↓ Arc<dyn UserRepository>
//! UserRepositoryImpl          ← builds one Statement per call
//!   ↓ Arc<dyn DatabaseHandle>
//! DatabasePool (sqlx::MySqlPool)
//!   ↓
//! MySQL
//! ```
//!
//! [`DatabaseHandle`]: crate::handle::DatabaseHandle

use crate::{handle::DatabaseHandle, statement::Statement, traits::UserRepository};
use async_trait::async_trait;
use shaku::Component;
use std::sync::Arc;
use tracing::debug;
use userdb_core::{DbResult, User, UserId};

/// Repository over a single database handle.
#[derive(Component)]
#[shaku(interface = UserRepository)]
pub struct UserRepositoryImpl {
    #[shaku(inject)]
    handle: Arc<dyn DatabaseHandle>,
}

impl UserRepositoryImpl {
    /// Creates a new `UserRepositoryImpl` over the given handle.
    #[must_use]
    pub fn new(handle: Arc<dyn DatabaseHandle>) -> Self {
        Self { handle }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, user: &User) -> DbResult<()> {
        debug!("Repository: create user");
        self.handle.execute(&Statement::insert_user(user)).await?;
        Ok(())
    }

    async fn get(&self, id: UserId) -> DbResult<User> {
        debug!("Repository: get user {}", id);
        let row = self.handle.fetch_one(&Statement::select_user(id)).await?;
        Ok(row.into())
    }

    async fn update(&self, user: &User) -> DbResult<()> {
        debug!("Repository: update user {}", user.id);
        self.handle.execute(&Statement::update_user(user)).await?;
        Ok(())
    }

    async fn delete(&self, id: UserId) -> DbResult<()> {
        debug!("Repository: delete user {}", id);
        self.handle.execute(&Statement::delete_user(id)).await?;
        Ok(())
    }
}

impl std::fmt::Debug for UserRepositoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRepositoryImpl").finish_non_exhaustive()
    }
}

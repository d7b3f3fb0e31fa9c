//! Dependency injection module using Shaku.

use shaku::{module, HasComponent};
use std::sync::Arc;
use userdb_config::DatabaseConfig;
use userdb_core::DbResult;
use userdb_repository::{DatabaseHandle, DatabasePool, UserRepository, UserRepositoryImpl};

// Database handle plus the repository that injects it.
module! {
    pub UserDbModule {
        components = [
            DatabasePool,
            UserRepositoryImpl,
        ],
        providers = [],
    }
}

/// Connects the pool and builds the module around it.
pub async fn build_module(db_config: &DatabaseConfig) -> DbResult<Arc<UserDbModule>> {
    let db_pool = DatabasePool::connect(db_config).await?;
    Ok(module_from_pool(db_pool))
}

/// Builds the module around an already-created pool.
#[must_use]
pub fn module_from_pool(db_pool: DatabasePool) -> Arc<UserDbModule> {
    let module = UserDbModule::builder()
        .with_component_parameters::<DatabasePool>(db_pool.into_parameters())
        .build();

    Arc::new(module)
}

/// Resolves the components callers need from a module.
pub trait RepositoryResolver {
    /// Resolves the user repository from the module.
    fn user_repository(&self) -> Arc<dyn UserRepository>;

    /// Resolves the database handle from the module.
    fn database(&self) -> Arc<dyn DatabaseHandle>;
}

impl RepositoryResolver for UserDbModule {
    fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.resolve()
    }

    fn database(&self) -> Arc<dyn DatabaseHandle> {
        self.resolve()
    }
}

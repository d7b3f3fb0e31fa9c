//! Common test infrastructure for database integration tests.

use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::mysql::Mysql;
use userdb_config::DatabaseConfig;
use userdb_repository::DatabasePool;

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE users (
        id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL UNIQUE,
        created_at DATETIME(6) NOT NULL
    )
"#;

/// Test database container wrapper.
///
/// Manages a MySQL testcontainer lifecycle and provides a database pool
/// with an empty `users` table.
pub struct TestDatabase {
    _container: ContainerAsync<Mysql>,
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    pub async fn new() -> Self {
        let container = Mysql::default()
            .start()
            .await
            .expect("Failed to start MySQL container");

        let port = container
            .get_host_port_ipv4(3306)
            .await
            .expect("Failed to get MySQL port");

        let config = DatabaseConfig {
            url: format!("mysql://root@127.0.0.1:{}/test", port),
            min_connections: 1,
            max_connections: 5,
            connect_timeout_secs: 30,
            idle_timeout_secs: 600,
            log_queries: true,
        };

        let pool = Self::connect_with_retry(&config, 30).await;

        sqlx::query(CREATE_USERS_TABLE)
            .execute(pool.inner())
            .await
            .expect("Failed to create users table");

        Self {
            _container: container,
            pool: Arc::new(pool),
        }
    }

    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }

    /// Id of the most recently inserted user.
    pub async fn last_user_id(&self) -> i64 {
        sqlx::query_scalar("SELECT MAX(id) FROM users")
            .fetch_one(self.pool.inner())
            .await
            .expect("Failed to read last id")
    }

    pub async fn count_users(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool.inner())
            .await
            .expect("Failed to count users")
    }

    async fn connect_with_retry(config: &DatabaseConfig, max_attempts: u32) -> DatabasePool {
        let mut attempts = 0;
        loop {
            attempts += 1;
            match DatabasePool::connect(config).await {
                Ok(pool) => return pool,
                Err(e) => {
                    if attempts >= max_attempts {
                        panic!("Failed to connect to database after {} attempts: {}", max_attempts, e);
                    }
                    tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                }
            }
        }
    }
}

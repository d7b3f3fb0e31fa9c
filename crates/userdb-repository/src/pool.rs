//! MySQL connection pool management.

use crate::handle::{DatabaseHandle, ExecOutcome, UserRow};
use crate::statement::{SqlValue, Statement};
use async_trait::async_trait;
use shaku::Component;
use sqlx::mysql::{MySql, MySqlArguments, MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::query::Query;
use sqlx::{ConnectOptions, FromRow};
use std::str::FromStr;
use tracing::{debug, info, warn};
use userdb_config::DatabaseConfig;
use userdb_core::DbResult;

/// Database pool wrapper.
#[derive(Component)]
#[shaku(interface = DatabaseHandle)]
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Creates a new database pool from configuration.
    ///
    /// The URL goes to the driver untouched; parse and connect failures are
    /// the driver's errors.
    pub async fn connect(config: &DatabaseConfig) -> DbResult<Self> {
        info!("Connecting to MySQL database...");

        let mut options = MySqlConnectOptions::from_str(&config.url).map_err(|e| {
            warn!("Invalid database URL: {}", e);
            e
        })?;
        if !config.log_queries {
            options = options.disable_statement_logging();
        }

        let pool = MySqlPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(Some(config.idle_timeout()))
            .connect_with(options)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                e
            })?;

        info!("MySQL connection pool established");
        Ok(Self { pool })
    }

    /// Wraps an existing pool.
    #[must_use]
    pub fn with_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Moves the pool into the parameters shaku needs to build this component.
    #[must_use]
    pub fn into_parameters(self) -> DatabasePoolParameters {
        DatabasePoolParameters { pool: self.pool }
    }

    /// Returns a reference to the underlying pool.
    #[must_use]
    pub fn inner(&self) -> &MySqlPool {
        &self.pool
    }
}

fn bind_params(statement: &Statement) -> Query<'_, MySql, MySqlArguments> {
    statement
        .params()
        .iter()
        .fold(sqlx::query(statement.sql()), |query, value| match value {
            SqlValue::Int(v) => query.bind(*v),
            SqlValue::Text(v) => query.bind(v.as_str()),
            SqlValue::Timestamp(v) => query.bind(*v),
        })
}

#[async_trait]
impl DatabaseHandle for DatabasePool {
    async fn execute(&self, statement: &Statement) -> DbResult<ExecOutcome> {
        debug!(sql = statement.sql(), "execute");

        let result = bind_params(statement).execute(&self.pool).await?;

        Ok(ExecOutcome {
            rows_affected: result.rows_affected(),
            last_insert_id: result.last_insert_id(),
        })
    }

    async fn fetch_one(&self, statement: &Statement) -> DbResult<UserRow> {
        debug!(sql = statement.sql(), "fetch_one");

        let row = bind_params(statement).fetch_one(&self.pool).await?;
        Ok(UserRow::from_row(&row)?)
    }

    async fn ping(&self) -> DbResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}

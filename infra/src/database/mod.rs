//! Database connection and transaction types.

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::{MySql, MySqlPool};

use pb_shared::DatabaseConfig;

pub mod mysql;

/// The transaction handle threaded through the request context
///
/// The boundary layer begins one per request from the pool and commits or
/// rolls it back after the core returns.
pub type MySqlTx = sqlx::Transaction<'static, MySql>;

/// Create a MySQL connection pool from configuration
pub async fn connect_pool(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .connect(&config.url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "database pool established"
    );
    Ok(pool)
}

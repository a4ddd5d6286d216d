// Database connection management
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::config::DatabaseConfig;
use crate::error::{DatabaseError, DatabaseResult};

/// Create a connection pool for the configured database.
///
/// Each service builds one pool at startup and hands clones of it to its
/// request handlers; individual statements check a connection out and return
/// it when they complete.
pub async fn connect_pool(config: &DatabaseConfig) -> DatabaseResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(30))
        .idle_timeout(Duration::from_secs(600))
        .connect(&config.connection_string())
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    info!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        "Database connection pool created successfully"
    );

    Ok(pool)
}

/// Check that the database is reachable.
pub async fn ping(pool: &PgPool) -> bool {
    match sqlx::query("SELECT 1").fetch_one(pool).await {
        Ok(_) => true,
        Err(e) => {
            warn!("Database health check failed: {}", e);
            false
        }
    }
}

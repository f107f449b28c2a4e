//! Pool construction and liveness check.

use crate::config::AppConfig;
use crate::error::AppError;
use sqlx::PgPool;

/// Open the pool and verify connectivity with a `SELECT 1` bounded by the acquire timeout.
/// Failure here is fatal to startup.
pub async fn connect_pool(config: &AppConfig) -> Result<PgPool, AppError> {
    let pool = config
        .pool
        .pool_options(config.dev)
        .connect(&config.database_url)
        .await?;
    ping(&pool, config.pool.acquire_timeout).await?;
    Ok(pool)
}

/// Liveness check used at startup and by the readiness route.
pub async fn ping(pool: &PgPool, timeout: std::time::Duration) -> Result<(), AppError> {
    match tokio::time::timeout(timeout, sqlx::query("SELECT 1").execute(pool)).await {
        Ok(result) => {
            result?;
            Ok(())
        }
        Err(_) => {
            tracing::warn!(?timeout, "database liveness check timed out");
            Err(AppError::Connectivity(sqlx::Error::PoolTimedOut))
        }
    }
}

//! Acquisition of the store client for one command.

use todo_db::DbPool;

use crate::config::DbConfig;
use crate::error::AppResult;

/// Build the pool described by `config` and confirm the store answers.
///
/// The caller owns the returned pool and is expected to close it.
pub async fn connect(config: &DbConfig) -> AppResult<DbPool> {
    let pool = todo_db::create_pool(
        &config.database_url,
        config.max_connections,
        config.acquire_timeout(),
    )
    .await?;
    tracing::debug!("Database connection pool created");

    if let Err(err) = ensure_reachable(&pool).await {
        pool.close().await;
        return Err(err);
    }
    Ok(pool)
}

/// Round-trip a trivial query through `pool`.
pub async fn ensure_reachable(pool: &DbPool) -> AppResult<()> {
    todo_db::health_check(pool).await?;
    tracing::debug!("Database health check passed");
    Ok(())
}

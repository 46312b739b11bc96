use std::{str::FromStr, time::Duration};

use anyhow::Result;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use sqlx::{ConnectOptions, SqlitePool};
use sqlx_migrator::{Migrate, Plan};
use tracing::log::LevelFilter;

/// Options applied to every connection of every pool: WAL journal, relaxed
/// sync, enforced foreign keys and debug-level statement logs.
fn connect_options(database_url: &str) -> Result<SqliteConnectOptions> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true)
        .pragma("temp_store", "memory")
        .log_statements(LevelFilter::Debug);

    Ok(options)
}

async fn open(options: SqliteConnectOptions, max_connections: u32) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Read-only pool behind every query handler. The database must already
/// exist.
pub async fn create_read_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let pool = open(connect_options(database_url)?.read_only(true), max_connections).await?;
    tracing::info!(max_connections, "read-only pool ready");

    Ok(pool)
}

/// Single connection, so every write and transaction is serialized.
pub async fn create_write_pool(database_url: &str) -> Result<SqlitePool> {
    let pool = open(connect_options(database_url)?.create_if_missing(true), 1).await?;
    tracing::info!("write pool ready");

    Ok(pool)
}

/// Read-write pool for CLI commands and tests.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    open(
        connect_options(database_url)?.create_if_missing(true),
        max_connections,
    )
    .await
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    let mut conn = pool.acquire().await?;
    weekplate_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use temp_dir::TempDir;

    use super::*;

    fn url(dir: &TempDir) -> String {
        format!("sqlite:{}", dir.child("weekplate.db").display())
    }

    #[tokio::test]
    async fn test_every_connection_gets_pragmas() {
        let dir = TempDir::new().unwrap();
        let pool = create_pool(&url(&dir), 2).await.unwrap();

        let mut first = pool.acquire().await.unwrap();
        let mut second = pool.acquire().await.unwrap();

        for conn in [&mut first, &mut second] {
            let journal_mode: (String,) = sqlx::query_as("PRAGMA journal_mode")
                .fetch_one(&mut **conn)
                .await
                .unwrap();
            assert_eq!(journal_mode.0, "wal");

            let foreign_keys: (i32,) = sqlx::query_as("PRAGMA foreign_keys")
                .fetch_one(&mut **conn)
                .await
                .unwrap();
            assert_eq!(foreign_keys.0, 1);
        }
    }

    #[tokio::test]
    async fn test_read_pool_rejects_writes() {
        let dir = TempDir::new().unwrap();
        let write_pool = create_write_pool(&url(&dir)).await.unwrap();
        run_migrations(&write_pool).await.unwrap();

        let read_pool = create_read_pool(&url(&dir), 2).await.unwrap();

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM recipe_catalog")
            .fetch_one(&read_pool)
            .await
            .unwrap();
        assert_eq!(count.0, 0);

        let delete = sqlx::query("DELETE FROM weekly_plan_slot")
            .execute(&read_pool)
            .await;
        assert!(delete.is_err());
    }

    #[tokio::test]
    async fn test_migrations_run_twice() {
        let pool = create_pool(":memory:", 1).await.unwrap();

        run_migrations(&pool).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let tables: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'weekly_plan_slot'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(tables.0, 1);
    }
}

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{SqlitePool, migrate::MigrateDatabase};
use sqlx_migrator::{Migrate, Plan};
use std::str::FromStr;

/// Configure SQLite PRAGMAs for WAL mode
async fn configure_pragmas(pool: &SqlitePool) -> Result<()> {
    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(pool)
        .await?;
    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(pool)
        .await?;
    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(pool)
        .await?;
    sqlx::query("PRAGMA foreign_keys = true")
        .execute(pool)
        .await?;
    sqlx::query("PRAGMA temp_store = memory")
        .execute(pool)
        .await?;

    Ok(())
}

/// Create a read-only connection pool
pub async fn create_read_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?.read_only(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    configure_pragmas(&pool).await?;

    tracing::debug!(max_connections, "Created read-only pool");

    Ok(pool)
}

/// Create the single-connection pool every write goes through
pub async fn create_write_pool(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    configure_pragmas(&pool).await?;

    tracing::debug!("Created read-write pool with 1 max connection");

    Ok(pool)
}

/// Create the database when missing and apply pending migrations
#[tracing::instrument]
pub async fn migrate(database_url: &str) -> Result<()> {
    if !sqlx::Sqlite::database_exists(database_url).await? {
        tracing::info!("Database does not exist, creating: {}", database_url);
        sqlx::Sqlite::create_database(database_url).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(database_url)
        .await?;

    let mut conn = pool.acquire().await?;
    udb_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;
    drop(conn);

    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

/// Drop the database if it exists and recreate it with migrations
#[tracing::instrument]
pub async fn reset(database_url: &str) -> Result<()> {
    if sqlx::Sqlite::database_exists(database_url).await? {
        tracing::warn!("Dropping existing database: {}", database_url);
        sqlx::Sqlite::drop_database(database_url).await?;
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate(database_url).await
}

/// Migrate, then open the read and write pools the stores share
pub async fn connect(database_url: &str, max_connections: u32) -> Result<udb_shared::State> {
    migrate(database_url).await?;

    let write_db = create_write_pool(database_url).await?;
    let read_db = create_read_pool(database_url, max_connections).await?;

    Ok(udb_shared::State { read_db, write_db })
}

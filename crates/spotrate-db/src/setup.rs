//! Database setup and initialization.
//!
//! Entry points call `setup_database()` with the resolved database path.

use anyhow::Result;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use std::path::Path;
use tracing::debug;

/// Sets up the `SQLite` database connection and ensures the schema exists.
///
/// Creates the parent directory and the database file if they are missing,
/// then applies the schema. Safe to call against an existing database.
///
/// # Example
///
/// ```rust,no_run
/// use spotrate_db::setup_database;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_database(Path::new("/var/lib/spotrate/data/spotrate.db")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true),
    )
    .await?;

    create_schema(&pool).await?;
    debug!(target: "spotrate.db", path = %db_path.display(), "Database ready");

    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// The pool holds a single connection that never expires; every connection
/// to `sqlite::memory:` would otherwise see its own empty database.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates the complete database schema.
///
/// All statements use `IF NOT EXISTS`.
async fn create_schema(pool: &SqlitePool) -> Result<()> {
    // `seq` orders entries created within the same timestamp.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS locations (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            location TEXT NOT NULL,
            type TEXT NOT NULL,
            danger_rating INTEGER NOT NULL CHECK (danger_rating BETWEEN 1 AND 5),
            location_rating INTEGER NOT NULL CHECK (location_rating BETWEEN 1 AND 5),
            description TEXT NOT NULL,
            image TEXT,
            latitude REAL CHECK (latitude BETWEEN -90 AND 90),
            longitude REAL CHECK (longitude BETWEEN -180 AND 180),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            CHECK ((latitude IS NULL) = (longitude IS NULL))
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_locations_created_at ON locations(created_at)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_locations_type ON locations(type)")
        .execute(pool)
        .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_locations_location_rating ON locations(location_rating)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_setup_creates_file_and_parent_directory() {
        let temp = tempdir().unwrap();
        let db_path = temp.path().join("data").join("spotrate.db");

        let pool = setup_database(&db_path).await.unwrap();
        pool.close().await;

        assert!(db_path.exists());
    }

    #[tokio::test]
    async fn test_schema_is_idempotent() {
        let pool = setup_test_database().await.unwrap();
        create_schema(&pool).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM locations")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_check_constraints_reject_bad_rows() {
        let pool = setup_test_database().await.unwrap();

        let result = sqlx::query(
            "INSERT INTO locations (id, location, type, danger_rating, location_rating, description, latitude, created_at, updated_at)
             VALUES ('x', 'a', 'Autre', 1, 1, 'd', 10.0, 't', 't')",
        )
        .execute(&pool)
        .await;
        assert!(result.is_err(), "latitude without longitude must be refused");

        let result = sqlx::query(
            "INSERT INTO locations (id, location, type, danger_rating, location_rating, description, created_at, updated_at)
             VALUES ('y', 'a', 'Autre', 6, 1, 'd', 't', 't')",
        )
        .execute(&pool)
        .await;
        assert!(result.is_err(), "rating 6 must be refused");
    }
}

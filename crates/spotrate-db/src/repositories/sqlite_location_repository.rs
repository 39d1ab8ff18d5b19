//! `SQLite` implementation of the location repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use spotrate_core::ports::{LocationRepository, RepositoryError};
use spotrate_core::{LocationEntry, LocationSummary, NewLocation};

use super::row_mappers::{
    LOCATION_SELECT_COLUMNS, format_timestamp, row_to_location, row_to_type_stats,
};

/// `SQLite` implementation of the location repository.
pub struct SqliteLocationRepository {
    pool: SqlitePool,
}

impl SqliteLocationRepository {
    /// Create a new `SQLite` location repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Map `SQLx` errors to `RepositoryError`.
fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    if let Some(db) = e.as_database_error() {
        if db.is_check_violation() || db.is_unique_violation() {
            return RepositoryError::Constraint(db.message().to_string());
        }
    }
    RepositoryError::Storage(e.to_string())
}

#[async_trait]
impl LocationRepository for SqliteLocationRepository {
    async fn list(&self) -> Result<Vec<LocationEntry>, RepositoryError> {
        let query = format!(
            "SELECT {LOCATION_SELECT_COLUMNS} FROM locations ORDER BY created_at DESC, seq DESC"
        );
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_location).collect()
    }

    async fn get_by_id(&self, id: &str) -> Result<LocationEntry, RepositoryError> {
        let query = format!("SELECT {LOCATION_SELECT_COLUMNS} FROM locations WHERE id = ?");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        match row {
            Some(row) => row_to_location(&row),
            None => Err(RepositoryError::NotFound(format!("Location {id}"))),
        }
    }

    async fn insert(&self, location: &NewLocation) -> Result<LocationEntry, RepositoryError> {
        let id = Uuid::new_v4().to_string();
        let now = format_timestamp(Utc::now());
        let (latitude, longitude) = location
            .coordinates
            .map_or((None, None), |c| (Some(c.latitude), Some(c.longitude)));

        sqlx::query(
            r#"
            INSERT INTO locations (id, location, type, danger_rating, location_rating, description, image, latitude, longitude, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&location.location)
        .bind(location.location_type.label())
        .bind(i64::from(location.danger_rating.get()))
        .bind(i64::from(location.location_rating.get()))
        .bind(&location.description)
        .bind(&location.image)
        .bind(latitude)
        .bind(longitude)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.get_by_id(&id).await
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM locations WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Location {id}")));
        }
        Ok(())
    }

    async fn summary(&self) -> Result<LocationSummary, RepositoryError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM locations")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let rows = sqlx::query(
            r#"
            SELECT type,
                   COUNT(*) AS count,
                   CAST(AVG(location_rating) AS REAL) AS avg_rating,
                   CAST(AVG(danger_rating) AS REAL) AS avg_danger
            FROM locations
            GROUP BY type
            ORDER BY count DESC, type ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(LocationSummary {
            total_locations: u64::try_from(total).unwrap_or_default(),
            type_stats: rows
                .iter()
                .map(row_to_type_stats)
                .collect::<Result<_, _>>()?,
        })
    }
}

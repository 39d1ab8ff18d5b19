//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, SecondsFormat, Utc};
use spotrate_core::{Coordinates, LocationEntry, LocationType, Rating, RepositoryError, TypeStats};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Shared SELECT column list for location queries.
pub const LOCATION_SELECT_COLUMNS: &str = "id, location, type, danger_rating, location_rating, description, image, latitude, longitude, created_at, updated_at";

/// Format a timestamp the way it is stored: RFC 3339, microseconds, `Z`.
///
/// The fixed width keeps lexical and chronological order identical.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a stored RFC 3339 timestamp.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Serialization(format!("Invalid timestamp '{raw}': {e}")))
}

fn column<'r, T>(row: &'r SqliteRow, name: &str) -> Result<T, RepositoryError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(name)
        .map_err(|e| RepositoryError::Storage(e.to_string()))
}

fn rating(row: &SqliteRow, name: &str) -> Result<Rating, RepositoryError> {
    let value: i64 = column(row, name)?;
    Rating::new(value)
        .ok_or_else(|| RepositoryError::Serialization(format!("{name} out of range: {value}")))
}

/// Parse a database row into a `LocationEntry`.
pub fn row_to_location(row: &SqliteRow) -> Result<LocationEntry, RepositoryError> {
    let type_label: String = column(row, "type")?;
    let location_type = LocationType::from_label(&type_label)
        .ok_or_else(|| RepositoryError::Serialization(format!("Unknown type '{type_label}'")))?;

    let latitude: Option<f64> = column(row, "latitude")?;
    let longitude: Option<f64> = column(row, "longitude")?;
    let coordinates = match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Some(Coordinates {
            latitude,
            longitude,
        }),
        _ => None,
    };

    let created_at: String = column(row, "created_at")?;
    let updated_at: String = column(row, "updated_at")?;

    Ok(LocationEntry {
        id: column(row, "id")?,
        location: column(row, "location")?,
        location_type,
        danger_rating: rating(row, "danger_rating")?,
        location_rating: rating(row, "location_rating")?,
        description: column(row, "description")?,
        image: column(row, "image")?,
        coordinates,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}

/// Parse a `GROUP BY type` aggregate row.
pub fn row_to_type_stats(row: &SqliteRow) -> Result<TypeStats, RepositoryError> {
    let count: i64 = column(row, "count")?;
    Ok(TypeStats {
        id: column(row, "type")?,
        count: u64::try_from(count).unwrap_or_default(),
        avg_rating: column(row, "avg_rating")?,
        avg_danger: column(row, "avg_danger")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamps_round_trip_at_micro_precision() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let stored = format_timestamp(at);
        assert_eq!(stored, "2024-03-01T12:30:00.000000Z");
        assert_eq!(parse_timestamp(&stored).unwrap(), at);
    }

    #[test]
    fn test_bad_timestamp_is_a_serialization_error() {
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(RepositoryError::Serialization(_))
        ));
    }
}

//! Submission validation.
//!
//! `validate` turns the raw fields of a submission into a normalized
//! `NewLocation`, or reports every violated constraint at once. It is pure:
//! no storage, no filesystem, no clock.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::domain::{Coordinates, LocationType, NewLocation, Rating};

/// Multipart/form field names shared by every adapter.
pub mod fields {
    pub const LOCATION: &str = "location";
    pub const TYPE: &str = "type";
    pub const DANGER_RATING: &str = "dangerRating";
    pub const LOCATION_RATING: &str = "locationRating";
    pub const DESCRIPTION: &str = "description";
    pub const LATITUDE: &str = "latitude";
    pub const LONGITUDE: &str = "longitude";
    pub const COORDINATES: &str = "coordinates";
    pub const IMAGE: &str = "image";
}

/// Raw, unvalidated submission fields as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationForm {
    pub location: Option<String>,
    pub location_type: Option<String>,
    pub danger_rating: Option<String>,
    pub location_rating: Option<String>,
    pub description: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl LocationForm {
    /// Store a named text field. Returns `false` for names the form doesn't know.
    pub fn set(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            fields::LOCATION => &mut self.location,
            fields::TYPE => &mut self.location_type,
            fields::DANGER_RATING => &mut self.danger_rating,
            fields::LOCATION_RATING => &mut self.location_rating,
            fields::DESCRIPTION => &mut self.description,
            fields::LATITUDE => &mut self.latitude,
            fields::LONGITUDE => &mut self.longitude,
            _ => return false,
        };
        *slot = Some(value);
        true
    }
}

/// A single field-level constraint failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Every violation found in one submission, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationErrors(Vec<Violation>);

impl ValidationErrors {
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    /// The violation messages, as surfaced to clients.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(|v| v.message.clone()).collect()
    }

    /// Whether any violation concerns `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed: {}", self.messages().join("; "))
    }
}

/// Validate and normalize a submission.
///
/// Strings are trimmed, ratings coerced to integers, blank coordinate fields
/// treated as absent. The returned `NewLocation` never carries an image; the
/// caller attaches one after storing the blob.
pub fn validate(form: &LocationForm) -> Result<NewLocation, ValidationErrors> {
    let mut errors = Vec::new();

    let location = required_text(
        form.location.as_deref(),
        fields::LOCATION,
        "Location is required",
        &mut errors,
    );
    let location_type = category(form.location_type.as_deref(), &mut errors);
    let danger_rating = rating(
        form.danger_rating.as_deref(),
        fields::DANGER_RATING,
        "Danger rating",
        &mut errors,
    );
    let description = required_text(
        form.description.as_deref(),
        fields::DESCRIPTION,
        "Description is required",
        &mut errors,
    );
    let location_rating = rating(
        form.location_rating.as_deref(),
        fields::LOCATION_RATING,
        "Location rating",
        &mut errors,
    );
    let coordinates = coordinates(
        form.latitude.as_deref(),
        form.longitude.as_deref(),
        &mut errors,
    );

    match (
        location,
        location_type,
        danger_rating,
        location_rating,
        description,
        coordinates,
    ) {
        (
            Some(location),
            Some(location_type),
            Some(danger_rating),
            Some(location_rating),
            Some(description),
            Ok(coordinates),
        ) if errors.is_empty() => Ok(NewLocation {
            location,
            location_type,
            danger_rating,
            location_rating,
            description,
            image: None,
            coordinates,
        }),
        _ => Err(ValidationErrors(errors)),
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn required_text(
    raw: Option<&str>,
    field: &'static str,
    message: &str,
    errors: &mut Vec<Violation>,
) -> Option<String> {
    let value = non_blank(raw).map(str::to_string);
    if value.is_none() {
        errors.push(Violation::new(field, message));
    }
    value
}

fn category(raw: Option<&str>, errors: &mut Vec<Violation>) -> Option<LocationType> {
    let Some(label) = non_blank(raw) else {
        errors.push(Violation::new(fields::TYPE, "Type is required"));
        return None;
    };

    let parsed = LocationType::from_label(label);
    if parsed.is_none() {
        errors.push(Violation::new(
            fields::TYPE,
            format!("Type must be one of: {}", LocationType::joined_labels()),
        ));
    }
    parsed
}

fn rating(
    raw: Option<&str>,
    field: &'static str,
    label: &str,
    errors: &mut Vec<Violation>,
) -> Option<Rating> {
    let Some(raw) = non_blank(raw) else {
        errors.push(Violation::new(field, format!("{label} is required")));
        return None;
    };

    let Ok(value) = raw.parse::<i64>() else {
        errors.push(Violation::new(
            field,
            format!("{label} must be a whole number"),
        ));
        return None;
    };

    if value < i64::from(Rating::MIN) {
        errors.push(Violation::new(
            field,
            format!("{label} must be at least {}", Rating::MIN),
        ));
    } else if value > i64::from(Rating::MAX) {
        errors.push(Violation::new(
            field,
            format!("{label} must be at most {}", Rating::MAX),
        ));
    }
    Rating::new(value)
}

/// `Ok(None)` when both halves are absent, `Err(())` after recording a violation.
fn coordinates(
    latitude: Option<&str>,
    longitude: Option<&str>,
    errors: &mut Vec<Violation>,
) -> Result<Option<Coordinates>, ()> {
    match (non_blank(latitude), non_blank(longitude)) {
        (None, None) => Ok(None),
        (Some(_), None) | (None, Some(_)) => {
            errors.push(Violation::new(
                fields::COORDINATES,
                "Latitude and longitude must be provided together",
            ));
            Err(())
        }
        (Some(lat), Some(lng)) => {
            let lat = coordinate(
                lat,
                fields::LATITUDE,
                "Latitude",
                Coordinates::latitude_in_range,
                Coordinates::LATITUDE_RANGE,
                errors,
            );
            let lng = coordinate(
                lng,
                fields::LONGITUDE,
                "Longitude",
                Coordinates::longitude_in_range,
                Coordinates::LONGITUDE_RANGE,
                errors,
            );
            match (lat, lng) {
                (Some(lat), Some(lng)) => Coordinates::new(lat, lng).map(Some).ok_or(()),
                _ => Err(()),
            }
        }
    }
}

fn coordinate(
    raw: &str,
    field: &'static str,
    label: &str,
    in_range: fn(f64) -> bool,
    (min, max): (f64, f64),
    errors: &mut Vec<Violation>,
) -> Option<f64> {
    match raw.parse::<f64>() {
        Ok(value) if in_range(value) => Some(value),
        Ok(_) => {
            errors.push(Violation::new(
                field,
                format!("{label} must be between {min} and {max}"),
            ));
            None
        }
        Err(_) => {
            errors.push(Violation::new(field, format!("{label} must be a number")));
            None
        }
    }
}

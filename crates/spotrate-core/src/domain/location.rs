//! Location entry domain types.
//!
//! These types represent rated locations in the system, independent of any
//! infrastructure concerns (database, filesystem, HTTP).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// Category
// ─────────────────────────────────────────────────────────────────────────────

/// Category of a rated location.
///
/// The serialized form is the user-facing label. `LocationType::ALL` is the
/// canonical, closed set; both the server validator and the web client read
/// from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationType {
    #[serde(rename = "WC Publique")]
    PublicRestroom,
    #[serde(rename = "Dans la nature")]
    Outdoors,
    #[serde(rename = "Chez quelqu'un")]
    PrivateHome,
    #[serde(rename = "Poteau")]
    Post,
    #[serde(rename = "Canal")]
    Canal,
    #[serde(rename = "Toilette normale")]
    RegularToilet,
    #[serde(rename = "Autre")]
    Other,
}

impl LocationType {
    /// Every category, in display order.
    pub const ALL: [Self; 7] = [
        Self::PublicRestroom,
        Self::Outdoors,
        Self::PrivateHome,
        Self::Post,
        Self::Canal,
        Self::RegularToilet,
        Self::Other,
    ];

    /// The label stored and exchanged on the wire.
    pub const fn label(self) -> &'static str {
        match self {
            Self::PublicRestroom => "WC Publique",
            Self::Outdoors => "Dans la nature",
            Self::PrivateHome => "Chez quelqu'un",
            Self::Post => "Poteau",
            Self::Canal => "Canal",
            Self::RegularToilet => "Toilette normale",
            Self::Other => "Autre",
        }
    }

    /// Icon shown next to the category in list views.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::PublicRestroom => "🏢",
            Self::Outdoors => "🌳",
            Self::PrivateHome => "🏠",
            Self::Post => "🍺",
            Self::Canal => "🚤",
            Self::RegularToilet => "🚽",
            Self::Other => "❓",
        }
    }

    /// Look up a category by its exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }

    /// All labels joined for human-readable messages.
    pub fn joined_labels() -> String {
        Self::ALL
            .iter()
            .map(|t| t.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a label is not part of the category set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown location type: {0}")]
pub struct UnknownLocationType(pub String);

impl FromStr for LocationType {
    type Err = UnknownLocationType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| UnknownLocationType(s.to_string()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rating
// ─────────────────────────────────────────────────────────────────────────────

/// A 1 to 5 star rating.
///
/// Construction is checked, so a `Rating` in hand is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Build a rating, returning `None` when out of range.
    pub fn new(value: i64) -> Option<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Self)
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| {
            format!(
                "rating {value} is outside {}..={}",
                Self::MIN,
                Self::MAX
            )
        })
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Coordinates
// ─────────────────────────────────────────────────────────────────────────────

/// A GPS position. Both halves are always present together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
    pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

    /// Build a coordinate pair, returning `None` when either half is out of range.
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        (Self::latitude_in_range(latitude) && Self::longitude_in_range(longitude))
            .then_some(Self {
                latitude,
                longitude,
            })
    }

    /// Whether both halves are finite and within range.
    pub fn is_valid(&self) -> bool {
        Self::latitude_in_range(self.latitude) && Self::longitude_in_range(self.longitude)
    }

    pub fn latitude_in_range(value: f64) -> bool {
        value.is_finite() && value >= Self::LATITUDE_RANGE.0 && value <= Self::LATITUDE_RANGE.1
    }

    pub fn longitude_in_range(value: f64) -> bool {
        value.is_finite() && value >= Self::LONGITUDE_RANGE.0 && value <= Self::LONGITUDE_RANGE.1
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Entries
// ─────────────────────────────────────────────────────────────────────────────

/// A rated location that has been persisted.
///
/// Use `NewLocation` for entries that haven't been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationEntry {
    /// Storage-assigned opaque identifier.
    pub id: String,
    /// Name of the place.
    pub location: String,
    #[serde(rename = "type")]
    pub location_type: LocationType,
    pub danger_rating: Rating,
    pub location_rating: Rating,
    pub description: String,
    /// Blob store filename of the uploaded photo.
    pub image: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated location ready to be inserted (no id or timestamps yet).
#[derive(Debug, Clone, PartialEq)]
pub struct NewLocation {
    pub location: String,
    pub location_type: LocationType,
    pub danger_rating: Rating,
    pub location_rating: Rating,
    pub description: String,
    pub image: Option<String>,
    pub coordinates: Option<Coordinates>,
}

impl NewLocation {
    /// Attach the blob filename of an already stored photo.
    #[must_use]
    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_from_str() {
        for t in LocationType::ALL {
            assert_eq!(t.label().parse::<LocationType>().unwrap(), t);
        }
        assert!("Poto".parse::<LocationType>().is_err());
    }

    #[test]
    fn test_location_type_serializes_as_label() {
        let json = serde_json::to_string(&LocationType::PrivateHome).unwrap();
        assert_eq!(json, "\"Chez quelqu'un\"");
    }

    #[test]
    fn test_joined_labels_lists_every_category() {
        let joined = LocationType::joined_labels();
        assert!(joined.starts_with("WC Publique, Dans la nature"));
        assert!(joined.ends_with("Toilette normale, Autre"));
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_none());
        assert!(Rating::new(6).is_none());
        assert!(Rating::new(-1).is_none());
        assert_eq!(Rating::new(1).unwrap().get(), 1);
        assert_eq!(Rating::new(5).unwrap().get(), 5);
    }

    #[test]
    fn test_rating_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Rating>("3").is_ok());
        assert!(serde_json::from_str::<Rating>("9").is_err());
    }

    #[test]
    fn test_coordinates_ranges() {
        assert!(Coordinates::new(48.8566, 2.3522).is_some());
        assert!(Coordinates::new(-90.0, 180.0).is_some());
        assert!(Coordinates::new(91.0, 2.0).is_none());
        assert!(Coordinates::new(0.0, -180.5).is_none());
        assert!(Coordinates::new(f64::NAN, 0.0).is_none());
    }

    #[test]
    fn test_entry_uses_camel_case_wire_names() {
        let entry = LocationEntry {
            id: "abc".into(),
            location: "Gare du Nord".into(),
            location_type: LocationType::PublicRestroom,
            danger_rating: Rating::new(2).unwrap(),
            location_rating: Rating::new(4).unwrap(),
            description: "Propre".into(),
            image: None,
            coordinates: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "WC Publique");
        assert_eq!(json["dangerRating"], 2);
        assert_eq!(json["locationRating"], 4);
        assert!(json["image"].is_null());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("location_type").is_none());
    }
}

//! Display helpers shared by the CLI and mirrored by the browser client.

use crate::domain::{Coordinates, Rating};

/// Colour bucket for a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingTone {
    Good,
    Fair,
    Poor,
}

impl RatingTone {
    /// Quality ratings: higher is better.
    pub const fn for_quality(rating: Rating) -> Self {
        match rating.get() {
            4.. => Self::Good,
            3 => Self::Fair,
            _ => Self::Poor,
        }
    }

    /// Danger ratings: lower is better.
    pub const fn for_danger(rating: Rating) -> Self {
        match rating.get() {
            0..=2 => Self::Good,
            3 => Self::Fair,
            _ => Self::Poor,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

/// `48.85660, 2.35220`
pub fn format_coordinates(coords: &Coordinates) -> String {
    format!("{:.5}, {:.5}", coords.latitude, coords.longitude)
}

/// Link that opens the point in Google Maps, labelled when `label` is not blank.
///
/// Returns `None` when the coordinates are out of range.
pub fn maps_url(coords: &Coordinates, label: &str) -> Option<String> {
    if !coords.is_valid() {
        return None;
    }
    let label = label.trim();
    if label.is_empty() {
        Some(format!(
            "https://www.google.com/maps?q={},{}",
            coords.latitude, coords.longitude
        ))
    } else {
        Some(format!(
            "https://www.google.com/maps?q={}@{},{}",
            urlencoding::encode(label),
            coords.latitude,
            coords.longitude
        ))
    }
}

/// Link to turn-by-turn directions towards the point.
pub fn directions_url(coords: &Coordinates) -> Option<String> {
    if !coords.is_valid() {
        return None;
    }
    Some(format!(
        "https://www.google.com/maps/dir/?api=1&destination={},{}",
        coords.latitude, coords.longitude
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(v: i64) -> Rating {
        Rating::new(v).unwrap()
    }

    #[test]
    fn test_quality_tones() {
        assert_eq!(RatingTone::for_quality(rating(5)), RatingTone::Good);
        assert_eq!(RatingTone::for_quality(rating(4)), RatingTone::Good);
        assert_eq!(RatingTone::for_quality(rating(3)), RatingTone::Fair);
        assert_eq!(RatingTone::for_quality(rating(1)), RatingTone::Poor);
    }

    #[test]
    fn test_danger_tones_are_inverted() {
        assert_eq!(RatingTone::for_danger(rating(1)), RatingTone::Good);
        assert_eq!(RatingTone::for_danger(rating(3)), RatingTone::Fair);
        assert_eq!(RatingTone::for_danger(rating(5)), RatingTone::Poor);
    }

    #[test]
    fn test_map_links() {
        let paris = Coordinates {
            latitude: 48.8566,
            longitude: 2.3522,
        };
        let url = maps_url(&paris, "Gare du Nord").unwrap();
        assert_eq!(
            url,
            "https://www.google.com/maps?q=Gare%20du%20Nord@48.8566,2.3522"
        );
        assert_eq!(
            maps_url(&paris, " ").unwrap(),
            "https://www.google.com/maps?q=48.8566,2.3522"
        );
        assert!(directions_url(&paris).unwrap().contains("destination=48.8566,2.3522"));
        assert_eq!(format_coordinates(&paris), "48.85660, 2.35220");
    }

    #[test]
    fn test_out_of_range_has_no_links() {
        let bogus = Coordinates {
            latitude: 91.0,
            longitude: 2.0,
        };
        assert!(maps_url(&bogus, "x").is_none());
        assert!(directions_url(&bogus).is_none());
    }
}

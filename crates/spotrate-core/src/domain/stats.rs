//! Aggregate statistics over stored locations.

use serde::{Deserialize, Serialize};

/// Per-category aggregate.
///
/// `id` carries the literal stored `type` value and is serialized as `_id`,
/// the grouping-key name clients already consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStats {
    #[serde(rename = "_id")]
    pub id: String,
    pub count: u64,
    /// Mean `locationRating` of the group.
    pub avg_rating: f64,
    /// Mean `dangerRating` of the group.
    pub avg_danger: f64,
}

/// Summary over the whole collection. Categories without entries are absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSummary {
    pub total_locations: u64,
    pub type_stats: Vec<TypeStats>,
}

impl LocationSummary {
    /// Find the group for a given `type` label.
    pub fn group(&self, label: &str) -> Option<&TypeStats> {
        self.type_stats.iter().find(|s| s.id == label)
    }
}

//! Derived standings rows and the sort state for the standings table.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Per-player aggregate statistics (for API / display). Recomputed from the
/// roster and the battle collection, never persisted.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub name: String,
    pub army: String,
    pub kp: i64,
    #[serde(rename = "battlesPlayed")]
    pub battles_played: u32,
    #[serde(rename = "vpGained")]
    pub vp_gained: u32,
    #[serde(rename = "vpLost")]
    pub vp_lost: u32,
    pub points: u32,
}

/// A sortable column of the standings table.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Name,
    Army,
    Kp,
    BattlesPlayed,
    VpGained,
    VpLost,
    Points,
}

impl SortKey {
    /// Total order over the column's value type: lexical for the string
    /// columns, numeric for the rest.
    pub fn compare(&self, a: &PlayerStats, b: &PlayerStats) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Army => a.army.cmp(&b.army),
            SortKey::Kp => a.kp.cmp(&b.kp),
            SortKey::BattlesPlayed => a.battles_played.cmp(&b.battles_played),
            SortKey::VpGained => a.vp_gained.cmp(&b.vp_gained),
            SortKey::VpLost => a.vp_lost.cmp(&b.vp_lost),
            SortKey::Points => a.points.cmp(&b.points),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Current sort state of the standings table.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    /// The table opens showing points, best first.
    fn default() -> Self {
        Self {
            key: SortKey::Points,
            direction: SortDirection::Descending,
        }
    }
}

impl SortConfig {
    /// Next sort state after the user selects `key`: re-selecting the current
    /// key toggles direction, a new key starts ascending.
    pub fn select(self, key: SortKey) -> Self {
        let direction = if self.key == key && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        Self { key, direction }
    }
}

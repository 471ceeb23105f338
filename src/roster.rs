//! Campaign roster: loaded once at startup, read-only afterwards.
//!
//! The roster file is CSV with a `player,army,kp` header. The scoreboard only
//! consumes the read side; replacing the whole roster (the organizer's setter)
//! happens through the web API, not here.

use crate::models::CampaignEntry;
use std::path::Path;

/// Load the roster from a CSV file. A missing file is an empty roster, not an
/// error: the server still runs and the standings table is simply empty.
pub fn load_roster(path: impl AsRef<Path>) -> Vec<CampaignEntry> {
    let path = path.as_ref();
    let mut reader = match csv::Reader::from_path(path) {
        Ok(reader) => reader,
        Err(e) => {
            log::warn!("No roster loaded from {}: {}", path.display(), e);
            return Vec::new();
        }
    };
    let mut entries = Vec::new();
    for record in reader.deserialize::<CampaignEntry>() {
        match record {
            Ok(entry) => entries.push(entry),
            Err(e) => log::warn!("Skipping bad roster row in {}: {}", path.display(), e),
        }
    }
    entries
}

//! Campaign roster entries.

use serde::{Deserialize, Serialize};

/// One registered campaign participant. Supplied externally (roster file) and
/// read-only inside this crate: there are no create/update/delete operations.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CampaignEntry {
    /// Player name; the join key against `BattleResult::player1/player2`.
    pub player: String,
    pub army: String,
    /// Campaign points, assigned by the organizer. Opaque to this crate.
    pub kp: i64,
}

impl CampaignEntry {
    pub fn new(player: impl Into<String>, army: impl Into<String>, kp: i64) -> Self {
        Self {
            player: player.into(),
            army: army.into(),
            kp,
        }
    }
}

/// Display formatting for a raw stored player name: trimmed, each word
/// capitalized. Applied at the display boundary only; stored names stay raw.
pub fn display_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

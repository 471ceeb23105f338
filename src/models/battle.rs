//! Battle result record and the error type for battle-log operations.

use serde::{Deserialize, Serialize};

/// Unique identifier for a battle result (assigned by the battle log).
pub type BattleId = u64;

/// Which side won the battle, or a draw.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Player1,
    Player2,
    #[default]
    Draw,
}

/// One finished game between two named players.
///
/// The serialized field names are the persisted on-disk format; they must not
/// change without migrating existing stores.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BattleResult {
    pub id: BattleId,
    pub player1: String,
    pub player2: String,
    pub winner: Winner,
    #[serde(rename = "player1VP")]
    pub player1_vp: u32,
    #[serde(rename = "player2VP")]
    pub player2_vp: u32,
    pub scenario: String,
    #[serde(rename = "hasReport")]
    pub has_report: bool,
    /// Only meaningful when `has_report` is true. Omitted from JSON when absent.
    #[serde(rename = "reportLink", default, skip_serializing_if = "Option::is_none")]
    pub report_link: Option<String>,
}

impl BattleResult {
    /// True if the named player occupies the winning slot.
    pub fn won_by(&self, player: &str) -> bool {
        match self.winner {
            Winner::Player1 => self.player1 == player,
            Winner::Player2 => self.player2 == player,
            Winner::Draw => false,
        }
    }
}

/// A completed battle entry form: everything except the id.
///
/// No field-level validation happens here; the form is trusted to supply
/// well-formed input (a player battling themselves is accepted as-is).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BattleDraft {
    pub player1: String,
    pub player2: String,
    pub winner: Winner,
    #[serde(rename = "player1VP")]
    pub player1_vp: u32,
    #[serde(rename = "player2VP")]
    pub player2_vp: u32,
    pub scenario: String,
    #[serde(rename = "hasReport", default)]
    pub has_report: bool,
    #[serde(rename = "reportLink", default, skip_serializing_if = "Option::is_none")]
    pub report_link: Option<String>,
}

impl BattleDraft {
    /// Attach an id, turning the draft into a stored record.
    pub fn into_result(self, id: BattleId) -> BattleResult {
        BattleResult {
            id,
            player1: self.player1,
            player2: self.player2,
            winner: self.winner,
            player1_vp: self.player1_vp,
            player2_vp: self.player2_vp,
            scenario: self.scenario,
            has_report: self.has_report,
            report_link: self.report_link,
        }
    }
}

/// Errors that can occur during scoreboard operations.
#[derive(Debug)]
pub enum ScoreboardError {
    /// Update or delete referenced an id not present in the log.
    BattleNotFound(BattleId),
    /// Writing the persisted collection failed.
    Storage(std::io::Error),
}

impl std::fmt::Display for ScoreboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreboardError::BattleNotFound(id) => write!(f, "No battle with id {}", id),
            ScoreboardError::Storage(e) => write!(f, "Failed to write battle results: {}", e),
        }
    }
}

impl From<std::io::Error> for ScoreboardError {
    fn from(e: std::io::Error) -> Self {
        ScoreboardError::Storage(e)
    }
}

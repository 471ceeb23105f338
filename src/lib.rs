//! Campaign scoreboard web app: library with models and business logic.

pub mod logic;
pub mod models;
pub mod roster;
pub mod storage;

pub use logic::{compute_player_stats, BattleLog, StandingsView};
pub use models::{
    display_name, BattleDraft, BattleId, BattleResult, CampaignEntry, PlayerStats,
    ScoreboardError, SortConfig, SortDirection, SortKey, Winner,
};
pub use roster::load_roster;
pub use storage::{BattleStore, BATTLE_RESULTS_KEY};

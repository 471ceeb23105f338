//! Scoreboard business logic: the battle log and the standings table.

mod battles;
mod standings;

pub use battles::BattleLog;
pub use standings::{compute_player_stats, StandingsView};

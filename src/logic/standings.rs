//! Standings: per-player aggregation and the sortable table view.

use crate::models::{
    BattleResult, CampaignEntry, PlayerStats, SortConfig, SortDirection, SortKey,
};

/// Compute one [`PlayerStats`] row per roster entry, in roster order.
///
/// A battle counts for a player when their name fills either slot. Scoring
/// awards 2 points for occupying the winning slot and 1 point otherwise: a
/// draw and a loss score the same under the campaign's rule. Battle
/// participants missing from the roster get no row.
pub fn compute_player_stats(
    roster: &[CampaignEntry],
    battles: &[BattleResult],
) -> Vec<PlayerStats> {
    roster
        .iter()
        .map(|entry| {
            let mut stats = PlayerStats {
                name: entry.player.clone(),
                army: entry.army.clone(),
                kp: entry.kp,
                ..PlayerStats::default()
            };
            for battle in battles {
                let (own_vp, opponent_vp) = if battle.player1 == entry.player {
                    (battle.player1_vp, battle.player2_vp)
                } else if battle.player2 == entry.player {
                    (battle.player2_vp, battle.player1_vp)
                } else {
                    continue;
                };
                stats.battles_played += 1;
                stats.vp_gained += own_vp;
                stats.vp_lost += opponent_vp;
                stats.points += if battle.won_by(&entry.player) { 2 } else { 1 };
            }
            stats
        })
        .collect()
}

/// The standings table: aggregates over a battle snapshot, plus sort state.
///
/// The snapshot is taken once, when the view is created. Battle-log mutations
/// made afterwards are not observed; replacing the roster recomputes the
/// aggregates over the same snapshot. Sorting reorders the displayed rows
/// only, never the aggregates.
#[derive(Clone, Debug)]
pub struct StandingsView {
    battles: Vec<BattleResult>,
    stats: Vec<PlayerStats>,
    sort: SortConfig,
}

impl StandingsView {
    /// Build the view from the roster and a snapshot of the battle
    /// collection. Rows start in roster order.
    pub fn new(roster: &[CampaignEntry], battles: Vec<BattleResult>) -> Self {
        let stats = compute_player_stats(roster, &battles);
        Self {
            battles,
            stats,
            sort: SortConfig::default(),
        }
    }

    /// Current rows, in display order.
    pub fn stats(&self) -> &[PlayerStats] {
        &self.stats
    }

    pub fn sort(&self) -> SortConfig {
        self.sort
    }

    /// Select a column: toggles direction on the current key, starts
    /// ascending on a new one, then reorders the rows (stable).
    pub fn sort_by(&mut self, key: SortKey) {
        self.sort = self.sort.select(key);
        let sort = self.sort;
        self.stats.sort_by(|a, b| {
            let ordering = sort.key.compare(a, b);
            match sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    /// Replace the roster and recompute every row over the view's original
    /// battle snapshot. Rows return to roster order; the sort state is kept
    /// for the next column selection.
    pub fn set_roster(&mut self, roster: &[CampaignEntry]) {
        self.stats = compute_player_stats(roster, &self.battles);
    }
}

//! Battle log: the battles-page state and its CRUD operations.
//!
//! The log owns the in-memory battle collection plus the store handle. Add,
//! update, and delete each rewrite the entire persisted collection before
//! returning; there is no partial persistence and no transaction log.

use crate::models::{BattleDraft, BattleId, BattleResult, ScoreboardError};
use crate::storage::BattleStore;

/// In-memory battle collection backed by a [`BattleStore`].
#[derive(Debug)]
pub struct BattleLog {
    results: Vec<BattleResult>,
    store: BattleStore,
    /// Next id to assign. Seeded from the highest persisted id so ids stay
    /// unique across restarts; never decreases within a session.
    next_id: BattleId,
}

impl BattleLog {
    /// Load the full collection from the store (absent or malformed data is
    /// an empty log).
    pub fn open(store: BattleStore) -> Self {
        let results = store.load();
        let next_id = results.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        Self {
            results,
            store,
            next_id,
        }
    }

    /// All recorded battles, oldest first.
    pub fn results(&self) -> &[BattleResult] {
        &self.results
    }

    pub fn get(&self, id: BattleId) -> Option<&BattleResult> {
        self.results.iter().find(|b| b.id == id)
    }

    /// Append a new battle with a freshly assigned id and persist. Existing
    /// order is preserved; the new record goes last.
    pub fn add(&mut self, draft: BattleDraft) -> Result<BattleId, ScoreboardError> {
        let id = self.next_id;
        self.next_id += 1;
        self.results.push(draft.into_result(id));
        self.store.save(&self.results)?;
        Ok(id)
    }

    /// Replace the record with `id` in place, keeping its position and id,
    /// and persist. All other records are untouched.
    pub fn update(&mut self, id: BattleId, draft: BattleDraft) -> Result<(), ScoreboardError> {
        let slot = self
            .results
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(ScoreboardError::BattleNotFound(id))?;
        *slot = draft.into_result(id);
        self.store.save(&self.results)?;
        Ok(())
    }

    /// Remove the record with `id`, keeping the relative order of the rest,
    /// and persist.
    pub fn delete(&mut self, id: BattleId) -> Result<(), ScoreboardError> {
        let idx = self
            .results
            .iter()
            .position(|b| b.id == id)
            .ok_or(ScoreboardError::BattleNotFound(id))?;
        self.results.remove(idx);
        self.store.save(&self.results)?;
        Ok(())
    }

    /// Explicitly rewrite the persisted snapshot (the "save" button). Returns
    /// the number of records written, for the confirmation message.
    pub fn save(&self) -> Result<usize, ScoreboardError> {
        self.store.save(&self.results)?;
        Ok(self.results.len())
    }
}

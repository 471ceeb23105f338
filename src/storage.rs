//! Persisted battle store: one key, one JSON file, rewritten whole.
//!
//! The store holds a single entry under `battleResults`: the JSON array of
//! every recorded battle. Every mutation rewrites the full serialized
//! collection; loads read it back in full. A missing or malformed file is
//! indistinguishable from "no data" and loads as the empty collection.

use crate::models::BattleResult;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Storage key for the battle collection (also the file stem on disk).
pub const BATTLE_RESULTS_KEY: &str = "battleResults";

/// Handle to the store directory. One process owns the directory exclusively;
/// there are no concurrent writers.
#[derive(Clone, Debug)]
pub struct BattleStore {
    dir: PathBuf,
}

impl BattleStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Path of the single persisted entry.
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", BATTLE_RESULTS_KEY))
    }

    /// Read the full battle collection. Absent or unparseable data collapses
    /// to the empty collection (there is no error path for loads).
    pub fn load(&self) -> Vec<BattleResult> {
        let path = self.path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(results) => results,
            Err(e) => {
                log::warn!(
                    "Discarding malformed battle store at {}: {}",
                    path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Overwrite the persisted collection with `results`.
    pub fn save(&self, results: &[BattleResult]) -> io::Result<()> {
        let json = serde_json::to_string(results)?;
        fs::write(self.path(), json)
    }
}

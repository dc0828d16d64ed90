//! Persisted high score.
//!
//! A single JSON record on disk, read once at startup and written once at
//! shutdown. A missing or unreadable store reads as zero and writes are
//! best-effort; neither direction can fail the game.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Default)]
struct HighScoreRecord {
    high_score: u32,
}

#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub const DEFAULT_PATH: &'static str = "highscore.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored score, treating every failure as "no record yet".
    pub fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(json) => match serde_json::from_str::<HighScoreRecord>(&json) {
                Ok(record) => {
                    log::info!(
                        "Loaded high score {} from {}",
                        record.high_score,
                        self.path.display()
                    );
                    record.high_score
                }
                Err(err) => {
                    log::warn!(
                        "High score store {} is unreadable ({}), starting from 0",
                        self.path.display(),
                        err
                    );
                    0
                }
            },
            Err(_) => {
                log::info!(
                    "No high score store at {}, starting fresh",
                    self.path.display()
                );
                0
            }
        }
    }

    /// Write the score back. Failures are logged and swallowed.
    pub fn save(&self, high_score: u32) {
        let record = HighScoreRecord { high_score };
        match serde_json::to_string(&record) {
            Ok(json) => {
                if let Err(err) = fs::write(&self.path, json) {
                    log::warn!(
                        "Failed to save high score to {}: {}",
                        self.path.display(),
                        err
                    );
                } else {
                    log::info!("High score {} saved", high_score);
                }
            }
            Err(err) => log::warn!("Failed to encode high score: {}", err),
        }
    }
}

impl Default for HighScoreStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> HighScoreStore {
        let mut path = std::env::temp_dir();
        path.push(format!("pixel_invaders_test_{name}_{}", std::process::id()));
        HighScoreStore::new(path)
    }

    #[test]
    fn test_missing_store_reads_as_zero() {
        let store = temp_store("missing");
        let _ = fs::remove_file(store.path());
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_round_trip() {
        let store = temp_store("round_trip");
        store.save(12_345);
        assert_eq!(store.load(), 12_345);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn test_corrupt_store_reads_as_zero() {
        let store = temp_store("corrupt");
        fs::write(store.path(), b"not json at all").unwrap();
        assert_eq!(store.load(), 0);
        let _ = fs::remove_file(store.path());
    }
}

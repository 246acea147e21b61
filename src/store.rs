//! High-score persistence across process runs.
//!
//! The core only announces HighScoreUpdated events; keeping the best score
//! on disk is the driver's job. The format is a single small JSON object.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredScore {
    high_score: u32,
}

/// Loads and saves the persisted high score.
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored best score. A missing file means no score yet.
    pub fn load(&self) -> Result<u32> {
        if !self.path.exists() {
            return Ok(0);
        }
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let stored: StoredScore = serde_json::from_str(&data)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        Ok(stored.high_score)
    }

    pub fn save(&self, high_score: u32) -> Result<()> {
        let data = serde_json::to_string(&StoredScore { high_score })?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

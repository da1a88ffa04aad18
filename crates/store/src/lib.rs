//! High-score persistence.
//!
//! One JSON file holds one record:
//!
//! ```json
//! {"high_score": 1234}
//! ```
//!
//! Reads and writes go through `anyhow::Result` internally, but the
//! [`HighScoreStore`] implementation never surfaces an error: a failed load
//! reads as 0 and a failed save is logged and dropped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use tui_flight_core as core;

use crate::core::HighScoreStore;

/// On-disk record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub high_score: u32,
}

/// High score stored in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record, reporting why it could not be read.
    pub fn try_load(&self) -> Result<HighScoreRecord> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        let record = serde_json::from_str(&text)
            .with_context(|| format!("parse {}", self.path.display()))?;
        Ok(record)
    }

    /// Write the record, replacing the file atomically.
    pub fn try_save(&self, record: HighScoreRecord) -> Result<()> {
        let json = serde_json::to_string(&record)?;
        write_text_atomic(&self.path, &json)
            .with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }
}

impl HighScoreStore for JsonFileStore {
    fn load_high_score(&mut self) -> u32 {
        match self.try_load() {
            Ok(record) => record.high_score,
            Err(err) => {
                // A missing file is the normal first-run case.
                let missing = err
                    .downcast_ref::<io::Error>()
                    .map(|e| e.kind() == io::ErrorKind::NotFound)
                    .unwrap_or(false);
                if missing {
                    debug!(path = %self.path.display(), "no high score file yet");
                } else {
                    warn!(error = %format!("{err:#}"), "high score unreadable, starting from 0");
                }
                0
            }
        }
    }

    fn save_high_score(&mut self, score: u32) {
        if let Err(err) = self.try_save(HighScoreRecord { high_score: score }) {
            warn!(error = %format!("{err:#}"), score, "high score not saved");
        }
    }
}

fn write_text_atomic(path: &Path, text: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = temp_path_for(path);
    fs::write(&tmp_path, text)?;
    if let Err(error) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(error);
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("highscore.json");
    let tmp_name = format!("{file_name}.tmp");
    match path.parent() {
        Some(parent) => parent.join(tmp_name),
        None => PathBuf::from(tmp_name),
    }
}

//! Best score on disk as a versioned JSON envelope
//!
//! Writes go to `<path>.tmp` first and are renamed over the real file, so a
//! crash mid-write leaves the previous best score intact.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::BestScoreStore;
use crate::error::StoreError;

/// Current on-disk format version
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    best_score: u32,
}

/// Best-score store backed by a JSON file
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

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl BestScoreStore for JsonFileStore {
    fn load_best_score(&self) -> Result<u32, StoreError> {
        if !self.path.exists() {
            log::info!("No best score at {}, starting fresh", self.path.display());
            return Ok(0);
        }

        let json = fs::read_to_string(&self.path)?;
        let envelope: Envelope = serde_json::from_str(&json)?;
        if envelope.version != FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion(envelope.version));
        }

        log::info!("Loaded best score {}", envelope.best_score);
        Ok(envelope.best_score)
    }

    fn save_best_score(&mut self, score: u32) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let envelope = Envelope {
            version: FORMAT_VERSION,
            best_score: score,
        };
        let tmp = self.tmp_path();
        fs::write(&tmp, serde_json::to_string(&envelope)?)?;
        fs::rename(&tmp, &self.path)?;

        log::info!("Best score {} saved to {}", score, self.path.display());
        Ok(())
    }
}

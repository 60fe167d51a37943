//! Best-score persistence
//!
//! Backends:
//! - `MemoryStore`: in-process, for tests and headless runs
//! - `JsonFileStore`: versioned JSON envelope, written through a temp file

pub mod file;

pub use file::JsonFileStore;

use crate::error::StoreError;

/// Durable key-value slot holding the best score
pub trait BestScoreStore {
    /// Read the stored best score. An empty store reports 0.
    fn load_best_score(&self) -> Result<u32, StoreError>;

    /// Overwrite the stored best score
    fn save_best_score(&mut self, score: u32) -> Result<(), StoreError>;
}

impl<S: BestScoreStore + ?Sized> BestScoreStore for Box<S> {
    fn load_best_score(&self) -> Result<u32, StoreError> {
        (**self).load_best_score()
    }

    fn save_best_score(&mut self, score: u32) -> Result<(), StoreError> {
        (**self).save_best_score(score)
    }
}

/// Keeps the best score in memory and records every save
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best: u32,
    /// Every value passed to `save_best_score`, oldest first
    pub saves: Vec<u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that starts out holding `best`
    pub fn with_best(best: u32) -> Self {
        Self {
            best,
            saves: Vec::new(),
        }
    }
}

impl BestScoreStore for MemoryStore {
    fn load_best_score(&self) -> Result<u32, StoreError> {
        Ok(self.best)
    }

    fn save_best_score(&mut self, score: u32) -> Result<(), StoreError> {
        self.best = score;
        self.saves.push(score);
        Ok(())
    }
}

//! Best score record
//!
//! A single integer persisted under one LocalStorage key. Anything that
//! does not parse as a non-negative integer reads as zero.

use crate::consts::BEST_SCORE_KEY;
use crate::platform::{KeyValueStore, StorageError};

/// Highest score reached on this device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BestScore {
    value: u64,
}

impl BestScore {
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    pub fn get(&self) -> u64 {
        self.value
    }

    /// Record a finished or in-progress score.
    /// Returns true if it beat the previous best.
    pub fn record(&mut self, score: u64) -> bool {
        if score > self.value {
            self.value = score;
            true
        } else {
            false
        }
    }

    /// Parse a stored value, treating garbage as zero
    pub fn parse(raw: &str) -> Self {
        Self::new(raw.trim().parse().unwrap_or(0))
    }

    /// Read the best score from storage
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get_item(BEST_SCORE_KEY) {
            Ok(Some(raw)) => {
                let best = Self::parse(&raw);
                log::info!("Loaded best score {}", best.value);
                best
            }
            Ok(None) => {
                log::info!("No best score found, starting fresh");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read best score: {}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), StorageError> {
        store.set_item(BEST_SCORE_KEY, &self.value.to_string())
    }
}

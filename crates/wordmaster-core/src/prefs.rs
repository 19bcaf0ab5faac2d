//! Persisted player preferences.
//!
//! Currently a single preference: the selected difficulty, stored as its
//! level name under a fixed key and read back at dashboard load.

use tracing::warn;

use crate::error::Result;
use crate::game::Difficulty;
use crate::storage::KeyValueStore;

/// Storage key for the difficulty preference.
pub const DIFFICULTY_KEY: &str = "difficulty";

#[derive(Debug)]
pub struct Preferences<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The selected difficulty; falls back to `Easy` when the preference is
    /// missing or unreadable.
    pub fn difficulty(&self) -> Difficulty {
        match self.store.read(DIFFICULTY_KEY) {
            Ok(Some(value)) => value.trim().parse().unwrap_or_else(|_| {
                warn!("Unrecognized difficulty preference {:?}, using Easy", value);
                Difficulty::default()
            }),
            Ok(None) => Difficulty::default(),
            Err(e) => {
                warn!("Failed to read difficulty preference: {}", e);
                Difficulty::default()
            }
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<()> {
        self.store.write(DIFFICULTY_KEY, difficulty.name())
    }
}

use chrono::Utc;
use tracing::warn;

use crate::error::{Error, Result};
use crate::storage::entry::ScoreEntry;
use crate::storage::slot::KeyValueStore;

/// Storage key for the serialized entry list.
pub const SCORES_KEY: &str = "playerScores";

/// Durable, ranked record of completed sessions.
///
/// The store is the single writer for its slot: entries are appended through
/// `add_entry`, kept sorted ascending by score (stable, so ties keep
/// insertion order), and the full list is rewritten on every change. Readers
/// get snapshot access through `entries`.
///
/// A failed write is logged and swallowed; the in-memory list remains
/// authoritative for the rest of the process lifetime, and `persist` can be
/// called again to retry.
#[derive(Debug)]
pub struct ScoreStore<S: KeyValueStore> {
    store: S,
    entries: Vec<ScoreEntry>,
}

impl<S: KeyValueStore> ScoreStore<S> {
    /// Load the entry list from the backing slot.
    ///
    /// A missing slot yields an empty store. Corrupt content is discarded
    /// with a warning and also yields an empty store; it never propagates
    /// as an error.
    pub fn load(store: S) -> Self {
        let entries = match store.read(SCORES_KEY) {
            Ok(Some(content)) => match serde_json::from_str::<Vec<ScoreEntry>>(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Stored scores are corrupt, resetting to empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read stored scores, starting empty: {}", e);
                Vec::new()
            }
        };

        Self { store, entries }
    }

    /// Record a completed session.
    ///
    /// Validates the entry, timestamps it, inserts it in rank order, and
    /// persists the updated list. Returns the created entry.
    pub fn add_entry(&mut self, name: &str, score: u32, guesses: Vec<String>) -> Result<ScoreEntry> {
        if name.is_empty() {
            return Err(Error::InvalidConfiguration(
                "player name must not be empty".to_string(),
            ));
        }
        if score == 0 {
            return Err(Error::InvalidConfiguration(
                "score must be at least 1".to_string(),
            ));
        }
        if guesses.len() as u32 != score {
            return Err(Error::InvalidConfiguration(format!(
                "guess count {} does not match score {}",
                guesses.len(),
                score
            )));
        }

        let entry = ScoreEntry {
            name: name.to_string(),
            score,
            date: Utc::now(),
            guesses,
        };

        self.entries.push(entry.clone());
        self.entries.sort_by_key(|e| e.score);

        if let Err(e) = self.persist() {
            warn!("Failed to persist scores, keeping in-memory list: {}", e);
        }

        Ok(entry)
    }

    /// Current entries, sorted ascending by score.
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rewrite the backing slot with the full current list.
    pub fn persist(&mut self) -> Result<()> {
        let content = serde_json::to_string(&self.entries)?;
        self.store.write(SCORES_KEY, &content)
    }
}

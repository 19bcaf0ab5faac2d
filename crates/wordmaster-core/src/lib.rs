pub mod error;
pub mod game;
pub mod prefs;
pub mod storage;

pub use error::{Error, Result};
pub use game::{Difficulty, GameSession, GuessResult, SessionSnapshot, normalize};
pub use prefs::{DIFFICULTY_KEY, Preferences};
pub use storage::{FileStore, KeyValueStore, MemoryStore, SCORES_KEY, ScoreEntry, ScoreStore};

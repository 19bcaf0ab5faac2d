use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted leaderboard record.
///
/// `score` is the number of attempts the player took to win: `guesses`
/// holds every submitted guess in order (the winning guess last), so its
/// length always equals `score`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
    pub date: DateTime<Utc>,
    pub guesses: Vec<String>,
}

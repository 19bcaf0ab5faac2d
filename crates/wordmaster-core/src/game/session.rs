use crate::error::{Error, Result};
use crate::game::Difficulty;

/// Normalize a word for comparison: trim surrounding whitespace, uppercase.
///
/// Idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Outcome of a single guess submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    Win,
    Retry,
}

/// Read-only view of a session for the UI shell and for building a
/// leaderboard entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub attempts: u32,
    pub guess_history: Vec<String>,
    pub won: bool,
}

/// One guessing play-through.
///
/// ## State transitions
///
/// - InProgress -> InProgress (on Retry)
/// - InProgress -> Won (on Win, terminal)
///
/// No guesses are accepted once won; `submit_guess` then fails with
/// `Error::InvalidState`. Duplicate guesses are appended and counted,
/// matching a player resubmitting the same word.
#[derive(Debug, Clone)]
pub struct GameSession {
    difficulty: Difficulty,
    word_list: Vec<String>,
    attempts: u32,
    guess_history: Vec<String>,
    won: bool,
}

impl GameSession {
    /// Create a session over the built-in word list for the level.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            word_list: difficulty.word_list().iter().map(|w| normalize(w)).collect(),
            attempts: 0,
            guess_history: Vec::new(),
            won: false,
        }
    }

    /// Create a session over a custom word list.
    ///
    /// List entries are normalized the same way guesses are. Fails with
    /// `InvalidConfiguration` if the list is empty.
    pub fn with_words<S: AsRef<str>>(difficulty: Difficulty, words: &[S]) -> Result<Self> {
        if words.is_empty() {
            return Err(Error::InvalidConfiguration(
                "word list must not be empty".to_string(),
            ));
        }

        Ok(Self {
            difficulty,
            word_list: words.iter().map(|w| normalize(w.as_ref())).collect(),
            attempts: 0,
            guess_history: Vec::new(),
            won: false,
        })
    }

    /// Submit one guess.
    ///
    /// Normalizes the input, records it in the history, increments the
    /// attempt counter, then checks exact membership against the word list.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessResult> {
        if self.won {
            return Err(Error::InvalidState);
        }

        let guess = normalize(raw);
        self.guess_history.push(guess.clone());
        self.attempts += 1;

        if self.word_list.iter().any(|w| *w == guess) {
            self.won = true;
            Ok(GuessResult::Win)
        } else {
            Ok(GuessResult::Retry)
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            attempts: self.attempts,
            guess_history: self.guess_history.clone(),
            won: self.won,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn guesses(&self) -> &[String] {
        &self.guess_history
    }

    pub fn is_won(&self) -> bool {
        self.won
    }
}

//! Play command: one interactive guessing round over stdin.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Result, bail};
use wordmaster_core::{Difficulty, FileStore, GameSession, GuessResult, Preferences, ScoreStore};

/// Run the play command
pub fn run(data_dir: &Path, name: &str, difficulty: Option<Difficulty>) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        bail!("player name must not be empty");
    }

    let level = difficulty
        .unwrap_or_else(|| Preferences::new(FileStore::new(data_dir)).difficulty());
    let mut session = GameSession::new(level);

    println!("Guess the word!");
    println!("Level: {} ({})", level, level.label());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Enter your guess: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // Input closed before a win; nothing to record
            println!();
            println!("Session abandoned after {} attempts.", session.attempts());
            return Ok(());
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match session.submit_guess(&line)? {
            GuessResult::Win => break,
            GuessResult::Retry => {
                println!("Try again! Attempts: {}", session.attempts());
            }
        }
    }

    println!("Good job! Won in {} attempts.", session.attempts());

    let mut store = ScoreStore::load(FileStore::new(data_dir));
    let snapshot = session.snapshot();
    let entry = store.add_entry(name, snapshot.attempts, snapshot.guess_history)?;

    let rank = store
        .entries()
        .iter()
        .position(|e| *e == entry)
        .map_or(store.len(), |i| i + 1);
    println!("Recorded for {}: rank #{} of {}.", entry.name, rank, store.len());

    Ok(())
}

//! Leaderboard command: ranked score list with colored console output.

use std::path::Path;

use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;
use wordmaster_core::{FileStore, ScoreStore};

/// Run the leaderboard command
pub fn run(data_dir: &Path, json: bool) -> Result<()> {
    let store = ScoreStore::load(FileStore::new(data_dir));

    if json {
        println!("{}", serde_json::to_string_pretty(store.entries())?);
        return Ok(());
    }

    if store.is_empty() {
        println!("No scores recorded yet.");
        return Ok(());
    }

    println!("{}", "Leaderboard".bold());
    for (rank, entry) in store.entries().iter().enumerate() {
        let date = entry
            .date
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string();

        println!(
            "{:>3}. {} - {} attempts",
            rank + 1,
            entry.name.bold(),
            entry.score
        );
        println!("     Guesses: {}", entry.guesses.join(", ").dimmed());
        println!("     Date: {}", date.dimmed());
    }

    Ok(())
}

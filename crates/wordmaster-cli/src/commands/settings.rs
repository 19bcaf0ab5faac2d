//! Settings command: show or change the persisted difficulty.

use std::path::Path;

use anyhow::Result;
use strum::IntoEnumIterator;
use wordmaster_core::{Difficulty, FileStore, Preferences};

/// Run the settings command
pub fn run(data_dir: &Path, set: Option<Difficulty>) -> Result<()> {
    let mut prefs = Preferences::new(FileStore::new(data_dir));

    if let Some(level) = set {
        prefs.set_difficulty(level)?;
        println!("Difficulty set to {} ({})", level, level.label());
        return Ok(());
    }

    let current = prefs.difficulty();
    println!("Select Level:");
    for level in Difficulty::iter() {
        let marker = if level == current { "*" } else { " " };
        println!(" {} {} ({})", marker, level, level.label());
    }

    Ok(())
}

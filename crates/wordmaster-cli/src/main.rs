use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wordmaster_core::Difficulty;

mod commands;

#[derive(Parser)]
#[command(name = "wordmaster")]
#[command(about = "Word-guessing game with a local leaderboard", version)]
struct Args {
    /// Directory holding the persisted game data
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play one guessing round
    Play {
        /// Player name shown on the leaderboard
        #[arg(short, long)]
        name: String,

        /// Level to play (easy, medium, hard); defaults to the saved setting
        #[arg(short = 'l', long)]
        difficulty: Option<Difficulty>,
    },
    /// Show the ranked score list
    Leaderboard {
        /// Emit the raw entry array as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or change the saved difficulty
    Settings {
        /// New difficulty (easy, medium, hard)
        #[arg(long, value_name = "LEVEL")]
        set: Option<Difficulty>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("wordmaster_core=info".parse()?),
        )
        .init();

    let args = Args::parse();

    match args.command {
        Command::Play { name, difficulty } => {
            commands::play::run(&args.data_dir, &name, difficulty)
        }
        Command::Leaderboard { json } => commands::leaderboard::run(&args.data_dir, json),
        Command::Settings { set } => commands::settings::run(&args.data_dir, set),
    }
}

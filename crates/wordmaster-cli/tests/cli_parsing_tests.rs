//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without executing the commands (which would read stdin or touch disk).

use std::path::PathBuf;

use clap::Parser;
use wordmaster_core::Difficulty;

// Re-create the Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "wordmaster")]
struct Args {
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    Play {
        #[arg(short, long)]
        name: String,
        #[arg(short = 'l', long)]
        difficulty: Option<Difficulty>,
    },
    Leaderboard {
        #[arg(long)]
        json: bool,
    },
    Settings {
        #[arg(long, value_name = "LEVEL")]
        set: Option<Difficulty>,
    },
}

#[test]
fn test_play_requires_name() {
    assert!(Args::try_parse_from(["wordmaster", "play"]).is_err());
    assert!(Args::try_parse_from(["wordmaster", "play", "--name", "Abinet"]).is_ok());
}

#[test]
fn test_play_difficulty_is_optional_and_case_insensitive() {
    let args = Args::try_parse_from(["wordmaster", "play", "--name", "Sam"]).unwrap();
    match args.command {
        Command::Play { difficulty, .. } => assert!(difficulty.is_none()),
        _ => panic!("expected play command"),
    }

    let args =
        Args::try_parse_from(["wordmaster", "play", "--name", "Sam", "-l", "hard"]).unwrap();
    match args.command {
        Command::Play { difficulty, .. } => assert_eq!(difficulty, Some(Difficulty::Hard)),
        _ => panic!("expected play command"),
    }
}

#[test]
fn test_data_dir_default() {
    let args = Args::try_parse_from(["wordmaster", "leaderboard"]).unwrap();
    assert_eq!(args.data_dir, PathBuf::from("."));

    let args =
        Args::try_parse_from(["wordmaster", "--data-dir", "/tmp/wm", "leaderboard"]).unwrap();
    assert_eq!(args.data_dir, PathBuf::from("/tmp/wm"));
}

#[test]
fn test_leaderboard_json_flag() {
    let args = Args::try_parse_from(["wordmaster", "leaderboard", "--json"]).unwrap();
    match args.command {
        Command::Leaderboard { json } => assert!(json),
        _ => panic!("expected leaderboard command"),
    }
}

#[test]
fn test_settings_set() {
    let args = Args::try_parse_from(["wordmaster", "settings"]).unwrap();
    match args.command {
        Command::Settings { set } => assert!(set.is_none()),
        _ => panic!("expected settings command"),
    }

    let args = Args::try_parse_from(["wordmaster", "settings", "--set", "Medium"]).unwrap();
    match args.command {
        Command::Settings { set } => assert_eq!(set, Some(Difficulty::Medium)),
        _ => panic!("expected settings command"),
    }
}

#[test]
fn test_unknown_difficulty_rejected() {
    assert!(Args::try_parse_from(["wordmaster", "settings", "--set", "Expert"]).is_err());
}

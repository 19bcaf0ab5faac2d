pub mod leaderboard;
pub mod play;
pub mod settings;

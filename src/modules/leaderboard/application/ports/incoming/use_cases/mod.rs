mod get_leaderboard;

pub use get_leaderboard::{GetLeaderboardError, GetLeaderboardUseCase};

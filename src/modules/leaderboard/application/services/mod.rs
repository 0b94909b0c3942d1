mod get_leaderboard_service;

pub use get_leaderboard_service::GetLeaderboardService;

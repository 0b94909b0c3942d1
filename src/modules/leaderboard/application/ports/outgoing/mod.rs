pub mod leaderboard_query;

pub use leaderboard_query::{LeaderboardQuery, LeaderboardQueryError};

pub mod leaderboard_query_postgres;

pub use leaderboard_query_postgres::LeaderboardQueryPostgres;

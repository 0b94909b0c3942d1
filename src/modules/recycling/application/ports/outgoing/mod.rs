pub mod user_stats_repository;

pub use user_stats_repository::{UserStatsRepository, UserStatsRepositoryError};

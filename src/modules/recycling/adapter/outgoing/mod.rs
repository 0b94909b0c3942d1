pub mod user_stats_repository_postgres;

pub use user_stats_repository_postgres::UserStatsRepositoryPostgres;

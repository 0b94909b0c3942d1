mod get_user_stats_service;
mod log_recycling_service;

pub use get_user_stats_service::GetUserStatsService;
pub use log_recycling_service::LogRecyclingService;

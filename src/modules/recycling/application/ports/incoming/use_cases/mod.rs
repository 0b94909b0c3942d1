mod get_user_stats;
mod log_recycling;

pub use get_user_stats::{GetUserStatsError, GetUserStatsUseCase};
pub use log_recycling::{
    LogRecyclingError, LogRecyclingInput, LogRecyclingOutput, LogRecyclingUseCase,
};

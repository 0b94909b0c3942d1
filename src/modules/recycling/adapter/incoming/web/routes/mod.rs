mod get_user_stats;
mod log_recycling;

pub use get_user_stats::*;
pub use log_recycling::*;

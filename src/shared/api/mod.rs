mod cors;
mod json_config;
mod response;

pub use cors::build_cors;
pub use json_config::custom_json_config;
pub use response::{ApiError, ApiResponse};

pub mod domain;
pub mod ports;
pub mod recycling_use_cases;
pub mod services;

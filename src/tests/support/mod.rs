pub mod app_state_builder;
pub mod auth_helper;
pub mod fixtures;
pub mod in_memory_store;
pub mod stubs;

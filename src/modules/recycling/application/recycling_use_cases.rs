use std::sync::Arc;

use crate::recycling::application::ports::incoming::use_cases::{
    GetUserStatsUseCase, LogRecyclingUseCase,
};

#[derive(Clone)]
pub struct RecyclingUseCases {
    pub log: Arc<dyn LogRecyclingUseCase + Send + Sync>,
    pub stats: Arc<dyn GetUserStatsUseCase + Send + Sync>,
}

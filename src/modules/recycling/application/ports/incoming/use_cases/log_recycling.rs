use async_trait::async_trait;
use serde_json::Value;

use crate::auth::application::domain::entities::{UserId, UserProfile};
use crate::recycling::application::domain::entities::{RecyclingInputError, RecyclingLog};
use crate::recycling::application::ports::outgoing::UserStatsRepositoryError;

/// Raw event as received; validated by the service before any storage call.
#[derive(Debug, Clone, Default)]
pub struct LogRecyclingInput {
    pub item_type: Option<String>,
    pub quantity: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct LogRecyclingOutput {
    pub user: UserProfile,
    pub recycling_log: RecyclingLog,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogRecyclingError {
    #[error("{0}")]
    InvalidInput(#[from] RecyclingInputError),

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserStatsRepositoryError> for LogRecyclingError {
    fn from(err: UserStatsRepositoryError) -> Self {
        match err {
            UserStatsRepositoryError::UserNotFound => LogRecyclingError::UserNotFound,
            UserStatsRepositoryError::DatabaseError(msg) => LogRecyclingError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait LogRecyclingUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        input: LogRecyclingInput,
    ) -> Result<LogRecyclingOutput, LogRecyclingError>;
}

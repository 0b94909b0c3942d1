use async_trait::async_trait;

use crate::auth::application::domain::entities::{UserId, UserStats};
use crate::recycling::application::ports::outgoing::UserStatsRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserStatsError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserStatsRepositoryError> for GetUserStatsError {
    fn from(err: UserStatsRepositoryError) -> Self {
        match err {
            UserStatsRepositoryError::UserNotFound => GetUserStatsError::UserNotFound,
            UserStatsRepositoryError::DatabaseError(msg) => GetUserStatsError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait GetUserStatsUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<UserStats, GetUserStatsError>;
}

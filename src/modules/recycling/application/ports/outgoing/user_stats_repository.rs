use async_trait::async_trait;

use crate::auth::application::domain::entities::{UserAccount, UserId, UserStats};
use crate::recycling::application::domain::entities::StatsDelta;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserStatsRepositoryError {
    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserStatsRepository: Send + Sync {
    async fn find_stats(&self, user_id: UserId) -> Result<UserStats, UserStatsRepositoryError>;

    /// Adds `delta` to the user's counters in one atomic statement and returns
    /// the account as it is after the write.
    async fn increment_stats(
        &self,
        user_id: UserId,
        delta: StatsDelta,
    ) -> Result<UserAccount, UserStatsRepositoryError>;
}

use async_trait::async_trait;

use crate::leaderboard::application::domain::entities::LeaderboardEntry;
use crate::leaderboard::application::ports::outgoing::LeaderboardQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetLeaderboardError {
    #[error("{0}")]
    InvalidLimit(String),

    #[error("Query error: {0}")]
    QueryError(#[from] LeaderboardQueryError),
}

#[async_trait]
pub trait GetLeaderboardUseCase: Send + Sync {
    async fn execute(&self, limit: Option<u64>) -> Result<Vec<LeaderboardEntry>, GetLeaderboardError>;
}

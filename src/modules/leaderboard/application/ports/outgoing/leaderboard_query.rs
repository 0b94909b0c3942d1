use async_trait::async_trait;

use crate::leaderboard::application::domain::entities::LeaderboardCandidate;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LeaderboardQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait LeaderboardQuery: Send + Sync {
    /// At most `limit` users, best first.
    async fn top_users(&self, limit: u64) -> Result<Vec<LeaderboardCandidate>, LeaderboardQueryError>;
}

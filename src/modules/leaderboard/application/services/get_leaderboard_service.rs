use async_trait::async_trait;

use crate::leaderboard::application::domain::entities::{
    rank, LeaderboardEntry, LeaderboardLimits,
};
use crate::leaderboard::application::ports::incoming::use_cases::{
    GetLeaderboardError, GetLeaderboardUseCase,
};
use crate::leaderboard::application::ports::outgoing::LeaderboardQuery;

pub struct GetLeaderboardService<Q>
where
    Q: LeaderboardQuery,
{
    query: Q,
    limits: LeaderboardLimits,
}

impl<Q> GetLeaderboardService<Q>
where
    Q: LeaderboardQuery,
{
    pub fn new(query: Q, limits: LeaderboardLimits) -> Self {
        Self { query, limits }
    }
}

#[async_trait]
impl<Q> GetLeaderboardUseCase for GetLeaderboardService<Q>
where
    Q: LeaderboardQuery + Send + Sync,
{
    async fn execute(
        &self,
        limit: Option<u64>,
    ) -> Result<Vec<LeaderboardEntry>, GetLeaderboardError> {
        let limit = self
            .limits
            .resolve(limit)
            .map_err(GetLeaderboardError::InvalidLimit)?;

        let candidates = self.query.top_users(limit).await?;

        // Re-rank so the output does not depend on the adapter's ordering.
        Ok(rank(candidates, limit))
    }
}

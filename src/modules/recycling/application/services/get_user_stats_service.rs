use async_trait::async_trait;

use crate::auth::application::domain::entities::{UserId, UserStats};
use crate::recycling::application::ports::incoming::use_cases::{
    GetUserStatsError, GetUserStatsUseCase,
};
use crate::recycling::application::ports::outgoing::UserStatsRepository;

pub struct GetUserStatsService<R>
where
    R: UserStatsRepository,
{
    repository: R,
}

impl<R> GetUserStatsService<R>
where
    R: UserStatsRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetUserStatsUseCase for GetUserStatsService<R>
where
    R: UserStatsRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<UserStats, GetUserStatsError> {
        Ok(self.repository.find_stats(user_id).await?)
    }
}

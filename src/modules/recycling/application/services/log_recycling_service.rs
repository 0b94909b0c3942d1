use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::recycling::application::domain::entities::{
    MaterialType, Quantity, RecyclingInputError, RecyclingLog, StatsDelta,
};
use crate::recycling::application::ports::incoming::use_cases::{
    LogRecyclingError, LogRecyclingInput, LogRecyclingOutput, LogRecyclingUseCase,
};
use crate::recycling::application::ports::outgoing::UserStatsRepository;

pub struct LogRecyclingService<R>
where
    R: UserStatsRepository,
{
    repository: R,
}

impl<R> LogRecyclingService<R>
where
    R: UserStatsRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    fn validate(input: &LogRecyclingInput) -> Result<(MaterialType, Quantity), RecyclingInputError> {
        let item_type = input
            .item_type
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or(RecyclingInputError::MissingFields)?;
        let quantity = input
            .quantity
            .as_ref()
            .filter(|v| !v.is_null())
            .ok_or(RecyclingInputError::MissingFields)?;

        let material = MaterialType::parse(item_type)?;
        let quantity = Quantity::from_json(quantity)?;

        Ok((material, quantity))
    }
}

#[async_trait]
impl<R> LogRecyclingUseCase for LogRecyclingService<R>
where
    R: UserStatsRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        input: LogRecyclingInput,
    ) -> Result<LogRecyclingOutput, LogRecyclingError> {
        let (material, quantity) = Self::validate(&input).map_err(|e| {
            warn!(user_id = %user_id, error = %e, "Rejected recycling event");
            e
        })?;

        let delta = StatsDelta::for_event(material, quantity);
        let account = self.repository.increment_stats(user_id, delta).await?;

        info!(
            user_id = %user_id,
            item_type = %material,
            quantity = delta.items,
            points = delta.points,
            "Recycling event applied"
        );

        Ok(LogRecyclingOutput {
            user: account.profile(),
            recycling_log: RecyclingLog::new(material, delta, Utc::now()),
        })
    }
}

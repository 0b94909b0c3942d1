use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{DatabaseConnection, EntityTrait, FromQueryResult, QueryOrder, QuerySelect};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity,
};
use crate::auth::application::domain::entities::{UserId, UserStats};
use crate::leaderboard::application::domain::entities::LeaderboardCandidate;
use crate::leaderboard::application::ports::outgoing::{LeaderboardQuery, LeaderboardQueryError};

/// Only the columns ranking needs; credentials never leave the database.
#[derive(Debug, FromQueryResult)]
struct LeaderboardRow {
    id: Uuid,
    username: String,
    total_items_recycled: i64,
    co2_saved: f64,
    points: i64,
    created_at: DateTimeWithTimeZone,
}

impl From<LeaderboardRow> for LeaderboardCandidate {
    fn from(row: LeaderboardRow) -> Self {
        LeaderboardCandidate {
            id: UserId::from(row.id),
            username: row.username,
            stats: UserStats {
                total_items_recycled: row.total_items_recycled,
                co2_saved: row.co2_saved,
                points: row.points,
            },
            created_at: row.created_at.into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct LeaderboardQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LeaderboardQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LeaderboardQuery for LeaderboardQueryPostgres {
    async fn top_users(
        &self,
        limit: u64,
    ) -> Result<Vec<LeaderboardCandidate>, LeaderboardQueryError> {
        let rows = UserEntity::find()
            .select_only()
            .columns([
                UserColumn::Id,
                UserColumn::Username,
                UserColumn::TotalItemsRecycled,
                UserColumn::Co2Saved,
                UserColumn::Points,
                UserColumn::CreatedAt,
            ])
            .order_by_desc(UserColumn::Points)
            .order_by_asc(UserColumn::CreatedAt)
            .order_by_asc(UserColumn::Id)
            .limit(limit)
            .into_model::<LeaderboardRow>()
            .all(&*self.db)
            .await
            .map_err(|e| LeaderboardQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(LeaderboardCandidate::from).collect())
    }
}

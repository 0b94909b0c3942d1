use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity,
};
use crate::auth::application::domain::entities::{UserAccount, UserId, UserStats};
use crate::recycling::application::domain::entities::StatsDelta;
use crate::recycling::application::ports::outgoing::{
    UserStatsRepository, UserStatsRepositoryError,
};

#[derive(Clone, Debug)]
pub struct UserStatsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserStatsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStatsRepository for UserStatsRepositoryPostgres {
    async fn find_stats(&self, user_id: UserId) -> Result<UserStats, UserStatsRepositoryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserStatsRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserStatsRepositoryError::UserNotFound)?;

        Ok(UserStats {
            total_items_recycled: user.total_items_recycled,
            co2_saved: user.co2_saved,
            points: user.points,
        })
    }

    async fn increment_stats(
        &self,
        user_id: UserId,
        delta: StatsDelta,
    ) -> Result<UserAccount, UserStatsRepositoryError> {
        // Single UPDATE ... SET col = col + $n RETURNING *; concurrent events on
        // the same row serialize on the row lock.
        let updated = UserEntity::update_many()
            .col_expr(
                UserColumn::TotalItemsRecycled,
                Expr::col(UserColumn::TotalItemsRecycled).add(delta.items),
            )
            .col_expr(
                UserColumn::Co2Saved,
                Expr::col(UserColumn::Co2Saved).add(delta.co2_saved),
            )
            .col_expr(
                UserColumn::Points,
                Expr::col(UserColumn::Points).add(delta.points),
            )
            .filter(UserColumn::Id.eq(user_id.value()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| UserStatsRepositoryError::DatabaseError(e.to_string()))?;

        let row = updated
            .into_iter()
            .next()
            .ok_or(UserStatsRepositoryError::UserNotFound)?;

        row.to_account()
            .map_err(UserStatsRepositoryError::DatabaseError)
    }
}

use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserAccount, UserId, UserRole, UserStats};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub avatar: Option<String>,
    pub role: String,
    pub total_items_recycled: i64,
    #[sea_orm(column_type = "Double")]
    pub co2_saved: f64,
    pub points: i64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}

impl Model {
    /// Fails only when the stored role is outside the known set.
    pub fn to_account(self) -> Result<UserAccount, String> {
        let role = self.role.parse::<UserRole>()?;

        Ok(UserAccount {
            id: UserId::from(self.id),
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            avatar: self.avatar,
            role,
            stats: UserStats {
                total_items_recycled: self.total_items_recycled,
                co2_saved: self.co2_saved,
                points: self.points,
            },
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        })
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Model;
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    /// A row with zeroed stats, for MockDatabase query results.
    pub fn user_row(id: Uuid, username: &str) -> Model {
        row_at(id, username, 0, Utc::now())
    }

    pub fn row_at(id: Uuid, username: &str, points: i64, created_at: DateTime<Utc>) -> Model {
        Model {
            id,
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "$argon2id$v=19$m=4096,t=3,p=1$c2FsdA$aGFzaA".to_string(),
            avatar: None,
            role: "user".to_string(),
            total_items_recycled: points / 10,
            co2_saved: 0.0,
            points,
            created_at: created_at.into(),
            updated_at: created_at.into(),
        }
    }
}

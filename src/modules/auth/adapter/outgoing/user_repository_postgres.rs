use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserAccount, UserId, UserRole};
use crate::auth::application::ports::outgoing::{
    NewUser, ProfileChanges, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_write_error(e: DbErr) -> UserRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return UserRepositoryError::UserAlreadyExists;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }

    fn to_account(model: UserModel) -> Result<UserAccount, UserRepositoryError> {
        model
            .to_account()
            .map_err(UserRepositoryError::DatabaseError)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<UserAccount, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(user.username),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            avatar: Set(None),
            role: Set(UserRole::User.as_str().to_string()),
            total_items_recycled: Set(0),
            co2_saved: Set(0.0),
            points: Set(0),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Self::to_account(inserted)
    }

    async fn update_profile(
        &self,
        user_id: UserId,
        changes: ProfileChanges,
    ) -> Result<UserAccount, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        if changes.is_empty() {
            return Self::to_account(user);
        }

        // Stats columns are never part of this write.
        let mut active_user: UserActiveModel = user.into();
        if let Some(username) = changes.username {
            active_user.username = Set(username);
        }
        if let Some(email) = changes.email {
            active_user.email = Set(email);
        }
        if let Some(password_hash) = changes.password_hash {
            active_user.password_hash = Set(password_hash);
        }
        if let Some(avatar) = changes.avatar {
            active_user.avatar = Set(Some(avatar));
        }

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Self::to_account(updated)
    }
}

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::auth::application::{
    domain::{
        credentials::{normalize_avatar_url, normalize_email, normalize_username, validate_password},
        entities::{UserId, UserProfile},
    },
    ports::{
        incoming::use_cases::{UpdateProfileError, UpdateProfileInput, UpdateUserProfileUseCase},
        outgoing::{PasswordHasher, ProfileChanges, UserQuery, UserRepository},
    },
};

pub struct UpdateUserProfileService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> UpdateUserProfileService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }

    /// Fails when `username`/`email` already belongs to somebody other than `user_id`.
    async fn ensure_available(
        &self,
        user_id: UserId,
        username: Option<&str>,
        email: Option<&str>,
    ) -> Result<(), UpdateProfileError> {
        if let Some(username) = username {
            let owner = self
                .query
                .find_by_username(username)
                .await
                .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))?
                .map(|account| account.id);
            if owner.is_some_and(|id| id != user_id) {
                return Err(UpdateProfileError::UserAlreadyExists);
            }
        }

        if let Some(email) = email {
            let owner = self
                .query
                .find_by_email(email)
                .await
                .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))?
                .map(|account| account.id);
            if owner.is_some_and(|id| id != user_id) {
                return Err(UpdateProfileError::UserAlreadyExists);
            }
        }

        Ok(())
    }
}

#[async_trait]
impl<Q, R> UpdateUserProfileUseCase for UpdateUserProfileService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        input: UpdateProfileInput,
    ) -> Result<UserProfile, UpdateProfileError> {
        let username = input.username.as_deref().map(normalize_username).transpose()?;
        let email = input.email.as_deref().map(normalize_email).transpose()?;
        let avatar = input.avatar.as_deref().map(normalize_avatar_url).transpose()?;
        if let Some(password) = input.password.as_deref() {
            validate_password(password)?;
        }

        if username.is_none() && email.is_none() && avatar.is_none() && input.password.is_none() {
            return Err(UpdateProfileError::EmptyUpdate);
        }

        self.ensure_available(user_id, username.as_deref(), email.as_deref())
            .await?;

        let password_hash = match input.password.as_deref() {
            Some(password) => Some(self.password_hasher.hash_password(password).await?),
            None => None,
        };

        let changes = ProfileChanges {
            username,
            email,
            password_hash,
            avatar,
        };

        let updated = self.repository.update_profile(user_id, changes).await?;

        info!(user_id = %user_id, "Profile updated");

        Ok(updated.profile())
    }
}

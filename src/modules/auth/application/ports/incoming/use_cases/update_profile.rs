use async_trait::async_trait;

use crate::auth::application::{
    domain::{
        credentials::CredentialError,
        entities::{UserId, UserProfile},
    },
    ports::outgoing::{HashError, UserRepositoryError},
};

#[derive(Clone, Debug, Default)]
pub struct UpdateProfileInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, thiserror::Error, Clone)]
pub enum UpdateProfileError {
    #[error("No profile fields to update")]
    EmptyUpdate,

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] CredentialError),

    #[error("Username or email already taken")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Password hashing failed: {0}")]
    HashingFailed(#[from] HashError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserRepositoryError> for UpdateProfileError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::UserAlreadyExists => UpdateProfileError::UserAlreadyExists,
            UserRepositoryError::UserNotFound => UpdateProfileError::UserNotFound,
            UserRepositoryError::DatabaseError(msg) => UpdateProfileError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait UpdateUserProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        input: UpdateProfileInput,
    ) -> Result<UserProfile, UpdateProfileError>;
}

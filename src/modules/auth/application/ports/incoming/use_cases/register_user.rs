use async_trait::async_trait;

use crate::auth::application::domain::credentials::CredentialError;
use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::ports::outgoing::{
    HashError, TokenError, UserQueryError, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct RegisterUserOutput {
    pub user: UserProfile,
    pub token: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] CredentialError),

    #[error("User with email or username already exists")]
    UserAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(#[from] HashError),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(TokenError),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),

    #[error("Repository error: {0}")]
    RepositoryError(UserRepositoryError),
}

impl From<UserRepositoryError> for RegisterUserError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            // A concurrent registration can still win the race past the pre-check.
            UserRepositoryError::UserAlreadyExists => RegisterUserError::UserAlreadyExists,
            other => RegisterUserError::RepositoryError(other),
        }
    }
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, input: RegisterUserInput)
        -> Result<RegisterUserOutput, RegisterUserError>;
}

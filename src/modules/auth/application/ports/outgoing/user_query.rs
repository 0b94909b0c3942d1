// application/ports/outgoing/user_query.rs
use async_trait::async_trait;

use crate::auth::application::domain::entities::{UserAccount, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored row is invalid: {0}")]
    CorruptRow(String),
}

/// Lookups return the full account; callers project it with `UserAccount::profile`
/// before anything leaves the service.
#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserAccount>, UserQueryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, UserQueryError>;
    async fn find_by_username(&self, username: &str)
        -> Result<Option<UserAccount>, UserQueryError>;
}

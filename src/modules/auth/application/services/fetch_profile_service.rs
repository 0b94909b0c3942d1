use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{UserId, UserProfile},
    ports::{
        incoming::use_cases::{FetchProfileError, FetchUserProfileUseCase},
        outgoing::UserQuery,
    },
};

pub struct FetchUserProfileService<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> FetchUserProfileService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> FetchUserProfileUseCase for FetchUserProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<UserProfile, FetchProfileError> {
        self.query
            .find_by_id(user_id)
            .await?
            .map(|account| account.profile())
            .ok_or(FetchProfileError::UserNotFound)
    }
}

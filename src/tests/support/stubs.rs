use async_trait::async_trait;

use crate::auth::application::domain::entities::{UserId, UserProfile, UserStats};
use crate::auth::application::ports::incoming::use_cases::{
    FetchProfileError, FetchUserProfileUseCase, LoginError, LoginRequest, LoginUserOutput,
    LoginUserUseCase, RegisterUserError, RegisterUserInput, RegisterUserOutput,
    RegisterUserUseCase, UpdateProfileError, UpdateProfileInput, UpdateUserProfileUseCase,
};
use crate::auth::application::ports::outgoing::{HashError, PasswordHasher};
use crate::leaderboard::application::domain::entities::LeaderboardEntry;
use crate::leaderboard::application::ports::incoming::use_cases::{
    GetLeaderboardError, GetLeaderboardUseCase,
};
use crate::recycling::application::ports::incoming::use_cases::{
    GetUserStatsError, GetUserStatsUseCase, LogRecyclingError, LogRecyclingInput,
    LogRecyclingOutput, LogRecyclingUseCase,
};

/// Deterministic stand-in for the real hashers: `hashed::<password>`.
#[derive(Default, Clone, Copy)]
pub struct FakePasswordHasher;

#[async_trait]
impl PasswordHasher for FakePasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed::{password}"))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed::{password}"))
    }
}

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl RegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _input: RegisterUserInput,
    ) -> Result<RegisterUserOutput, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserOutput, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchUserProfileUseCase;

#[async_trait]
impl FetchUserProfileUseCase for StubFetchUserProfileUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<UserProfile, FetchProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateUserProfileUseCase;

#[async_trait]
impl UpdateUserProfileUseCase for StubUpdateUserProfileUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        _input: UpdateProfileInput,
    ) -> Result<UserProfile, UpdateProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLogRecyclingUseCase;

#[async_trait]
impl LogRecyclingUseCase for StubLogRecyclingUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        _input: LogRecyclingInput,
    ) -> Result<LogRecyclingOutput, LogRecyclingError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetUserStatsUseCase;

#[async_trait]
impl GetUserStatsUseCase for StubGetUserStatsUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<UserStats, GetUserStatsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetLeaderboardUseCase;

#[async_trait]
impl GetLeaderboardUseCase for StubGetLeaderboardUseCase {
    async fn execute(
        &self,
        _limit: Option<u64>,
    ) -> Result<Vec<LeaderboardEntry>, GetLeaderboardError> {
        unimplemented!("Not used in this test")
    }
}

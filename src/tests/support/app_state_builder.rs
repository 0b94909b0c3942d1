use actix_web::web;
use std::sync::Arc;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::use_cases::{
    FetchUserProfileUseCase, LoginUserUseCase, RegisterUserUseCase, UpdateUserProfileUseCase,
};
use crate::leaderboard::application::ports::incoming::use_cases::GetLeaderboardUseCase;
use crate::recycling::application::ports::incoming::use_cases::{
    GetUserStatsUseCase, LogRecyclingUseCase,
};
use crate::recycling::application::recycling_use_cases::RecyclingUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Every use case starts as a stub that panics if called; tests swap in what they exercise.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    recycling: RecyclingUseCases,
    leaderboard: Arc<dyn GetLeaderboardUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                register: Arc::new(StubRegisterUserUseCase),
                login: Arc::new(StubLoginUserUseCase),
                fetch_profile: Arc::new(StubFetchUserProfileUseCase),
                update_profile: Arc::new(StubUpdateUserProfileUseCase),
            },
            recycling: RecyclingUseCases {
                log: Arc::new(StubLogRecyclingUseCase),
                stats: Arc::new(StubGetUserStatsUseCase),
            },
            leaderboard: Arc::new(StubGetLeaderboardUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register(mut self, uc: impl RegisterUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.register = Arc::new(uc);
        self
    }

    pub fn with_login(mut self, uc: impl LoginUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_fetch_profile(
        mut self,
        uc: impl FetchUserProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl UpdateUserProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.update_profile = Arc::new(uc);
        self
    }

    /// Keeps a handle on the use case so the test can inspect it afterwards.
    pub fn with_update_profile_arc(
        mut self,
        uc: Arc<dyn UpdateUserProfileUseCase + Send + Sync>,
    ) -> Self {
        self.auth.update_profile = uc;
        self
    }

    pub fn with_log_recycling(
        mut self,
        uc: impl LogRecyclingUseCase + Send + Sync + 'static,
    ) -> Self {
        self.recycling.log = Arc::new(uc);
        self
    }

    pub fn with_user_stats(mut self, uc: impl GetUserStatsUseCase + Send + Sync + 'static) -> Self {
        self.recycling.stats = Arc::new(uc);
        self
    }

    pub fn with_leaderboard(
        mut self,
        uc: impl GetLeaderboardUseCase + Send + Sync + 'static,
    ) -> Self {
        self.leaderboard = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            recycling: self.recycling,
            leaderboard: self.leaderboard,
        })
    }
}

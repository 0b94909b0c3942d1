use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    FetchUserProfileUseCase, LoginUserUseCase, RegisterUserUseCase, UpdateUserProfileUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub fetch_profile: Arc<dyn FetchUserProfileUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateUserProfileUseCase + Send + Sync>,
}

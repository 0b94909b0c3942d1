mod fetch_profile;
mod login_user;
mod register_user;
mod update_profile;

pub use fetch_profile::{FetchProfileError, FetchUserProfileUseCase};
pub use login_user::{
    LoginError, LoginRequest, LoginRequestError, LoginUserOutput, LoginUserUseCase,
};
pub use register_user::{
    RegisterUserError, RegisterUserInput, RegisterUserOutput, RegisterUserUseCase,
};
pub use update_profile::{UpdateProfileError, UpdateProfileInput, UpdateUserProfileUseCase};

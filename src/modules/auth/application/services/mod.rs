mod fetch_profile_service;
mod login_user_service;
mod register_user_service;
mod update_profile_service;

pub use fetch_profile_service::FetchUserProfileService;
pub use login_user_service::LoginUserService;
pub(crate) use login_user_service::UNKNOWN_USER_HASH;
pub use register_user_service::RegisterUserService;
pub use update_profile_service::UpdateUserProfileService;

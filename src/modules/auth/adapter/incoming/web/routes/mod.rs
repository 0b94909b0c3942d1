mod fetch_user;
mod login_user;
mod logout_user;
mod register_user;
mod update_profile;

pub use fetch_user::*;
pub use login_user::*;
pub use logout_user::*;
pub use register_user::*;
pub use update_profile::*;

use actix_web::HttpResponse;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::credentials::CredentialError;
use crate::auth::application::domain::entities::UserProfile;
use crate::shared::api::ApiResponse;

/// `{ user, token }` returned by register and login.
#[derive(Serialize, ToSchema)]
pub struct AuthSessionResponse {
    pub user: UserProfile,
    /// Bearer token, valid for one day
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
}

/// `{ user }`
#[derive(Serialize, ToSchema)]
pub struct UserEnvelope {
    pub user: UserProfile,
}

pub(crate) fn credential_error_response(err: &CredentialError) -> HttpResponse {
    let code = match err {
        CredentialError::EmptyUsername
        | CredentialError::UsernameLength
        | CredentialError::UsernameCharacters => "INVALID_USERNAME",
        CredentialError::EmptyEmail | CredentialError::InvalidEmailFormat => "INVALID_EMAIL",
        CredentialError::EmptyPassword | CredentialError::PasswordLength => "INVALID_PASSWORD",
        CredentialError::InvalidAvatarUrl => "INVALID_AVATAR",
    };
    ApiResponse::bad_request(code, &err.to_string())
}

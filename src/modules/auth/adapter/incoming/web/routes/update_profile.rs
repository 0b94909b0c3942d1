use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::{
    UpdateProfileError, UpdateProfileInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::{credential_error_response, UserEnvelope};

/// Fields to change; omitted fields keep their current value.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    #[schema(example = "ecohero")]
    pub username: Option<String>,
    #[schema(example = "ecohero@example.com")]
    pub email: Option<String>,
    pub password: Option<String>,
    #[schema(example = "https://cdn.example.com/avatars/ecohero.png")]
    pub avatar: Option<String>,
}

fn map_update_error(err: UpdateProfileError, user: &AuthenticatedUser) -> HttpResponse {
    match err {
        UpdateProfileError::EmptyUpdate => {
            ApiResponse::bad_request("VALIDATION_ERROR", "No profile fields to update")
        }
        UpdateProfileError::InvalidInput(e) => {
            warn!(user_id = %user.user_id, error = %e, "Invalid profile update");
            credential_error_response(&e)
        }
        UpdateProfileError::UserAlreadyExists => {
            ApiResponse::conflict("USER_ALREADY_EXISTS", "Username or email already taken")
        }
        UpdateProfileError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        other => {
            error!(user_id = %user.user_id, error = %other, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}

/// Update the caller's username, email, password or avatar
#[utoipa::path(
    put,
    path = "/api/v1/users/profile",
    tag = "users",
    security(("BearerAuth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = UserEnvelope),
        (status = 400, description = "Validation error or empty update", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse),
        (status = 409, description = "Username or email taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/v1/users/profile")]
pub async fn update_user_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let input = UpdateProfileInput {
        username: req.username,
        email: req.email,
        password: req.password,
        avatar: req.avatar,
    };

    match data.auth.update_profile.execute(user.user_id, input).await {
        Ok(profile) => {
            info!(user_id = %user.user_id, "Profile updated");
            ApiResponse::success("Profile updated", UserEnvelope { user: profile })
        }
        Err(e) => map_update_error(e, &user),
    }
}

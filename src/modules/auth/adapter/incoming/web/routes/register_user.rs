use crate::api::schemas::ErrorResponse;
use crate::auth::application::ports::incoming::use_cases::{RegisterUserError, RegisterUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::{credential_error_response, AuthSessionResponse};

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    /// 3-30 characters of letters, digits, '_', '.', '-'; stored lowercase
    #[schema(example = "greenfan")]
    pub username: String,

    /// Email address; stored lowercase
    #[schema(example = "greenfan@example.com")]
    pub email: String,

    /// Password (8-128 characters)
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

fn map_register_error(err: RegisterUserError, req: &RegisterUserRequest) -> HttpResponse {
    match &err {
        RegisterUserError::InvalidInput(e) => {
            warn!(username = %req.username, error = %e, "Invalid registration input");
            credential_error_response(e)
        }

        RegisterUserError::UserAlreadyExists => {
            warn!(username = %req.username, "User already exists");
            ApiResponse::conflict(
                "USER_ALREADY_EXISTS",
                "User with email or username already exists",
            )
        }

        other => {
            error!(username = %req.username, error = %other, "User registration failed");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
///
/// Creates an account with zeroed recycling stats and returns a session token.
#[utoipa::path(
    post,
    path = "/api/v1/users/register",
    tag = "users",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered", body = AuthSessionResponse),
        (status = 400, description = "Validation error", body = ErrorResponse,
            example = json!({
                "success": false,
                "message": "Password must be between 8 and 128 characters",
                "errors": [{ "code": "INVALID_PASSWORD", "message": "Password must be between 8 and 128 characters" }]
            })
        ),
        (status = 409, description = "Username or email taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/users/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(username = %req.username, "User registration attempt");

    let input = RegisterUserInput {
        username: req.username.clone(),
        email: req.email.clone(),
        password: req.password.clone(),
    };

    match data.auth.register.execute(input).await {
        Ok(output) => {
            info!(user_id = %output.user.id, "User registered");
            ApiResponse::created(
                "User registered",
                AuthSessionResponse {
                    user: output.user,
                    token: output.token,
                },
            )
        }
        Err(e) => map_register_error(e, &req),
    }
}

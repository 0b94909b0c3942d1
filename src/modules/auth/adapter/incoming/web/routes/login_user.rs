use crate::api::schemas::ErrorResponse;
use crate::auth::application::ports::incoming::use_cases::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::AuthSessionResponse;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Email address
    #[schema(example = "greenfan@example.com")]
    pub email: String,

    /// Password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// User login
///
/// Unknown email and wrong password produce the same 401.
#[utoipa::path(
    post,
    path = "/api/v1/users/login",
    tag = "users",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = AuthSessionResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse,
            example = json!({
                "success": false,
                "message": "Invalid credentials",
                "errors": [{ "code": "INVALID_CREDENTIALS", "message": "Invalid credentials" }]
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/users/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = req.into_inner();

    match data.auth.login.execute(request).await {
        Ok(output) => {
            info!(user_id = %output.user.id, "Login successful");
            ApiResponse::success(
                "Login successful",
                AuthSessionResponse {
                    user: output.user,
                    token: output.token,
                },
            )
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid credentials")
        }

        Err(e) => {
            error!(error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}

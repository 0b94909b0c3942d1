use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use actix_web::{post, Responder};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {}

/// Log out
///
/// Tokens are stateless and expire on their own; the client discards its copy.
#[utoipa::path(
    post,
    path = "/api/v1/users/logout",
    tag = "users",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Logged out", body = LogoutResponseBody),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[post("/api/v1/users/logout")]
pub async fn logout_user_handler(user: AuthenticatedUser) -> impl Responder {
    info!(user_id = %user.user_id, "User logged out");
    ApiResponse::success("Logged out", LogoutResponseBody {})
}

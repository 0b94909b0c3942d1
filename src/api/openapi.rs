use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    AuthSessionResponse, LoginRequestDto, LogoutResponseBody, RegisterUserRequest,
    UpdateProfileRequest, UserEnvelope,
};
use crate::auth::application::domain::entities::{UserProfile, UserRole, UserStats};
use crate::leaderboard::adapter::incoming::web::routes::LeaderboardResponse;
use crate::leaderboard::application::domain::entities::LeaderboardEntry;
use crate::recycling::adapter::incoming::web::routes::{
    LogRecyclingRequest, LogRecyclingResponse,
};
use crate::recycling::application::domain::entities::{MaterialType, RecyclingLog};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "RecycLog API",
        version = "1.0.0",
        description = "Recycling activity tracking: accounts, CO2 and points accrual, leaderboard",
    ),
    paths(
        // Users
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::get_user_profile_handler,
        crate::auth::adapter::incoming::web::routes::update_user_profile_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,
        crate::leaderboard::adapter::incoming::web::routes::get_leaderboard_handler,

        // Recycling
        crate::recycling::adapter::incoming::web::routes::log_recycling_handler,
        crate::recycling::adapter::incoming::web::routes::get_user_stats_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            RegisterUserRequest,
            LoginRequestDto,
            UpdateProfileRequest,
            AuthSessionResponse,
            UserEnvelope,
            LogoutResponseBody,
            UserProfile,
            UserRole,
            UserStats,

            LogRecyclingRequest,
            LogRecyclingResponse,
            RecyclingLog,
            MaterialType,

            LeaderboardResponse,
            LeaderboardEntry,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "users", description = "Accounts, sessions and the leaderboard"),
        (name = "recycling", description = "Recycling activity and running totals"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token from register or login"))
                        .build(),
                ),
            )
        }
    }
}

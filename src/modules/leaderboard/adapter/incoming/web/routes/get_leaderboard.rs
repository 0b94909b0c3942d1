use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::leaderboard::application::domain::entities::LeaderboardEntry;
use crate::leaderboard::application::ports::incoming::use_cases::GetLeaderboardError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

/// `limit` is read as text so a malformed value gets the usual error envelope.
#[derive(Debug, Deserialize, IntoParams)]
pub struct LeaderboardParams {
    /// Number of users to return
    #[param(value_type = Option<u64>, example = 20)]
    pub limit: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardResponse {
    pub users: Vec<LeaderboardEntry>,
}

/// Users ranked by points
#[utoipa::path(
    get,
    path = "/api/v1/users/leaderboard",
    tag = "users",
    params(LeaderboardParams),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Leaderboard retrieved", body = LeaderboardResponse),
        (status = 400, description = "Invalid limit", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/users/leaderboard")]
pub async fn get_leaderboard_handler(
    _user: AuthenticatedUser,
    params: web::Query<LeaderboardParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let limit = match params.limit.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match raw.parse::<u64>() {
            Ok(n) => Some(n),
            Err(_) => {
                return ApiResponse::bad_request(
                    "VALIDATION_ERROR",
                    "limit must be a positive integer",
                )
            }
        },
    };

    match data.leaderboard.execute(limit).await {
        Ok(users) => ApiResponse::success(
            "Leaderboard retrieved successfully",
            LeaderboardResponse { users },
        ),
        Err(GetLeaderboardError::InvalidLimit(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(GetLeaderboardError::QueryError(e)) => {
            error!(error = %e, "Failed to read leaderboard");
            ApiResponse::internal_error()
        }
    }
}

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserProfile;
use crate::recycling::application::domain::entities::RecyclingLog;
use crate::recycling::application::ports::incoming::use_cases::{
    LogRecyclingError, LogRecyclingInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;

/// One recycling event.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LogRecyclingRequest {
    /// One of plastic, glass, paper, metal (lowercase)
    #[schema(example = "plastic")]
    pub item_type: Option<String>,

    /// Positive whole number; `5`, `5.0` and `"5"` are all accepted
    #[schema(value_type = Option<i64>, example = 5)]
    pub quantity: Option<Value>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogRecyclingResponse {
    pub user: UserProfile,
    pub recycling_log: RecyclingLog,
}

/// Log recycled items
///
/// Adds CO2 saved (plastic 0.5, glass 0.3, paper 0.2, metal 0.8 kg per item),
/// items and points (10 per item) to the caller's running totals.
#[utoipa::path(
    post,
    path = "/api/v1/recycling/log",
    tag = "recycling",
    security(("BearerAuth" = [])),
    request_body = LogRecyclingRequest,
    responses(
        (status = 200, description = "Recycling activity logged", body = LogRecyclingResponse),
        (status = 400, description = "Missing or invalid item type or quantity", body = ErrorResponse,
            example = json!({
                "success": false,
                "message": "Invalid item type. Must be: plastic, glass, paper, or metal",
                "errors": [{ "code": "VALIDATION_ERROR", "message": "Invalid item type. Must be: plastic, glass, paper, or metal" }]
            })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/recycling/log")]
pub async fn log_recycling_handler(
    user: AuthenticatedUser,
    req: web::Json<LogRecyclingRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let input = LogRecyclingInput {
        item_type: req.item_type,
        quantity: req.quantity,
    };

    match data.recycling.log.execute(user.user_id, input).await {
        Ok(output) => ApiResponse::success(
            "Recycling activity logged successfully",
            LogRecyclingResponse {
                user: output.user,
                recycling_log: output.recycling_log,
            },
        ),
        Err(LogRecyclingError::InvalidInput(e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(LogRecyclingError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(LogRecyclingError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to update user stats");
            ApiResponse::internal_error()
        }
    }
}

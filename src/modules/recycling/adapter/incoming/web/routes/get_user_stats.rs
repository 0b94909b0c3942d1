use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserStats;
use crate::recycling::application::ports::incoming::use_cases::GetUserStatsError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// Caller's recycling totals
#[utoipa::path(
    get,
    path = "/api/v1/recycling/stats",
    tag = "recycling",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "User stats retrieved", body = UserStats),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/recycling/stats")]
pub async fn get_user_stats_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.recycling.stats.execute(user.user_id).await {
        Ok(stats) => ApiResponse::success("User stats retrieved successfully", stats),
        Err(GetUserStatsError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(GetUserStatsError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to read user stats");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recycling::application::services::GetUserStatsService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider};
    use crate::tests::support::fixtures::account;
    use crate::tests::support::in_memory_store::InMemoryUserStore;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use uuid::Uuid;

    async fn call(store: InMemoryUserStore, user_id: Uuid) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_user_stats(GetUserStatsService::new(store))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(token_provider()))
                .service(get_user_stats_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/recycling/stats")
            .insert_header(bearer(user_id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_stats_shape() {
        let store = InMemoryUserStore::default();
        let mut user = account("greenfan");
        user.stats = UserStats {
            total_items_recycled: 5,
            co2_saved: 2.5,
            points: 50,
        };
        let id = user.id.value();
        store.seed(user);

        let (status, body) = call(store, id).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "User stats retrieved successfully");
        assert_eq!(
            body["data"],
            json!({ "totalItemsRecycled": 5, "co2Saved": 2.5, "points": 50 })
        );
    }

    #[actix_web::test]
    async fn test_stats_missing_user() {
        let (status, _) = call(InMemoryUserStore::default(), Uuid::new_v4()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
